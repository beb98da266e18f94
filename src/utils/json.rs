//! JSON Field Extraction Utilities
//!
//! Lenient field readers for the loosely-typed payloads the balance
//! service returns. Numeric fields may arrive as JSON numbers or as
//! decimal strings; a field of the wrong shape reads as absent.

use serde_json::Value;

/// Extract a string field from a JSON object
pub fn get_json_string(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Extract an f64 field (handles both number and decimal string)
pub fn get_json_f64(value: &Value, field: &str) -> Option<f64> {
    value.get(field).and_then(as_lenient_f64)
}

/// Extract a u64 field (handles both number and decimal string)
pub fn get_json_u64(value: &Value, field: &str) -> Option<u64> {
    value.get(field).and_then(|v| {
        if let Some(n) = v.as_u64() {
            Some(n)
        } else if let Some(s) = v.as_str() {
            s.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Extract a u32 field (handles both number and decimal string)
pub fn get_json_u32(value: &Value, field: &str) -> Option<u32> {
    get_json_u64(value, field).and_then(|n| u32::try_from(n).ok())
}

fn as_lenient_f64(v: &Value) -> Option<f64> {
    if let Some(n) = v.as_f64() {
        Some(n)
    } else if let Some(s) = v.as_str() {
        s.trim().parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_json_f64() {
        let json: Value = serde_json::json!({
            "number": 1.5,
            "integer": 3,
            "string": "2.25",
            "bad": "not-a-number",
            "bool": true
        });

        assert_eq!(get_json_f64(&json, "number"), Some(1.5));
        assert_eq!(get_json_f64(&json, "integer"), Some(3.0));
        assert_eq!(get_json_f64(&json, "string"), Some(2.25));
        assert_eq!(get_json_f64(&json, "bad"), None);
        assert_eq!(get_json_f64(&json, "bool"), None);
        assert_eq!(get_json_f64(&json, "missing"), None);
    }

    #[test]
    fn test_get_json_u64() {
        let json: Value = serde_json::json!({
            "number": 42,
            "string": "42",
            "negative": -1,
            "fraction": "4.2"
        });

        assert_eq!(get_json_u64(&json, "number"), Some(42));
        assert_eq!(get_json_u64(&json, "string"), Some(42));
        assert_eq!(get_json_u64(&json, "negative"), None);
        assert_eq!(get_json_u64(&json, "fraction"), None);
    }

    #[test]
    fn test_get_json_u32_rejects_overflow() {
        let json: Value = serde_json::json!({ "big": 4294967296u64, "ok": "18" });
        assert_eq!(get_json_u32(&json, "big"), None);
        assert_eq!(get_json_u32(&json, "ok"), Some(18));
    }

    #[test]
    fn test_get_json_string() {
        let json: Value = serde_json::json!({ "name": "Dai", "count": 2 });
        assert_eq!(get_json_string(&json, "name"), Some("Dai".to_string()));
        assert_eq!(get_json_string(&json, "count"), None);
    }
}
