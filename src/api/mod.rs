//! API Module
//!
//! Client configuration and wire-format decoding for the balance
//! lookup service.

mod ethplorer;
mod response;

pub use ethplorer::*;
pub use response::*;
