/// Shared utilities used by every layer: error types, result alias, file checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
