//! Shared domain types and runtime configuration for snvet.
//!
//! Everything in here is plain data or a trait boundary: the actual
//! filtering and flagging logic lives in `snvet-core`, the dump parsers
//! in `snvet-formats`.

pub mod config;
pub mod document;
pub mod report;
pub mod source;

mod macros;

// Re-exported so the logging macros can resolve `$crate::tracing` at any
// call site without the caller depending on tracing directly.
pub use tracing;
