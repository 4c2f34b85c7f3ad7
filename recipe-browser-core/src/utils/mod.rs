//! Utility modules.

/// One-line abbreviation of response bodies for logs.
pub mod log_sanitizer;
