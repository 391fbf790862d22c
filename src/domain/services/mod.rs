//! Domain Services
//!
//! Pure logic over domain entities, no I/O.

pub mod diagnostic_format;

pub use diagnostic_format::{format_diagnostic, format_diagnostics, FormatHost, NEW_LINE};
