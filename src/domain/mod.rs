//! Domain Layer
//!
//! The data the pipeline moves around and the ports it moves it through.
//!
//! ## Structure
//!
//! - `entities/` - Diagnostics, the substitution table, configurations
//! - `value_objects/` - Language levels and lexical path helpers
//! - `services/` - Diagnostic formatting
//! - `ports/` - `FileSystem` and `Frontend` traits implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
