//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod language_level;
pub mod path;

pub use language_level::LanguageLevel;
