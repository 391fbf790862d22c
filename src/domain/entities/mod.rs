//! Domain Entities
//!
//! - `Diagnostic` - An issue reported while configuring, transforming or checking
//! - `Substitute` / `SubstitutionTable` - Original path to shadow path redirections
//! - `RawConfig` / `ResolvedConfig` - Project configuration before and after interpretation

mod config;
mod diagnostic;
mod substitution;

pub use config::{ParsedConfig, RawConfig, ResolvedConfig};
pub use diagnostic::{Diagnostic, DiagnosticCategory, Position};
pub use substitution::{Substitute, SubstitutionTable};
