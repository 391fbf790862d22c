//! recheck - type check a project as it looks after source transformation
//!
//! Every file of a project is parsed, passed through a chain of
//! source-to-source transformers, printed, and written into a shadow
//! directory. The project is then compiled again through a file system
//! overlay that makes each original path read as its transformed copy, so
//! transformers that break type correctness are caught before emit.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{RecheckOptions, RecheckReport, RecheckUseCase};
pub use domain::entities::{Diagnostic, DiagnosticCategory, Position};
pub use domain::ports::{BoxedTransformer, FileSystem, Frontend, TransformContext, Transformer};
pub use error::{RecheckError, RecheckResult};
pub use infrastructure::{FakeFs, LocalFs, MiniTs};
