//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod fake;
mod local;
pub mod matcher;
mod substituting;

pub use fake::{FakeFileEntry, FakeFs};
pub use local::LocalFs;
pub use matcher::FileMatcher;
pub use substituting::SubstitutingFs;
