//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Fake, Substituting overlay)
//! - `minits/` - The MiniTs compiler front end

pub mod fs;
pub mod minits;

pub use fs::{FakeFs, LocalFs, SubstitutingFs};
pub use minits::MiniTs;
