//! Recheck Module
//!
//! Runs the two-phase pipeline: transform every project file into a shadow
//! directory, then type check the project as if the transformed files had
//! replaced the originals.
//!
//! ## Structure
//!
//! - `options` - Run options (`RecheckOptions`)
//! - `report` - Run outcome (`RecheckReport`)
//! - `use_case` - Orchestration (`RecheckUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use recheck::application::RecheckUseCase;
//! use recheck::infrastructure::{LocalFs, MiniTs};
//!
//! let use_case = RecheckUseCase::new(MiniTs, LocalFs::new());
//! for line in use_case.recheck("tsconfig.json", &[]) {
//!     eprint!("{line}");
//! }
//! ```

mod options;
mod report;
mod use_case;

pub use options::RecheckOptions;
pub use report::RecheckReport;
pub use use_case::RecheckUseCase;
