//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT know which compiler or which file system it drives
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RecheckUseCase` - Orchestrates a full transform-then-check run
//!
//! ## Stages
//!
//! - `ConfigResolver` - Load and interpret project configuration
//! - `TransformStage` - Transform, print and write files to the shadow directory
//! - `RecheckStage` - Type check the project through the overlay

pub mod check;
pub mod config_resolver;
pub mod recheck;
pub mod transform;

pub use check::RecheckStage;
pub use config_resolver::ConfigResolver;
pub use recheck::{RecheckOptions, RecheckReport, RecheckUseCase};
pub use transform::{TransformOutcome, TransformStage};
