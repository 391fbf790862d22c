//! Common test utilities for recheck integration tests.
//!
//! This module provides:
//! - `TestProject`: a project on real disk inside a temp directory
//! - Fixtures: reusable configuration and source constants

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
