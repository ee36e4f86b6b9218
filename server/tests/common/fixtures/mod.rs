//! This module provides reusable test utilities:
//! - Canned status probers
//! - Repository doubles with scripted failures
//! - Service record builders
//! - Temp-file SQLite databases

// Allow unused code in test fixtures - they are utilities shared across suites
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_prober;
pub mod mock_repository;
pub mod test_data;
pub mod test_database;

// Re-export commonly used items
pub use mock_prober::{FailingProber, FixedProber, ScriptedProber};
pub use mock_repository::{FailingRepository, WriteFailingRepository};
pub use test_data::*;
pub use test_database::TestDatabase;
