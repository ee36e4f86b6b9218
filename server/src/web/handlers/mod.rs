//! HTTP request handlers for the dashboard API.
//!
//! This module is organized by domain:
//! - `common` - Shared response envelope, query structs, and utilities
//! - `services` - Service directory CRUD and status checks
//! - `dashboard` - Aggregated dashboard summary
//! - `keys` - API key management

pub mod common;
pub mod dashboard;
pub mod keys;
pub mod services;

// Re-export all public handler functions for convenience
// Note: common module is internal, used only by sibling modules
pub use dashboard::*;
pub use keys::*;
pub use services::*;
