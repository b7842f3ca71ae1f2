//! Command modules for the registry configuration CLI.
//!
//! - `complete_cmd`: complete a declared registry with a fetched descriptor
//! - `validate_cmd`: validate declared registries
//! - `coords_cmd`: parse and normalize artifact coordinates

pub mod complete_cmd;
pub mod coords_cmd;
pub mod validate_cmd;
