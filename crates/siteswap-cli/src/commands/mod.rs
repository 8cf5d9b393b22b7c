//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod plan;
pub mod validate;
