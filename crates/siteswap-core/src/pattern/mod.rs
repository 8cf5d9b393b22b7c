//! Siteswap notation parsing and validation.

pub mod alphabet;
mod validator;

pub use validator::*;
