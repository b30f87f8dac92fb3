//! Configuration module
//!
//! Handles user settings layered from built-in defaults and
//! `SESSIONIZER_*` environment variables.

mod settings;

pub use settings::*;
