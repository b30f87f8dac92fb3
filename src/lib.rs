//! Zellij Sessionizer - pick a project directory and jump into a session for it
//!
//! Collects candidate directories from command-line paths (a trailing `/*`
//! expands to immediate subdirectories), hands them to an external fuzzy
//! selector, then changes into the chosen directory and attaches to a
//! terminal multiplexer session named after it, creating it if needed.
//!
//! # Modules
//!
//! - [`candidates`] - Directory candidate collection and wildcard expansion
//! - [`session`] - Session name derivation
//! - [`process`] - External command runner, selector and multiplexer
//! - [`sessionizer`] - The guard → collect → select → launch pipeline
//! - [`config`] - Layered settings
//! - [`error`] - Error types

pub mod candidates;
pub mod config;
pub mod error;
pub mod process;
pub mod session;
pub mod sessionizer;

pub use candidates::{Candidates, Warning, collect_candidates, is_directory};
pub use config::Config;
pub use error::{Error, Result};
pub use process::{Multiplexer, ProcessRunner, Selector, SystemRunner};
pub use session::derive_session_name;
pub use sessionizer::{Outcome, Sessionizer};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
