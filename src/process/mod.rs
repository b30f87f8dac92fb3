//! External process integration
//!
//! - `ProcessRunner` - The seam for running subprocesses and touching process state
//! - `SystemRunner` - Real implementation on top of `tokio::process`
//! - `Selector` - Fuzzy selector invocation
//! - `Multiplexer` - Supported multiplexers and their attach-or-create verbs

mod multiplexer;
mod runner;
mod selector;

pub use multiplexer::*;
pub use runner::*;
pub use selector::*;
