//! Supported terminal multiplexers

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CommandSpec, ProcessRunner};

/// A terminal multiplexer that can attach to a named session, creating it if absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplexer {
    #[default]
    Zellij,
    Tmux,
}

impl Multiplexer {
    /// Default binary name
    pub fn program(&self) -> &'static str {
        match self {
            Multiplexer::Zellij => "zellij",
            Multiplexer::Tmux => "tmux",
        }
    }

    /// Human-readable name used in messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Multiplexer::Zellij => "Zellij",
            Multiplexer::Tmux => "tmux",
        }
    }

    /// Environment variable the multiplexer sets inside its own sessions
    pub fn guard_var(&self) -> &'static str {
        match self {
            Multiplexer::Zellij => "ZELLIJ",
            Multiplexer::Tmux => "TMUX",
        }
    }

    /// Whether the current process is already running inside this multiplexer
    pub fn is_nested(&self, runner: &dyn ProcessRunner) -> bool {
        runner
            .env_var(self.guard_var())
            .is_some_and(|value| !value.is_empty())
    }

    /// Build the "attach, create if absent" invocation for `session`
    pub fn attach_command(&self, program: &str, session: &str) -> CommandSpec {
        let cmd = CommandSpec::new(program);
        match self {
            Multiplexer::Zellij => cmd.args(["attach", session, "-c"]),
            Multiplexer::Tmux => cmd.args(["new-session", "-A", "-s", session]),
        }
    }
}

impl fmt::Display for Multiplexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
