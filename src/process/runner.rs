//! Subprocess runner
//!
//! Every interaction with the outside world the pipeline needs (environment
//! lookups, the working directory, subprocesses) goes through
//! [`ProcessRunner`], so tests can swap in a fake.

use std::fmt;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a subprocess finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, or `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Captured result of a filter process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutput {
    pub stdout: String,
    pub status: RunStatus,
}

/// Capability to run external commands
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Look up an environment variable
    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    /// Change the working directory of the current process
    fn set_current_dir(&self, path: &Path) -> std::io::Result<()> {
        std::env::set_current_dir(path)
    }

    /// Run `command` with `input` on stdin and capture its stdout.
    /// Stderr stays attached to the terminal.
    async fn run_filter(&self, command: &CommandSpec, input: &str) -> std::io::Result<FilterOutput>;

    /// Run `command` attached to the current terminal and wait for it to exit
    async fn run_interactive(&self, command: &CommandSpec) -> std::io::Result<RunStatus>;
}

/// Runs real subprocesses through `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %command, input_len = input.len()))]
    async fn run_filter(&self, command: &CommandSpec, input: &str) -> std::io::Result<FilterOutput> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child.stdin.take();
        let input = input.as_bytes().to_vec();

        // Feed stdin while draining stdout so a filter that echoes early can't stall us.
        let feed = async move {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(&input).await {
                    Ok(()) => {}
                    // The filter may exit before reading everything.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                        debug!("filter closed stdin early");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;
        fed?;

        let status = RunStatus::from(output.status);
        debug!("filter finished with {}", status);

        Ok(FilterOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status,
        })
    }

    #[instrument(skip_all, fields(command = %command))]
    async fn run_interactive(&self, command: &CommandSpec) -> std::io::Result<RunStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(RunStatus::from(status))
    }
}
