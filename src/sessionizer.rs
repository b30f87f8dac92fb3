//! The sessionizer pipeline
//!
//! One linear pass: refuse to nest inside the multiplexer, collect
//! candidates, let the user select one, derive the session name, then change
//! into the directory and hand the terminal to the multiplexer.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::candidates::{Candidates, Warning, collect_candidates};
use crate::config::Config;
use crate::error::{Error, ProcessError, Result};
use crate::process::{CommandSpec, ProcessRunner, Selector};
use crate::session::derive_session_name;

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selector returned nothing
    Cancelled,
    /// The multiplexer ran and exited successfully
    Launched { directory: String, session: String },
}

pub struct Sessionizer<R> {
    config: Config,
    selector: Selector,
    runner: R,
}

impl<R: ProcessRunner> Sessionizer<R> {
    pub fn new(config: Config, runner: R) -> Self {
        let selector = Selector::from_config(&config);
        Self {
            config,
            selector,
            runner,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Run the whole pipeline for `args`, passing each warning to `on_warning`
    /// as soon as it is known.
    pub async fn run<F>(&self, args: &[String], mut on_warning: F) -> Result<Outcome>
    where
        F: FnMut(&Warning),
    {
        self.guard()?;

        if args.is_empty() {
            return Err(Error::NoPaths);
        }

        let candidates = collect_candidates(args);
        for warning in &candidates.warnings {
            on_warning(warning);
        }
        let Candidates { entries, .. } = candidates;
        if entries.is_empty() {
            return Err(Error::NoValidDirectories);
        }

        let Some(selection) = self.selector.select_one(&self.runner, &entries).await? else {
            debug!("selection cancelled");
            return Ok(Outcome::Cancelled);
        };

        let session = derive_session_name(&selection);
        self.launch(&selection, &session).await?;

        Ok(Outcome::Launched {
            directory: selection,
            session,
        })
    }

    /// Fail if we are already inside the configured multiplexer
    pub fn guard(&self) -> Result<()> {
        let mux = self.config.multiplexer;
        if mux.is_nested(&self.runner) {
            return Err(Error::NestedSession(mux));
        }
        Ok(())
    }

    /// The command used to attach to (or create) `session`
    pub fn attach_command(&self, session: &str) -> CommandSpec {
        self.config
            .multiplexer
            .attach_command(self.config.multiplexer_program(), session)
    }

    /// Change into `directory` and run the multiplexer for `session` until it exits
    #[instrument(skip(self))]
    pub async fn launch(&self, directory: &str, session: &str) -> Result<()> {
        self.runner
            .set_current_dir(Path::new(directory))
            .map_err(|source| Error::ChangeDir {
                path: directory.into(),
                source,
            })?;

        let command = self.attach_command(session);
        info!("launching {}", command);

        let launch_failed = |reason: String| ProcessError::LaunchFailed {
            program: command.program.clone(),
            reason,
        };

        let status = self
            .runner
            .run_interactive(&command)
            .await
            .map_err(|e| launch_failed(e.to_string()))?;

        if !status.success() {
            return Err(launch_failed(status.to_string()).into());
        }

        Ok(())
    }
}
