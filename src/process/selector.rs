//! Fuzzy selector invocation
//!
//! The selector is an opaque filter: candidates go in on stdin one per line,
//! the chosen line comes back on stdout, or nothing if the user cancelled.

use tracing::{debug, instrument};

use super::{CommandSpec, ProcessRunner};
use crate::config::Config;
use crate::error::{ProcessError, Result};

/// External fuzzy selector, `fzf` by default
#[derive(Debug, Clone)]
pub struct Selector {
    command: CommandSpec,
}

impl Selector {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CommandSpec::new(&config.selector_program).args(&config.selector_args))
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }

    /// Let the user pick one of `candidates`.
    ///
    /// Returns `Ok(None)` when the selector printed nothing (user cancelled).
    #[instrument(skip_all, fields(selector = %self.command.program, candidates = candidates.len()))]
    pub async fn select_one<R>(&self, runner: &R, candidates: &[String]) -> Result<Option<String>>
    where
        R: ProcessRunner + ?Sized,
    {
        let input = render_input(candidates);

        let output = runner
            .run_filter(&self.command, &input)
            .await
            .map_err(|e| ProcessError::SelectorFailed {
                program: self.command.program.clone(),
                reason: e.to_string(),
            })?;

        let selection = parse_selection(&output.stdout);
        debug!(status = %output.status, ?selection, "selector returned");

        Ok(selection)
    }
}

/// One candidate per line, newline terminated
fn render_input(candidates: &[String]) -> String {
    let mut input = candidates.join("\n");
    if !input.is_empty() {
        input.push('\n');
    }
    input
}

/// The first output line with its line ending stripped; empty means no selection
fn parse_selection(stdout: &str) -> Option<String> {
    let line = stdout.lines().next()?;
    let line = line.strip_suffix('\r').unwrap_or(line);
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_input() {
        let candidates = vec!["/tmp/projA".to_string(), "/tmp/group/x".to_string()];
        assert_eq!(render_input(&candidates), "/tmp/projA\n/tmp/group/x\n");
        assert_eq!(render_input(&[]), "");
    }

    #[test]
    fn test_parse_selection_strips_newline() {
        assert_eq!(parse_selection("/tmp/projA\n"), Some("/tmp/projA".to_string()));
        assert_eq!(parse_selection("/tmp/projA\r\n"), Some("/tmp/projA".to_string()));
        assert_eq!(parse_selection("/tmp/projA"), Some("/tmp/projA".to_string()));
    }

    #[test]
    fn test_parse_selection_takes_first_line() {
        assert_eq!(parse_selection("/a\n/b\n"), Some("/a".to_string()));
    }

    #[test]
    fn test_parse_selection_empty_is_cancel() {
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("\n"), None);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.selector_program = "sk".to_string();
        config.selector_args = vec!["--reverse".to_string()];

        let selector = Selector::from_config(&config);
        assert_eq!(selector.command().to_string(), "sk --reverse");
    }
}
