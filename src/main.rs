//! Zellij Sessionizer - fuzzy-pick a project directory and attach to its session
//!
//! Run with `zellij-sessionizer ~/projects/* ~/dotfiles` or `--help` for usage.

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::style::Stylize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use zellij_sessionizer::{
    APP_NAME, Config, Error, Outcome, Sessionizer, SystemRunner, VERSION, Warning,
};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Pick a project directory with a fuzzy finder and attach to a multiplexer session named after it")]
#[command(long_about = None)]
struct Cli {
    /// Directories to choose from; a trailing `/*` offers every immediate subdirectory
    #[arg(value_name = "PATH_OR_GLOB", allow_hyphen_values = true, trailing_var_arg = true)]
    paths: Vec<String>,
}

fn setup_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if config.debug => EnvFilter::new("debug").add_directive("tokio=warn".parse()?),
        // Stay quiet on the terminal the selector and multiplexer draw on
        Err(_) => EnvFilter::new("warn"),
    };

    if let Some(path) = &config.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(file).with_ansi(false).with_target(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    }

    Ok(())
}

fn print_warning(warning: &Warning) {
    eprintln!("{} {}", "Warning:".yellow(), warning);
}

fn print_error(err: &Error) {
    match err {
        Error::NestedSession(_) => eprintln!("{}", err.to_string().red()),
        Error::NoPaths | Error::NoValidDirectories => eprintln!("{err}"),
        _ => eprintln!("{} {}", "Error:".red(), err),
    }

    if let Some(hint) = err.hint() {
        eprintln!("{hint}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks
    color_eyre::install()?;

    // Only 0 and 1 are used as exit codes; clap's usage errors would exit 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print()?;
            return Ok(code);
        }
    };

    // A broken override must not quietly fall back to another multiplexer
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            return Ok(ExitCode::from(e.exit_code()));
        }
    };
    let sessionizer = Sessionizer::new(config, SystemRunner);

    // Refuse to nest before anything touches the filesystem (including the log file)
    if let Err(e) = sessionizer.guard() {
        print_error(&e);
        return Ok(ExitCode::from(e.exit_code()));
    }

    setup_logging(sessionizer.config())?;
    info!("Starting {} v{}", APP_NAME, VERSION);

    match sessionizer.run(&cli.paths, print_warning).await {
        Ok(Outcome::Cancelled) => Ok(ExitCode::SUCCESS),
        Ok(Outcome::Launched { session, .. }) => {
            info!("Session {} exited", session);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_paths() {
        let cli = Cli::try_parse_from(["zellij-sessionizer", "~/work", "~/src/*"]).unwrap();
        assert_eq!(cli.paths, vec!["~/work", "~/src/*"]);

        let cli = Cli::try_parse_from(["zellij-sessionizer"]).unwrap();
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_cli_accepts_leading_dash_directories() {
        let cli = Cli::try_parse_from(["zellij-sessionizer", "-notes", "~/work/*"]).unwrap();
        assert_eq!(cli.paths, vec!["-notes", "~/work/*"]);

        let cli = Cli::try_parse_from(["zellij-sessionizer", "~/work", "-notes", "--old"]).unwrap();
        assert_eq!(cli.paths, vec!["~/work", "-notes", "--old"]);
    }
}
