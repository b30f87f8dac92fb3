//! User configuration settings
//!
//! Layered configuration: defaults → environment variables

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};
use crate::process::Multiplexer;

/// Prefix for environment variable overrides (`SESSIONIZER_MULTIPLEXER`, etc.)
pub const ENV_PREFIX: &str = "SESSIONIZER_";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which terminal multiplexer to launch
    pub multiplexer: Multiplexer,

    /// Override for the multiplexer binary (defaults to the kind's own name)
    #[serde(deserialize_with = "optional_text")]
    pub multiplexer_program: Option<String>,

    /// Fuzzy selector binary
    #[serde(deserialize_with = "text")]
    pub selector_program: String,

    /// Extra arguments passed to the selector, either a list or a
    /// whitespace-separated string (`SESSIONIZER_SELECTOR_ARGS="--reverse --height=40%"`)
    #[serde(deserialize_with = "arg_list")]
    pub selector_args: Vec<String>,

    /// Enable debug logging
    pub debug: bool,

    /// Log file path (if set, logs to file instead of stderr)
    #[serde(deserialize_with = "optional_path")]
    pub log_file: Option<PathBuf>,
}

/// Environment values are parsed eagerly (`true` is a bool, `1` an integer);
/// string-typed settings take any scalar back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArgList {
    List(Vec<Scalar>),
    Line(Scalar),
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(Scalar::into_text)
}

fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|v| v.map(Scalar::into_text))
}

fn optional_path<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error> {
    optional_text(deserializer).map(|v| v.map(PathBuf::from))
}

fn arg_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match ArgList::deserialize(deserializer)? {
        ArgList::List(items) => items.into_iter().map(Scalar::into_text).collect(),
        ArgList::Line(line) => line
            .into_text()
            .split_whitespace()
            .map(String::from)
            .collect(),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            multiplexer: Multiplexer::Zellij,
            multiplexer_program: None,
            selector_program: "fzf".to_string(),
            selector_args: Vec::new(),
            debug: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from defaults and the environment
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    /// The default provider stack
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extract a configuration from an arbitrary provider stack
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config = figment
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        Ok(config)
    }

    /// The multiplexer binary to invoke
    pub fn multiplexer_program(&self) -> &str {
        self.multiplexer_program
            .as_deref()
            .unwrap_or_else(|| self.multiplexer.program())
    }
}
