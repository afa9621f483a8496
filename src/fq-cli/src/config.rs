//! Configuration for fq
//!
//! Settings come from, in increasing priority: built-in defaults, one TOML
//! file, `FQ_*` environment variables and finally command-line flags. The
//! file is the `--config` argument when given, otherwise the first of
//! `fq.toml` or `.fq.toml` in the working directory, otherwise
//! `<config_dir>/filterq/config.toml`.

use crate::cli::CliConfig;
use anyhow::{Context, Result};
use fq_parser::ParserConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 2] = ["fq.toml", ".fq.toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter compilation settings
    pub parser: ParserConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Debug and diagnostic settings
    pub debug: DebugConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Print canonical text instead of JSON
    pub text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            text: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log verbosity (0 warn, 1 info, 2 debug, 3+ trace)
    pub verbosity: u8,
}

impl Config {
    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge_file(path)?;
        Ok(config)
    }

    /// Load configuration from a file and the environment
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .or_else(|| Self::find_config_file(None));
        let mut config = match config_path {
            Some(config_path) => {
                log::debug!("loading config from {}", config_path.display());
                Self::load_from_file(&config_path)?
            }
            None => Self::default(),
        };

        config.merge_env_with_reader(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Find a configuration file in the working directory or the user config dir
    pub(crate) fn find_config_file(current_dir: Option<&Path>) -> Option<PathBuf> {
        let current_dir = match current_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        for name in CONFIG_NAMES {
            let path = current_dir.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        dirs::config_dir()
            .map(|dir| dir.join("filterq").join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Replace settings with a TOML file, missing keys taking defaults
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        *self = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML config: {}", path.display()))?;
        Ok(())
    }

    /// Merge `FQ_*` environment variables through a custom reader
    pub(crate) fn merge_env_with_reader<F>(&mut self, env_reader: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env_reader("FQ_MAX_DEPTH") {
            self.parser.max_depth = val
                .parse()
                .with_context(|| format!("FQ_MAX_DEPTH is not a number: {}", val))?;
        }

        if let Some(val) = env_reader("FQ_DECODE_DASHES") {
            self.parser.decode_dashes = val != "0" && val.to_lowercase() != "false";
        }

        if let Some(val) = env_reader("FQ_PRETTY") {
            self.output.pretty = val != "0" && val.to_lowercase() != "false";
        }

        Ok(())
    }

    /// Apply command-line overrides
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if cli.canonical {
            self.parser.decode_dashes = false;
        }
        if let Some(max_depth) = cli.max_depth {
            self.parser.max_depth = max_depth;
        }
        if cli.compact {
            self.output.pretty = false;
        }
        if cli.text {
            self.output.text = true;
        }
        if cli.verbose > 0 {
            self.debug.verbosity = cli.verbose;
        }
    }
}
