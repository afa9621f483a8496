//! Command-line interface for fq
//!
//! Argument parsing for the `fq` binary, plus the flattened [`CliConfig`]
//! that [`crate::config::Config::apply_cli`] layers over file settings.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fq - Inspect URL-safe filter and order expressions
///
/// fq compiles the dash-encoded filter language used in query strings into
/// a predicate tree and prints it, which makes it easy to check what a URL
/// will actually ask the backend for.
#[derive(Parser, Debug)]
#[command(name = "fq")]
#[command(author, about)]
#[command(after_help = "EXAMPLES:\n  \
    # Compile a filter taken from a URL\n  \
    fq filter \"price-ge-10-and-not-title-isNull\"\n\n  \
    # Compile canonical text without dash decoding\n  \
    fq --canonical filter \"price ge 10 and title like 'a-b'\"\n\n  \
    # Show the sort entries of an order expression\n  \
    fq order Dprice-Aname\n\n  \
    # Show how the lexer splits an expression\n  \
    fq tokens \"a-eq-'x--y'\"\n\n  \
    # Encode canonical text for a URL\n  \
    fq escape \"title like 'space-rug'\"")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Treat input as canonical whitespace-separated text (no dash decoding)
    #[arg(long, global = true)]
    pub canonical: bool,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(short, long, global = true)]
    pub compact: bool,

    /// Print the canonical text form instead of JSON
    #[arg(short, long, global = true)]
    pub text: bool,

    /// Maximum nesting of groups and negations
    #[arg(long, value_name = "N", global = true)]
    pub max_depth: Option<usize>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compile a filter expression and print its predicate tree
    Filter {
        /// Filter expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Compile an order expression and print its sort entries
    Order {
        /// Order expression, e.g. Dprice-Aname
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Print the token stream of a filter expression
    Tokens {
        /// Filter expression
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Encode canonical text into the dash form used in URLs
    Escape {
        /// Canonical text
        #[arg(id = "input_text", value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },

    /// Decode dash-encoded text into canonical form
    Unescape {
        /// Dash-encoded text
        #[arg(id = "input_text", value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
}

/// Command-line settings that override configuration file values
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Skip dash decoding
    pub canonical: bool,
    /// Compact JSON output
    pub compact: bool,
    /// Text output
    pub text: bool,
    /// Depth limit override
    pub max_depth: Option<usize>,
    /// Explicit config file
    pub config_file: Option<PathBuf>,
    /// Verbosity level
    pub verbose: u8,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            canonical: cli.canonical,
            compact: cli.compact,
            text: cli.text,
            max_depth: cli.max_depth,
            config_file: cli.config.clone(),
            verbose: cli.verbose,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}
