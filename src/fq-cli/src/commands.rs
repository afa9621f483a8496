//! Subcommand execution
//!
//! Each command renders its result to a string so that output formatting
//! can be tested without spawning the binary.

use crate::cli::Commands;
use crate::config::Config;
use anyhow::{Context, Result};
use fq_parser::{compile_order, escape, format_order, tokenize, unescape, FilterParser};
use serde::Serialize;

/// Execute a subcommand and return what should be printed
pub fn execute(command: &Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Filter { expression } => {
            let parser = FilterParser::with_config(config.parser.clone());
            let predicate = parser
                .parse(expression)
                .context("Failed to compile filter")?;
            log::info!("filter references {:?}", predicate.properties());
            if config.output.text {
                Ok(predicate.to_string())
            } else {
                to_json(&predicate, config)
            }
        }
        Commands::Order { expression } => {
            let entries =
                compile_order(Some(expression.as_str())).context("Failed to compile order")?;
            log::info!("order has {} entries", entries.len());
            if config.output.text {
                Ok(format_order(&entries))
            } else {
                to_json(&entries, config)
            }
        }
        Commands::Tokens { expression } => {
            let text = if config.parser.decode_dashes {
                unescape(expression)
            } else {
                expression.clone()
            };
            let tokens = tokenize(&text).context("Failed to tokenize filter")?;
            if config.output.text {
                Ok(tokens
                    .iter()
                    .map(|token| format!("{}\t{}\t{}", token.position, token.kind, token.text))
                    .collect::<Vec<_>>()
                    .join("\n"))
            } else {
                to_json(&tokens, config)
            }
        }
        Commands::Escape { text } => Ok(escape(text)),
        Commands::Unescape { text } => Ok(unescape(text)),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, config: &Config) -> Result<String> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
