mod cli;
mod commands;
mod config;

use anyhow::Result;
use std::process;

use crate::cli::{parse_args, CliConfig};
use crate::config::Config;

fn main() {
    // Check for --version flag and show build info
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        print_version();
        return;
    }

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");

    println!("fq {}", version);
    println!("Parser: fq-parser {}", fq_parser::VERSION);
    println!("Commit: {}", git_hash);
    println!("Built: {}", build_date);
}

fn run() -> Result<()> {
    let args = parse_args();
    let cli_config = CliConfig::from(&args);

    let mut config = Config::load(cli_config.config_file.as_deref())?;
    config.apply_cli(&cli_config);

    setup_logging(&config);
    log::debug!("effective configuration: {:?}", config);

    let output = commands::execute(&args.command, &config)?;
    println!("{}", output);
    Ok(())
}

fn setup_logging(config: &Config) {
    let log_level = match config.debug.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}
