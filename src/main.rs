//! html-inliner CLI
//!
//! Usage: html-inliner [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build   Assemble the build manifest's output into the inline document
//!   config  Print the resolved configuration

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build => commands::build::cmd_build(cli.config.as_deref(), cli.json, cli.verbose),
        Commands::Config => commands::config::cmd_config(cli.config.as_deref(), cli.json),
    };

    if let Err(err) = result {
        ui::error::print_error(cli.command.name(), &err, cli.json);
        std::process::exit(1);
    }
}

/// `-v` count picks the level; `RUST_LOG` wins when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
