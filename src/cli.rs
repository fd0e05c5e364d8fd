use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// html-inliner - fold a bundler's output into one inline HTML snippet
#[derive(Parser, Debug)]
#[command(name = "html-inliner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./inliner.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Assemble the build manifest's output into the inline document
    Build,

    /// Print the resolved configuration and the names it derives
    Config,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build => "build",
            Commands::Config => "config",
        }
    }
}
