use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docpurge",
    version,
    about = "Bounded batch deletion for hosted document databases"
)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "docpurge.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one purge pass and exit.
    Run {
        /// Override the configured global deletion limit.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Serve the purge endpoint over HTTP.
    Serve {
        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,
    },
}
