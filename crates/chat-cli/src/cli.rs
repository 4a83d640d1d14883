use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chat")]
#[command(about = "Local account store for the chat app: sign up, log in, view profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Directory holding account data (overrides storage.dir from config)
    #[arg(long, global = true)]
    pub(crate) data_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
