use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "coalesce",
    about = "Merge overlapping closed intervals",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with merge settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a JSON array of [start, end] pairs
    Merge(InputArgs),
    /// Check whether a JSON array of [start, end] pairs is already merged
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Input file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// The input path, or `None` for stdin.
    pub fn path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
