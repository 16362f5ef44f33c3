use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blockdiff",
    about = "Word-level diff of block documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SideArg {
    Before,
    After,
    Both,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff two files line by line and highlight the changed words
    Diff(DiffArgs),
    /// Print the raw diff script of two files
    Words(WordsArgs),
    /// Show blocks added or removed between two keyed block files
    Blocks(BlocksArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub before: PathBuf,
    pub after: PathBuf,
    /// Diff whole lines instead of words
    #[arg(long)]
    pub lines: bool,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Which side to print
    #[arg(long, default_value = "after")]
    pub side: SideArg,
}

#[derive(Args)]
pub struct WordsArgs {
    pub before: PathBuf,
    pub after: PathBuf,
    #[arg(long)]
    pub lines: bool,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct BlocksArgs {
    /// One block per line, as `key<TAB>text`
    pub before: PathBuf,
    pub after: PathBuf,
}
