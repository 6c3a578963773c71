//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Vaultgraph - materialize Go import graphs as an Obsidian vault
#[derive(Parser)]
#[command(name = "vaultgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one cross-linked note per package into a vault
    Generate(GenerateArgs),

    /// Merge package-name tokens into Obsidian's custom dictionary
    Spellings(SpellingsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Destination vault directory
    #[arg(long, env = "VAULTGRAPH_VAULT")]
    pub vault: PathBuf,

    /// Package scope passed to `go list`
    #[arg(long, default_value = "std", conflicts_with = "input")]
    pub scope: String,

    /// Read a saved `go list` listing from a file instead of invoking go
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Config file (defaults to ./vaultgraph.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the custom-dictionary update
    #[arg(long)]
    pub no_spellings: bool,

    /// Custom dictionary path (defaults to the platform Obsidian location)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

#[derive(Args)]
pub struct SpellingsArgs {
    /// Package scope passed to `go list`
    #[arg(long, default_value = "std", conflicts_with = "input")]
    pub scope: String,

    /// Read a saved `go list` listing from a file instead of invoking go
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Custom dictionary path (defaults to the platform Obsidian location)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
