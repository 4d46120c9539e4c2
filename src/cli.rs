use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "docdex",
    about = "Offline documentation mirrors with fuzzy search"
)]
pub struct Cli {
    /// Override the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List documentation sets available for download
    Available(AvailableArgs),
    /// Download a documentation set and build its offline mirror
    Download(DownloadArgs),
    /// List installed documentation sets
    List(ListArgs),
    /// List the entries of an installed documentation set
    Entries(EntriesArgs),
    /// Fuzzy-search entries across installed documentation sets
    Search(SearchArgs),
    /// Open an entry in the external viewer
    Open(OpenArgs),
    /// Remove an installed documentation set
    Remove(RemoveArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Available --

#[derive(Debug, Parser)]
pub struct AvailableArgs {
    /// Show every version variant, not just the newest
    #[arg(long)]
    pub versions: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Download --

#[derive(Debug, Parser)]
pub struct DownloadArgs {
    /// Slug of the documentation set (e.g. css, python~3.12)
    pub slug: String,

    /// Re-download even when the installed copy is up to date
    #[arg(long)]
    pub force: bool,
}

// -- List --

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Entries --

#[derive(Debug, Parser)]
pub struct EntriesArgs {
    /// Slug of the installed documentation set
    pub slug: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Search only within this documentation set
    #[arg(short = 'd', long)]
    pub docset: Option<String>,

    /// Number of results to show
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,

    /// Show all results
    #[arg(long)]
    pub all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Open --

#[derive(Debug, Parser)]
pub struct OpenArgs {
    /// Slug of the installed documentation set
    pub slug: String,

    /// Dotted entry path, optionally with a #fragment
    pub path: String,
}

// -- Remove --

#[derive(Debug, Parser)]
pub struct RemoveArgs {
    /// Slug of the installed documentation set
    pub slug: String,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docdex",
            &mut std::io::stdout(),
        );
    }
}
