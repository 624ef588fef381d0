use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mhist")]
#[command(about = "Record and query playback history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Override the history root directory
    #[arg(long, global = true)]
    pub root: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record entries
    Record {
        #[command(flatten)]
        source: RecordSource,
    },

    /// Query the saved history
    Query {
        #[command(flatten)]
        selector: QuerySelector,

        /// Print at most N matching/latest records, 0 for all
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// With --fuzzy, accept entries that reach at least this partial
        /// ratio
        #[arg(long, default_value_t = 63)]
        fuzzy_ratio: u32,
    },

    /// Control the mpv integration script
    Deploy {
        #[command(flatten)]
        action: DeployAction,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct RecordSource {
    /// Take the record from a string passed as argument
    #[arg(long)]
    pub from_string: Option<String>,

    /// Read items to record from stdin, separated by newlines
    #[arg(long)]
    pub from_stdin: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct QuerySelector {
    /// List the last entries
    #[arg(long)]
    pub last: bool,

    /// Case-insensitive fuzzy search, processed from newest to oldest entry
    #[arg(long)]
    pub fuzzy: Option<String>,

    /// Match entries containing every given word, any order,
    /// case-insensitive
    #[arg(long)]
    pub with_words: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct DeployAction {
    /// Install ~/.mpv/scripts/mhist.lua pointing at this executable
    #[arg(long)]
    pub enable: bool,

    /// Remove ~/.mpv/scripts/mhist.lua
    #[arg(long)]
    pub disable: bool,
}
