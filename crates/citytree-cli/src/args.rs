use clap::{Parser, Subcommand};

/// CLI arguments for citytree
#[derive(Debug, Parser)]
#[command(
    name = "citytree",
    version,
    about = "Load a city list into a population-ordered search tree and query it"
)]
pub struct CliArgs {
    /// Path to the city list (first line is a header; `.gz` is accepted).
    /// Defaults to the sample list bundled with citytree-core.
    #[arg(short = 'i', long = "input", env = "CITYTREE_INPUT", global = true)]
    pub input: Option<String>,

    /// Always parse the input instead of using its snapshot cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Log filter, e.g. `warn` or `citytree_core=debug`
    #[arg(long = "log-level", env = "CITYTREE_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the count, the full listing, one lookup and one prefix listing
    Demo {
        /// City to look up
        #[arg(long, default_value = "New York")]
        find: String,
        /// Name prefix to list
        #[arg(long, default_value = "Portland")]
        prefix: String,
    },

    /// Show counter, node count and height of the tree
    Stats,

    /// List all cities in ascending population order
    List {
        /// Emit a JSON array instead of one line per city
        #[arg(long)]
        json: bool,
    },

    /// Look a city up by name (case-insensitive)
    Find {
        name: String,
    },

    /// List cities whose name starts with a prefix (case-insensitive)
    Prefix {
        template: String,
    },

    /// Write a binary snapshot of the loaded tree
    Snapshot {
        /// Output path
        out: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Demo {
            find: "New York".to_string(),
            prefix: "Portland".to_string(),
        }
    }
}
