//! citytree — Command-line interface for citytree-core
//!
//! Loads a plain-text city list into a population-ordered search tree and
//! runs one query against it.
//!
//! Usage examples
//! --------------
//!
//! - Count, full listing, lookup of "New York", cities starting with "Portland"
//!   $ citytree
//!   $ citytree demo --find Boston --prefix Bo
//!
//! - Tree statistics (counter vs. stored nodes, height)
//!   $ citytree stats
//!
//! - Lookups and listings
//!   $ citytree find "new york"
//!   $ citytree prefix port
//!   $ citytree list --json
//!
//! Data source
//! -----------
//!
//! `--input` (or `CITYTREE_INPUT`) names the city list; by default the sample
//! list bundled with `citytree-core` is used. A binary snapshot is cached next
//! to it and reused while it is newer than the list; `--no-cache` bypasses it.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citytree_core::loader::{
    default_data_dir, default_dataset_filename, load_cached, save_snapshot,
};
use citytree_core::{CityIndex, CityTree};
use clap::Parser;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(&args.log_level)?;

    // Determine input file (default: sample list inside citytree-core)
    let input_path = args.input.unwrap_or_else(|| {
        default_data_dir()
            .join(default_dataset_filename())
            .to_string_lossy()
            .to_string()
    });

    let tree = load_tree(&input_path, args.no_cache)
        .with_context(|| format!("failed to load city list from {input_path}"))?;

    match args.command.unwrap_or_default() {
        Commands::Demo { find, prefix } => {
            println!("Total cities in BinaryTree: {}", tree.count());

            println!("Cities in BinaryTree:");
            println!("{}", tree.print_tree());

            match tree.search(&find) {
                Some(city) => println!("Found city: {city}"),
                None => println!("City {find} not found."),
            }

            println!("Cities starting with \"{prefix}\":");
            for city in tree.list_by_prefix(&prefix) {
                println!("{city}");
            }
        }

        Commands::Stats => {
            let stats = tree.stats();
            println!("Tree statistics:");
            println!("  Count: {}", stats.count);
            println!("  Nodes: {}", stats.nodes);
            println!("  Height: {}", stats.height);
        }

        Commands::List { json } => {
            let cities = tree.traverse_ordered();
            if json {
                print_json(&cities)?;
            } else {
                for city in cities {
                    println!("{city}");
                }
            }
        }

        Commands::Find { name } => match tree.search(&name) {
            Some(city) => println!("{city}"),
            None => eprintln!("City {name} not found."),
        },

        Commands::Prefix { template } => {
            let matches = tree.list_by_prefix(&template);
            if matches.is_empty() {
                println!("No cities found starting with: {template}");
            } else {
                for city in matches {
                    println!("{city}");
                }
            }
        }

        Commands::Snapshot { out } => {
            save_snapshot(&tree, &out).with_context(|| format!("failed to write {out}"))?;
            println!("Snapshot of {} cities written to {out}", tree.node_count());
        }
    }

    Ok(())
}

fn load_tree(input: &str, no_cache: bool) -> citytree_core::Result<CityTree> {
    if no_cache {
        let (tree, report) = CityTree::from_path(input)?;
        debug!(?report, "loaded without snapshot");
        Ok(tree)
    } else {
        load_cached(input)
    }
}

#[cfg(feature = "json")]
fn print_json(cities: &[citytree_core::City]) -> anyhow::Result<()> {
    println!("{}", citytree_core::common::to_json_pretty(cities)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(_cities: &[citytree_core::City]) -> anyhow::Result<()> {
    anyhow::bail!("JSON output requires the `json` feature")
}
