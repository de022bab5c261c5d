//! Basic usage example for citytree-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city list into a tree
//! - Print the count and the ordered listing
//! - Look a city up by name and list cities by prefix

use citytree_rs::loader::{default_data_dir, default_dataset_filename};
use citytree_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citytree-rs Basic Usage Example ===\n");

    let path = default_data_dir().join(default_dataset_filename());

    println!("Loading {}...", path.display());
    let (tree, report) = CityTree::from_path(&path)?;
    println!(
        "✓ {} lines read, {} inserted, {} skipped\n",
        report.lines, report.inserted, report.skipped
    );

    // Example 1: Count and ordered listing
    println!("--- Example 1: All cities by population ---");
    println!("Total cities: {}", tree.count());
    print!("{}", tree.print_tree());
    println!();

    // Example 2: Lookup by name
    println!("--- Example 2: Find a city by name ---");
    for name in ["New York", "paris", "Atlantis"] {
        match tree.search(name) {
            Some(city) => println!("Found: {city}"),
            None => println!("Not found: {name}"),
        }
    }
    println!();

    // Example 3: Prefix listing
    println!("--- Example 3: Cities starting with \"Port\" ---");
    for city in tree.list_by_prefix("Port") {
        println!("  {city}");
    }
    println!();

    // Example 4: Shape of the tree
    println!("--- Example 4: Tree statistics ---");
    let stats = tree.stats();
    println!("Count: {}, nodes: {}, height: {}", stats.count, stats.nodes, stats.height);

    Ok(())
}
