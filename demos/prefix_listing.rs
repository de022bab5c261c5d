//! Prefix listing example for citytree-rs
//!
//! Builds a tree in memory and lists cities by name prefix, case-insensitively.

use citytree_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citytree-rs Prefix Listing Example ===\n");

    let tree: CityTree = [
        ("Portland", "OR", 652_503),
        ("Portland", "ME", 68_408),
        ("Porto", "", 231_800),
        ("Paris", "", 2_141_000),
        ("Pittsburgh", "PA", 302_971),
    ]
    .into_iter()
    .map(|(name, state, population)| City::new(name, "Somewhere", Some(state), population))
    .collect::<Result<_>>()?;

    for template in ["port", "P", "Pi", "", "x"] {
        let matches = tree.list_by_prefix(template);
        println!("{template:?}: {} match(es)", matches.len());
        for city in matches {
            println!("  {city}");
        }
    }

    Ok(())
}
