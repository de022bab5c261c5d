//! Error handling example for citytree-rs
//!
//! This example demonstrates validation failures, duplicate and conflicting
//! inserts, and lookups that come back empty.

use citytree_rs::prelude::*;

fn main() -> Result<()> {
    // Conflict notices are `tracing` warnings; show them on stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    println!("=== citytree-rs Error Handling Example ===\n");

    // Example 1: Invalid records are rejected at construction
    println!("--- Example 1: Validation ---");
    let attempts = [
        ("", "USA", 10),
        ("Nowhere", "", 10),
        ("Nowhere", "USA", 0),
        ("Somewhere", "USA", 10),
    ];
    for (name, country, population) in attempts {
        match City::new(name, country, None, population) {
            Ok(city) => println!("  ✓ {city}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 2: Malformed lines are skipped, not fatal
    println!("--- Example 2: Parsing lines ---");
    for line in ["50 Boston, MA, USA", "fifty Boston, USA", "50 Boston", "0 Boston, USA"] {
        match parse_city_line(line) {
            Ok(city) => println!("  ✓ {line:?} -> {}", city.name()),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Duplicates and conflicts
    println!("--- Example 3: Duplicates and population conflicts ---");
    let mut tree = CityTree::new();
    let inserts = [
        City::new("Boston", "USA", Some("MA"), 50)?,
        City::new("BOSTON", "USA", Some("MA"), 50)?,
        City::new("Denver", "USA", Some("CO"), 50)?,
    ];
    for city in inserts {
        let name = city.name().to_string();
        println!("  insert {name}: {:?}", tree.insert(city));
    }
    println!("  count = {}, nodes = {}", tree.count(), tree.node_count());
    println!();

    // Example 4: Lookups that miss
    println!("--- Example 4: Searching ---");
    let mut tree = CityTree::new();
    tree.insert(City::new("Boston", "USA", Some("MA"), 50)?);
    tree.insert(City::new("Apollo", "Nowhereland", None, 100)?);
    for name in ["Boston", "Apollo", "Atlantis"] {
        match tree.search(name) {
            Some(city) => println!("  Found: {city}"),
            None => println!("  Not found: {name}"),
        }
    }
    println!("  (Apollo is stored, but the name-steered descent goes the other way)");

    Ok(())
}
