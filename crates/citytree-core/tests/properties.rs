use citytree_core::{City, CityIndex, CityTree, NameMatch};
use quickcheck_macros::quickcheck;
use std::collections::{BTreeMap, BTreeSet};

/// Turns raw quickcheck input into valid cities. Small name/population ranges
/// make duplicates and population conflicts common.
fn cities(raw: &[(u8, u8)]) -> Vec<City> {
    raw.iter()
        .map(|&(pop, name)| {
            City::new(format!("City{}", name % 8), "Testland", None, i64::from(pop) + 1).unwrap()
        })
        .collect()
}

fn build(cities: &[City]) -> CityTree {
    cities.iter().cloned().collect()
}

fn populations(cities: &[City]) -> Vec<i64> {
    cities.iter().map(City::population).collect()
}

#[quickcheck]
fn traversal_is_sorted(raw: Vec<(u8, u8)>) -> bool {
    let tree = build(&cities(&raw));
    populations(&tree.traverse_ordered())
        .windows(2)
        .all(|w| w[0] < w[1])
}

#[quickcheck]
fn count_tracks_insert_calls(raw: Vec<(u8, u8)>) -> bool {
    let cities = cities(&raw);
    let tree = build(&cities);
    let distinct: BTreeSet<_> = cities.iter().map(City::population).collect();
    tree.count() == cities.len() && tree.node_count() == distinct.len()
}

#[quickcheck]
fn first_city_per_population_wins(raw: Vec<(u8, u8)>) -> bool {
    let cities = cities(&raw);
    let tree = build(&cities);

    let mut first: BTreeMap<i64, &str> = BTreeMap::new();
    for c in &cities {
        first.entry(c.population()).or_insert(c.name());
    }
    tree.iter()
        .map(|c| (c.population(), c.name()))
        .eq(first.into_iter())
}

#[quickcheck]
fn empty_prefix_lists_every_node_once(raw: Vec<(u8, u8)>) -> bool {
    let tree = build(&cities(&raw));
    let mut listed = populations(&tree.list_by_prefix(""));
    listed.sort_unstable();
    listed == populations(&tree.traverse_ordered())
}

#[quickcheck]
fn prefix_listing_is_exact(raw: Vec<(u8, u8)>, suffix: u8) -> bool {
    let tree = build(&cities(&raw));
    let template = format!("cITY{}", suffix % 8);

    let mut listed = populations(&tree.list_by_prefix(&template));
    listed.sort_unstable();
    let expected: Vec<i64> = tree
        .iter()
        .filter(|c| c.name_starts_with(&template))
        .map(City::population)
        .collect();
    listed == expected
}

#[quickcheck]
fn search_never_returns_the_wrong_city(raw: Vec<(u8, u8)>, query: u8) -> bool {
    let tree = build(&cities(&raw));
    let name = format!("city{}", query % 8);
    tree.search(&name).map_or(true, |c| c.is_named(&name))
}

#[quickcheck]
fn search_is_complete_when_names_follow_populations(pops: Vec<u16>) -> bool {
    // Zero-padded names sort like their populations, so the name-steered
    // descent follows the population-shaped tree.
    let tree: CityTree = pops
        .iter()
        .map(|&p| City::new(format!("c{:05}", p), "Testland", None, i64::from(p) + 1).unwrap())
        .collect();
    pops.iter().all(|&p| {
        tree.search(&format!("C{:05}", p)).map(City::population) == Some(i64::from(p) + 1)
    })
}

#[quickcheck]
fn clear_resets_everything(raw: Vec<(u8, u8)>) -> bool {
    let mut tree = build(&cities(&raw));
    tree.clear();
    tree.count() == 0 && tree.is_empty() && tree.traverse_ordered().is_empty() && tree.height() == 0
}
