// crates/citytree-core/src/tree.rs

//! # City Tree
//!
//! A binary search tree of [`City`] records keyed by population.
//!
//! 1. For every node, cities in its left subtree have a smaller population.
//! 2. For every node, cities in its right subtree have a larger population.
//!
//! Two cities never share a population inside the tree: an insert that lands
//! on an existing population is either a duplicate (same name, ignoring case)
//! or a conflict (different name), and in both cases the tree is untouched.
//!
//! The tree does not rebalance. Inserting cities in population order yields a
//! linked list of depth `n`, which [`CityTree::height`] reports. Every walk
//! below uses an explicit cursor or stack, so such shapes cannot exhaust the
//! call stack.

use crate::city::City;
use crate::common::TreeStats;
use crate::traits::{CityIndex, NameMatch};
use std::cmp::Ordering;
use std::fmt;
use tracing::{trace, warn};

/// Outcome of [`CityIndex::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// A new node now holds the city.
    Inserted,
    /// A city with the same population and name is already stored.
    Duplicate,
    /// A different city already holds this population; the new one was dropped.
    Conflict {
        population: i64,
        existing: String,
        rejected: String,
    },
}

impl Insertion {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Logs the notice for a city rejected because another one holds its population.
pub(crate) fn conflict_notice(population: i64, existing: &str, rejected: &str) {
    warn!(
        population,
        existing,
        rejected,
        "city with the same population but different name detected"
    );
}

struct Node {
    city: City,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new_boxed(city: City) -> Box<Self> {
        Box::new(Self {
            city,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree of cities ordered by population.
///
/// # Examples
///
/// ```
/// use citytree_core::{City, CityIndex, CityTree, Insertion};
///
/// let mut tree = CityTree::new();
/// tree.insert(City::new("Apollo", "Nowhereland", None, 100).unwrap());
/// tree.insert(City::new("Boston", "USA", Some("MA"), 50).unwrap());
/// tree.insert(City::new("Chicago", "USA", Some("IL"), 200).unwrap());
///
/// let names: Vec<_> = tree.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["Boston", "Apollo", "Chicago"]);
///
/// // Same population, different name: rejected but still counted.
/// let outcome = tree.insert(City::new("Denver", "USA", Some("CO"), 50).unwrap());
/// assert!(matches!(outcome, Insertion::Conflict { .. }));
/// assert_eq!(tree.count(), 4);
/// assert_eq!(tree.node_count(), 3);
/// ```
#[derive(Default)]
pub struct CityTree {
    root: Option<Box<Node>>,
    count: usize,
}

impl CityTree {
    /// Generates a new, empty `CityTree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while no node exists, whatever [`CityIndex::count`] says.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes actually stored.
    ///
    /// Differs from [`CityIndex::count`] once a duplicate or conflicting city
    /// has been offered.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Longest root-to-leaf path, counted in nodes. An empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            count: self.count,
            nodes: self.node_count(),
            height: self.height(),
        }
    }

    /// Borrowing iterator over the cities in ascending population order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Cities in structural pre-order (node, left subtree, right subtree).
    ///
    /// Re-inserting this sequence into an empty tree rebuilds the same shape.
    pub fn pre_order(&self) -> Vec<&City> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.city);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    /// Overrides the running counter. Used when restoring a snapshot whose
    /// counter had drifted from its node count.
    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    fn drop_nodes(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl CityIndex for CityTree {
    fn count(&self) -> usize {
        self.count
    }

    fn insert(&mut self, city: City) -> Insertion {
        // Counted unconditionally, even when the city is rejected below.
        self.count += 1;

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match city.compare(&node.city) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal if node.city.is_named(city.name()) => {
                    trace!(name = city.name(), "duplicate city ignored");
                    return Insertion::Duplicate;
                }
                Ordering::Equal => {
                    conflict_notice(city.population(), node.city.name(), city.name());
                    return Insertion::Conflict {
                        population: city.population(),
                        existing: node.city.name().to_string(),
                        rejected: city.name().to_string(),
                    };
                }
            };
        }
        *link = Some(Node::new_boxed(city));
        Insertion::Inserted
    }

    fn search(&self, name: &str) -> Option<&City> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            if node.city.is_named(name) {
                return Some(&node.city);
            }
            link = match node.city.name_cmp(name) {
                Ordering::Less => node.left.as_deref(),
                _ => node.right.as_deref(),
            };
        }
        None
    }

    fn traverse_ordered(&self) -> Vec<City> {
        self.iter().cloned().collect()
    }

    fn list_by_prefix(&self, template: &str) -> Vec<City> {
        self.pre_order()
            .into_iter()
            .filter(|c| c.name_starts_with(template))
            .cloned()
            .collect()
    }

    fn clear(&mut self) {
        self.drop_nodes();
        self.count = 0;
    }
}

impl Drop for CityTree {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl fmt::Debug for CityTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityTree")
            .field("count", &self.count)
            .field("cities", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl Extend<City> for CityTree {
    fn extend<I: IntoIterator<Item = City>>(&mut self, iter: I) {
        for city in iter {
            self.insert(city);
        }
    }
}

impl FromIterator<City> for CityTree {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a CityTree {
    type Item = &'a City;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator returned by [`CityTree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a City;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.city)
    }
}
