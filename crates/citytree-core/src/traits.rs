// crates/citytree-core/src/traits.rs
use crate::city::City;
use crate::text::{cmp_folded, equals_folded, starts_with_folded};
use crate::tree::Insertion;
use std::cmp::Ordering;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via [`NameMatch::name_str`]
/// and get case-insensitive comparisons built on [`crate::text::fold_case`]:
/// - [`NameMatch::is_named`] — equality
/// - [`NameMatch::name_starts_with`] — prefix match
/// - [`NameMatch::name_cmp`] — lexicographic ordering
///
/// # Examples
/// ```rust
/// use citytree_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Portland").is_named("PORTLAND"));
/// assert!(Place("Portland").name_starts_with("port"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Empty `prefix` always matches.
    #[inline]
    fn name_starts_with(&self, prefix: &str) -> bool {
        starts_with_folded(self.name_str(), prefix)
    }

    /// Orders `q` relative to this name, case-insensitively.
    #[inline]
    fn name_cmp(&self, q: &str) -> Ordering {
        cmp_folded(q, self.name_str())
    }
}

/// The in-process API of a city index.
///
/// Every operation is synchronous and infallible. Structural outcomes of an
/// insertion (new node, duplicate, population conflict) are reported through
/// [`Insertion`] rather than as errors.
///
/// # Example
///
/// ```
/// use citytree_core::{City, CityIndex, CityTree};
///
/// let mut tree = CityTree::new();
/// tree.insert(City::new("Chicago", "USA", Some("IL"), 200).unwrap());
/// tree.insert(City::new("Boston", "USA", Some("MA"), 50).unwrap());
///
/// assert_eq!(tree.count(), 2);
/// assert_eq!(tree.search("boston").map(|c| c.population()), Some(50));
/// ```
pub trait CityIndex {
    /// Number of `insert` calls since construction or the last `clear`.
    ///
    /// This is a running counter, not a node count: rejected duplicates and
    /// conflicts are counted too.
    fn count(&self) -> usize;

    fn insert(&mut self, city: City) -> Insertion;

    /// Looks a city up by name, case-insensitively.
    ///
    /// The descent is steered by name while the tree is shaped by population,
    /// so a stored city can be missed when the two orders disagree.
    fn search(&self, name: &str) -> Option<&City>;

    /// All stored cities in ascending population order, as owned copies.
    fn traverse_ordered(&self) -> Vec<City>;

    /// All stored cities whose name starts with `template`, case-insensitively.
    fn list_by_prefix(&self, template: &str) -> Vec<City>;

    fn clear(&mut self);

    /// Renders every city, one per line, in ascending population order.
    fn print_tree(&self) -> String {
        let mut out = String::new();
        for city in self.traverse_ordered() {
            out.push_str(&city.to_string());
            out.push('\n');
        }
        out
    }
}
