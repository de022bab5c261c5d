// crates/citytree-core/src/lib.rs

//! # citytree-core
//!
//! An in-memory index of city records ordered by population.
//!
//! - [`City`] is a validated record: non-empty name and country, optional
//!   state, strictly positive population.
//! - [`CityTree`] is an unbalanced binary search tree of cities keyed by
//!   population, driven through the [`CityIndex`] trait.
//! - [`loader`] reads the plain-text city list format and keeps a binary
//!   snapshot cache next to it.
//!
//! ```
//! use citytree_core::prelude::*;
//!
//! let mut tree = CityTree::new();
//! let report = load_from_reader(
//!     "header\n50 Boston, MA, USA\n100 Apollo, Nowhereland\n".as_bytes(),
//!     &mut tree,
//! )?;
//! assert_eq!(report.inserted, 2);
//! assert_eq!(tree.search("boston").map(|c| c.state()), Some("MA"));
//! # Ok::<(), citytree_core::CityError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod city;
pub mod common;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod text;
pub mod traits;
pub mod tree;

#[cfg(test)]
mod test_support;

// Re-exports
pub use crate::city::City;
pub use crate::common::TreeStats;
pub use crate::error::{CityError, Result};
pub use crate::loader::{LoadNotice, LoadReport};
pub use crate::traits::{CityIndex, NameMatch};
pub use crate::tree::{CityTree, Insertion};
