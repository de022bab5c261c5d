//! Workspace facade: re-exports [`citytree_core`] so the demos can
//! `use citytree_rs::prelude::*`.
pub use citytree_core::*;
