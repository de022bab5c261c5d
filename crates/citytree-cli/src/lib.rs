//! citytree-cli
//! ============
//!
//! Command-line interface for the `citytree-core` city index.
//!
//! This crate primarily provides a binary (`citytree`). The library target
//! exists so the crate has a rendered documentation page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! citytree --help
//! citytree -i data/cities.txt            # demo: count, listing, lookup, prefix
//! citytree stats
//! citytree find "new york"
//! citytree prefix port
//! citytree list --json
//! ```
//!
//! For programmatic access use [`citytree-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
