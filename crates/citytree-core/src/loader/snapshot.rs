// crates/citytree-core/src/loader/snapshot.rs

//! Binary snapshot cache of a [`CityTree`].
//!
//! A snapshot stores the running counter and the cities in structural
//! pre-order. Re-inserting that sequence rebuilds the exact same shape, so a
//! restored tree answers every query (including the name-steered
//! [`CityIndex::search`]) exactly like the tree that was saved.
//!
//! Snapshots written by [`load_cached`] also keep the [`LoadNotice`]s of the
//! parse, and a snapshot hit logs them again.

use super::common_io;
use super::{load_from_path, LoadNotice};
use crate::city::City;
use crate::error::Result;
use crate::traits::CityIndex;
use crate::tree::CityTree;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "tree.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.tree.bin";

/// Upper bound for a decoded snapshot, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    count: usize,
    cities: Vec<&'a City>,
    notices: &'a [LoadNotice],
}

#[derive(Deserialize)]
struct Snapshot {
    count: usize,
    cities: Vec<City>,
    notices: Vec<LoadNotice>,
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

/// Writes `tree` to `path`, gzip-compressed under the `compact` feature.
pub fn save_snapshot(tree: &CityTree, path: impl AsRef<Path>) -> Result<()> {
    write_snapshot(tree, &[], path.as_ref())
}

fn write_snapshot(tree: &CityTree, notices: &[LoadNotice], path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let snapshot = SnapshotRef {
        count: tree.count(),
        cities: tree.pre_order(),
        notices,
    };

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        codec().serialize_into(&mut encoder, &snapshot)?;
        encoder.finish()?.flush()?;
    }
    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        codec().serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    debug!(path = %path.display(), cities = snapshot.cities.len(), "snapshot written");
    Ok(())
}

/// Restores a tree written by [`save_snapshot`], including its counter.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<CityTree> {
    read_snapshot(path.as_ref()).map(|(tree, _)| tree)
}

fn read_snapshot(path: &Path) -> Result<(CityTree, Vec<LoadNotice>)> {
    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    let snapshot: Snapshot = codec().deserialize_from(GzDecoder::new(reader))?;
    #[cfg(not(feature = "compact"))]
    let snapshot: Snapshot = codec().deserialize_from(reader)?;

    let mut tree: CityTree = snapshot.cities.into_iter().collect();
    tree.set_count(snapshot.count);
    Ok((tree, snapshot.notices))
}

/// Where [`load_cached`] keeps the snapshot for `source`.
pub fn snapshot_path(source: impl AsRef<Path>) -> PathBuf {
    common_io::get_cache_path(source.as_ref(), CACHE_SUFFIX)
}

/// **Smart Load:** uses the snapshot next to `source` when it is at least as
/// new as the source, otherwise parses `source` and refreshes the snapshot.
///
/// Either way the load's warnings are logged. Failing to write the snapshot is
/// not an error.
pub fn load_cached(source: impl AsRef<Path>) -> Result<CityTree> {
    let source = source.as_ref();
    let cache = snapshot_path(source);

    if is_cache_fresh(source, &cache) {
        match read_snapshot(&cache) {
            Ok((tree, notices)) => {
                debug!(path = %cache.display(), notices = notices.len(), "snapshot hit");
                for notice in &notices {
                    notice.emit();
                }
                return Ok(tree);
            }
            Err(e) => debug!(
                path = %cache.display(),
                error = %e,
                "snapshot unreadable, rebuilding"
            ),
        }
    }

    let mut tree = CityTree::new();
    let report = load_from_path(source, &mut tree)?;
    if let Err(e) = write_snapshot(&tree, &report.notices, &cache) {
        debug!(path = %cache.display(), error = %e, "snapshot not written");
    }
    Ok(tree)
}

fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
