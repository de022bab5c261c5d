// crates/citytree-core/src/loader/mod.rs

//! # City List Loader
//!
//! Reads the plain-text city list format into a [`CityIndex`]:
//!
//! ```text
//! <header line, always discarded>
//! 8336817 New York, NY, USA
//! 100 Apollo, Nowhereland
//! ```
//!
//! Each data line is `{population} {name}, {state}, {country}` or
//! `{population} {name}, {country}`. A line that does not parse, or that
//! parses into an invalid [`City`], is logged and skipped; it never stops the
//! load.

use crate::city::City;
use crate::error::{CityError, Result};
use crate::traits::CityIndex;
use crate::tree::{conflict_notice, CityTree, Insertion};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod common_io;
pub mod snapshot;

pub use snapshot::{load_cached, load_snapshot, save_snapshot, snapshot_path, CACHE_SUFFIX};

/// Tally of a single load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data lines read, header excluded.
    pub lines: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub conflicts: usize,
    /// Lines rejected by the parser or by record validation.
    pub skipped: usize,
    /// Every warning the load logged, in file order.
    pub notices: Vec<LoadNotice>,
}

impl LoadReport {
    fn record(&mut self, outcome: Insertion) {
        match outcome {
            Insertion::Inserted => self.inserted += 1,
            Insertion::Duplicate => self.duplicates += 1,
            Insertion::Conflict {
                population,
                existing,
                rejected,
            } => {
                self.conflicts += 1;
                self.notices.push(LoadNotice::Conflict {
                    population,
                    existing,
                    rejected,
                });
            }
        }
    }
}

/// A warning raised while loading: a city rejected for its population, or a
/// line that could not be turned into a city.
///
/// Snapshots keep these so that a cached load reports the same warnings as
/// the parse that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadNotice {
    Conflict {
        population: i64,
        existing: String,
        rejected: String,
    },
    Skipped {
        /// 1-based line number in the file, header included.
        line: usize,
        reason: String,
    },
}

impl LoadNotice {
    /// Logs the notice with `warn!`.
    pub fn emit(&self) {
        match self {
            Self::Conflict {
                population,
                existing,
                rejected,
            } => conflict_notice(*population, existing, rejected),
            Self::Skipped { line, reason } => skipped_notice(*line, reason),
        }
    }
}

fn skipped_notice(line: usize, reason: &str) {
    warn!(line, error = %reason, "skipping invalid city line");
}

/// Parses one data line into a [`City`].
///
/// The line is trimmed, the population is split off at the first run of
/// whitespace, and the remainder is split on `", "`. With three parts the
/// middle one is the state; with two there is none; with more than three the
/// middle parts are ignored.
///
/// # Examples
///
/// ```
/// use citytree_core::loader::parse_city_line;
///
/// let city = parse_city_line("  652503 Portland, OR, USA ").unwrap();
/// assert_eq!(city.name(), "Portland");
/// assert_eq!(city.state(), "OR");
///
/// let city = parse_city_line("100 Apollo, Nowhereland").unwrap();
/// assert_eq!(city.state(), "");
///
/// assert!(parse_city_line("many Boston, USA").is_err());
/// ```
pub fn parse_city_line(line: &str) -> Result<City> {
    let line = line.trim();
    let parse_err = |reason: &str| CityError::Parse {
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let (population, rest) = line
        .split_once(|c: char| c.is_ascii_whitespace())
        .ok_or_else(|| parse_err("expected a population followed by city details"))?;
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());

    let population: i64 = population
        .parse()
        .map_err(|_| parse_err("population is not an integer"))?;

    let mut parts: Vec<&str> = rest.split(", ").collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    if parts.len() < 2 {
        return Err(parse_err("expected at least a city name and a country"));
    }

    let name = parts[0];
    let country = parts[parts.len() - 1];
    let state = if parts.len() == 3 { Some(parts[1]) } else { None };

    City::new(name, country, state, population)
}

/// Loads every data line of `reader` into `index`.
///
/// The first line is a header and is discarded unconditionally. Only an I/O
/// failure aborts the load.
pub fn load_from_reader<R, I>(mut reader: R, index: &mut I) -> Result<LoadReport>
where
    R: BufRead,
    I: CityIndex + ?Sized,
{
    let mut report = LoadReport::default();
    let mut buf = Vec::new();

    // Header
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(report);
    }

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines += 1;
        let line = String::from_utf8_lossy(&buf);

        match parse_city_line(&line) {
            Ok(city) => report.record(index.insert(city)),
            Err(e) => {
                let line_no = report.lines + 1;
                let reason = e.to_string();
                skipped_notice(line_no, &reason);
                report.skipped += 1;
                report.notices.push(LoadNotice::Skipped {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    debug!(?report, "city list loaded");
    Ok(report)
}

/// Opens `path` (see [`common_io::open_stream`]) and loads it into `index`.
pub fn load_from_path<I>(path: impl AsRef<Path>, index: &mut I) -> Result<LoadReport>
where
    I: CityIndex + ?Sized,
{
    let reader = common_io::open_stream(path.as_ref())?;
    load_from_reader(reader, index)
}

/// Directory of the sample city list shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities.txt"
}

impl CityTree {
    /// Builds a fresh tree from a city list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        let mut tree = Self::new();
        let report = load_from_path(path, &mut tree)?;
        Ok((tree, report))
    }
}
