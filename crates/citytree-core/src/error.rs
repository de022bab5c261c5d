// crates/citytree-core/src/error.rs
use thiserror::Error;

/// Errors produced by `citytree-core`.
///
/// Only record construction and the I/O edges (loading a city list, reading or
/// writing a snapshot) can fail. Tree operations never return an error:
/// duplicates and population conflicts are reported through
/// [`Insertion`](crate::Insertion) instead.
#[derive(Debug, Error)]
pub enum CityError {
    /// A record field failed validation (empty name/country, population <= 0).
    #[error("invalid city: {0}")]
    Validation(String),

    /// A line of a city list does not follow `{population} {name}, [{state}, ]{country}`.
    #[error("cannot parse line {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("json encoding failed: {0}")]
    Json(String),
}

pub type Result<T, E = CityError> = std::result::Result<T, E>;
