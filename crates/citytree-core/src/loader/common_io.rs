// crates/citytree-core/src/loader/common_io.rs
use crate::error::{CityError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens `path` for buffered line reading.
///
/// Files ending in `.gz` are decompressed on the fly when `compact` is enabled.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        CityError::NotFound(format!("city list not found at {}: {}", path.display(), e))
    })?;

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
    }

    Ok(Box::new(BufReader::new(file)))
}

pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cities".to_string());
    source.with_file_name(format!("{filename}.{suffix}"))
}
