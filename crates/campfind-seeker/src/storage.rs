//! JSON files on disk: the record dataset and the local stores.
//!
//! Stores are small JSON arrays rewritten in full on every save. A missing
//! store file is simply empty. An unreadable one is logged, renamed to
//! `<file>.bak` and also treated as empty, so a damaged file never locks the
//! user out and is never silently overwritten.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::record::CampRecord;

/// Parses a JSON array of camp records.
pub fn parse_records(json: &str) -> Result<Vec<CampRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the camp dataset from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CampRecord>> {
    let path = path.as_ref();
    let records = parse_records(&fs::read_to_string(path)?)?;
    debug!("loaded {} camps from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the camp dataset, falling back to no records on any failure.
///
/// The filter engine is still usable with the empty result; the caller
/// decides whether to surface the problem.
pub fn load_records_or_empty(path: impl AsRef<Path>) -> Vec<CampRecord> {
    let path = path.as_ref();
    load_records(path).unwrap_or_else(|err| {
        warn!("could not load camps from {}: {}", path.display(), err);
        Vec::new()
    })
}

pub(crate) fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => return Err(err.into()),
    };
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(err) => {
            // Move it aside so the next save cannot destroy it
            let backup = backup_path(path);
            warn!(
                "ignoring unreadable store {} ({}), moved to {}",
                path.display(),
                err,
                backup.display()
            );
            fs::rename(path, &backup)?;
            Ok(T::default())
        }
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
