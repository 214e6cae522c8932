//! Loading and saving the data file.

use crate::error::StoreError;
use crate::models::{DataStore, Player};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Decode a store from JSON text.
///
/// Files with top-level `players` and `events` are read as-is, with missing
/// sections defaulting to empty. Anything else is an older flat map of players.
pub fn from_json(data: &str) -> Result<DataStore, serde_json::Error> {
    let raw: Value = serde_json::from_str(data)?;
    let current = raw
        .as_object()
        .map_or(false, |o| o.contains_key("players") && o.contains_key("events"));
    if current {
        return serde_json::from_value(raw);
    }
    log::warn!("Migrating legacy data file: players moved under \"players\"");
    let players: BTreeMap<String, Player> = serde_json::from_value(raw)?;
    Ok(DataStore {
        players,
        ..DataStore::default()
    })
}

/// Load the store from `path`; a missing file gives an empty store.
pub fn load(path: &Path) -> Result<DataStore, StoreError> {
    if !path.is_file() {
        log::info!("No data file at {}, starting empty", path.display());
        return Ok(DataStore::new());
    }
    let data = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let store = from_json(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {} player(s) and {} event(s) from {}",
        store.players.len(),
        store.events.len(),
        path.display()
    );
    Ok(store)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save the store to `path` as pretty-printed JSON.
///
/// Written to a sibling temporary file first and renamed into place, so a failed
/// write leaves the previous file untouched.
pub fn save(store: &DataStore, path: &Path) -> Result<(), StoreError> {
    let payload = serde_json::to_string_pretty(store).map_err(StoreError::Encode)?;
    let tmp = temp_path(path);
    fs::write(&tmp, payload).map_err(|e| io_error(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;
    log::info!("Saved data to {}", path.display());
    Ok(())
}
