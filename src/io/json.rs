//! JSON config and edit-list files
//!
//! Uses `serde_json::to_writer_pretty`/`from_reader` over buffered files.
//! Edit lists are an export format only; a planet never writes them itself.

use crate::io::IoError;
use crate::terrain::{Modification, PlanetConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a planet config as pretty JSON
pub fn save_config(config: &PlanetConfig, path: impl AsRef<Path>) -> Result<(), IoError> {
    save_json(config, path)
}

/// Load a planet config; missing fields take their defaults
pub fn load_config(path: impl AsRef<Path>) -> Result<PlanetConfig, IoError> {
    load_json(path)
}

/// Save an edit list as pretty JSON
pub fn save_modifications(edits: &[Modification], path: impl AsRef<Path>) -> Result<(), IoError> {
    save_json(edits, path)
}

/// Load an edit list
pub fn load_modifications(path: impl AsRef<Path>) -> Result<Vec<Modification>, IoError> {
    load_json(path)
}

fn save_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| IoError::Serialization(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, IoError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))
}
