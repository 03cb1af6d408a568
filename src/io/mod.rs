//! File I/O
//!
//! - Mesh export to Wavefront OBJ
//! - Planet configs and edit lists as JSON

mod json;
pub mod obj;

pub use json::{load_config, load_modifications, save_config, save_modifications};
pub use obj::{export_obj, import_obj, write_obj, ObjConfig};

use crate::mesh::ExtractError;
use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or inconsistent file contents
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Meshing failed while producing data to write
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}
