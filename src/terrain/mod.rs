//! Planet terrain field
//!
//! A small spherical planet described entirely as a signed distance field.
//!
//! # Architecture
//!
//! - **Base shape**: sphere at `center` with `radius`
//! - **Layers**: coherent noise octaves sampled on the unit direction from the
//!   center, each subtracted from the base distance
//! - **Edits**: ordered add/subtract sphere brushes folded on with CSG
//!
//! # Usage
//!
//! ```rust
//! use tiny_planet::terrain::*;
//! use glam::Vec3;
//!
//! let mut field = TerrainField::from_config(&PlanetConfig::default());
//! field.push(Modification::subtract(Vec3::new(10.0, 0.0, 0.0), 2.0));
//!
//! let d = field.distance(Vec3::new(10.0, 0.0, 0.0));
//! assert!(d > 0.0);
//! ```

mod config;
mod edits;
mod field;
mod layers;

pub use config::PlanetConfig;
pub use edits::{apply_modifications, EditMode, Modification};
pub use field::{TerrainField, FALLBACK_DIRECTION};
pub use layers::{default_layers, total_displacement, LayerKind, NoiseLayer};
