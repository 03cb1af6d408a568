//! # tiny-planet
//!
//! A small spherical planet described as a signed distance field, meshed with
//! surface nets and editable in real time.
//!
//! ## Features
//!
//! - **Terrain field**: sphere + continental, ridged mountain, hill and micro
//!   noise octaves sampled on the direction from the planet center
//! - **Edits**: ordered add/subtract sphere brushes (CSG union / subtraction)
//! - **Surface nets**: one vertex per sign-changing cell, quads stitched
//!   toward already-visited neighbours, consistent outward winding
//! - **Queries**: signed distance and gravity direction for movement code
//! - **File I/O**: OBJ mesh export, JSON configs and edit lists
//!
//! ## Example
//!
//! ```rust
//! use tiny_planet::prelude::*;
//!
//! let config = PlanetConfig::default().with_resolution(24);
//! let mut planet = Planet::new(config).unwrap();
//! assert!(planet.mesh().triangle_count() > 0);
//!
//! // Dig a hole; the mesh is rebuilt before `mine` returns
//! let mesh = planet.mine(Vec3::new(10.0, 0.0, 0.0), 3.0).unwrap();
//! assert!(mesh.vertex_count() > 0);
//!
//! // Queries for an external movement controller
//! let down = planet.gravity_direction(Vec3::new(0.0, 20.0, 0.0));
//! assert!((down - Vec3::NEG_Y).length() < 1e-6);
//! ```

#![warn(missing_docs)]

pub mod io;
pub mod mesh;
pub mod noise;
pub mod operations;
pub mod planet;
pub mod primitives;
pub mod terrain;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::io::{export_obj, load_config, save_config, IoError, ObjConfig};
    pub use crate::mesh::{
        height_colors, surface_nets, vertex_normals, ExtractError, Mesh, SurfaceNetsConfig,
        Triangle,
    };
    pub use crate::noise::{ridged, Perlin, Permutation};
    pub use crate::planet::Planet;
    pub use crate::terrain::{
        EditMode, LayerKind, Modification, NoiseLayer, PlanetConfig, TerrainField,
    };
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use mesh::{surface_nets, Mesh};
pub use planet::Planet;
pub use terrain::{PlanetConfig, TerrainField};
