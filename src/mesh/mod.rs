//! Isosurface extraction for planet fields
//!
//! Turns a scalar field sampled on a uniform lattice into a triangle mesh
//! with surface nets: one vertex per sign-changing cell, quads between the
//! four cells around every sign-changing lattice edge.
//!
//! # Optimizations
//! - **Sample Once**: every lattice point is evaluated exactly once, z-slices
//!   in parallel with rayon.
//! - **Compile-Time Tables**: edge topology and the 256-entry crossing table
//!   are `const` data.
//! - **Two-Slice Index Buffers**: face stitching only looks one slice back,
//!   so vertex lookup keeps two dense `(res-1)^2` buffers instead of a map.

pub mod attributes;
mod surface_nets;
pub mod tables;

pub use attributes::{height_colors, vertex_normals};
pub use surface_nets::{surface_nets, SurfaceNetsConfig, MAX_RESOLUTION};

use glam::Vec3;
use thiserror::Error;

/// Invalid extraction parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Fewer than two samples per axis
    #[error("Invalid resolution {0}: need at least 2 samples per axis")]
    InvalidResolution(usize),

    /// Lattice would not fit the index type
    #[error("Resolution {0} exceeds the maximum supported lattice size")]
    ResolutionTooLarge(usize),

    /// Empty or inverted bounds on one axis
    #[error("Invalid bounds on axis {axis}: min {min} must be below max {max}")]
    InvalidBounds {
        /// Axis index (0 = x, 1 = y, 2 = z)
        axis: usize,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    /// NaN or infinite bounds
    #[error("Bounds must be finite")]
    NonFiniteBounds,
}

/// Triangle face indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: u32,
    /// Second vertex index
    pub b: u32,
    /// Third vertex index
    pub c: u32,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Triangle { a, b, c }
    }

    /// Indices as an array
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Extracted surface: positions plus triangles indexing into them
///
/// No normals or colors; see [`attributes`] for caller-side helpers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions in world space
    pub vertices: Vec<Vec3>,
    /// Triangles, wound counter-clockwise seen from outside
    pub faces: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// True if no triangles were produced
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Flattened index buffer (three per triangle)
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|t| t.indices()).collect()
    }

    /// Unnormalized face normal (cross product of the two edges from `a`)
    pub fn face_normal(&self, face: &Triangle) -> Vec3 {
        let a = self.vertices[face.a as usize];
        let b = self.vertices[face.b as usize];
        let c = self.vertices[face.c as usize];
        (b - a).cross(c - a)
    }
}
