//! Planet configuration

use super::layers::{default_layers, NoiseLayer};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for a planet and its lattice
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// Planet center in world space
    pub center: Vec3,
    /// Radius of the base sphere
    pub radius: f32,
    /// Half-size of the meshing volume as a multiple of `radius`
    pub bounds_scale: f32,
    /// Lattice samples per axis
    pub resolution: usize,
    /// Sample lattice z-slices on the rayon pool
    pub parallel_sampling: bool,
    /// Shuffle the noise permutation with this seed (reference table if `None`)
    pub seed: Option<u64>,
    /// Terrain octaves, applied in order
    pub layers: Vec<NoiseLayer>,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        PlanetConfig {
            center: Vec3::ZERO,
            radius: 10.0,
            bounds_scale: 1.5,
            resolution: 64,
            parallel_sampling: true,
            seed: None,
            layers: default_layers(),
        }
    }
}

impl PlanetConfig {
    /// Plain sphere of `radius` at `center`, no noise layers
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        PlanetConfig {
            center,
            radius,
            layers: Vec::new(),
            ..Default::default()
        }
    }

    /// Meshing volume `(min, max)`
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = Vec3::splat(self.radius * self.bounds_scale);
        (self.center - half, self.center + half)
    }

    /// Override the lattice resolution
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Override the permutation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
