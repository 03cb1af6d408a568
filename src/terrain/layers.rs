//! Noise layers stacked onto the planet sphere
//!
//! Every layer samples the same unit direction (center to point), scaled by
//! its own frequency and shifted by its own offset so layers do not line up.

use crate::noise::{ridged, Perlin};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How a layer shapes the raw noise value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Raw noise in roughly `[-1, 1]`
    Plain,
    /// `(1 - |n|)^2`, sharp crests in `[0, 1]`
    Ridged,
}

/// One frequency/amplitude octave of terrain displacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseLayer {
    /// Label used in logs and config files
    pub name: String,
    /// Multiplier applied to the unit direction before sampling
    pub frequency: f32,
    /// Added to every noise-space axis after scaling
    #[serde(default)]
    pub offset: f32,
    /// Displacement height as a fraction of the planet radius
    pub amplitude: f32,
    /// Noise shaping
    #[serde(default = "default_kind")]
    pub kind: LayerKind,
}

fn default_kind() -> LayerKind {
    LayerKind::Plain
}

impl NoiseLayer {
    /// Plain layer
    pub fn plain(name: &str, frequency: f32, offset: f32, amplitude: f32) -> Self {
        NoiseLayer {
            name: name.to_string(),
            frequency,
            offset,
            amplitude,
            kind: LayerKind::Plain,
        }
    }

    /// Ridged layer
    pub fn ridged(name: &str, frequency: f32, offset: f32, amplitude: f32) -> Self {
        NoiseLayer {
            kind: LayerKind::Ridged,
            ..NoiseLayer::plain(name, frequency, offset, amplitude)
        }
    }

    /// Shaped noise value for a unit direction, before amplitude scaling
    #[inline]
    pub fn sample(&self, perlin: &Perlin, direction: Vec3) -> f32 {
        let n = perlin.sample(direction * self.frequency + Vec3::splat(self.offset));
        match self.kind {
            LayerKind::Plain => n,
            LayerKind::Ridged => ridged(n),
        }
    }

    /// Height this layer adds at `direction` on a planet of `radius`
    #[inline]
    pub fn displacement(&self, perlin: &Perlin, direction: Vec3, radius: f32) -> f32 {
        self.sample(perlin, direction) * self.amplitude * radius
    }
}

/// The stock terrain: continents, ridged mountains, hills and two micro octaves
pub fn default_layers() -> Vec<NoiseLayer> {
    vec![
        NoiseLayer::plain("continental", 2.0, 0.0, 0.08),
        NoiseLayer::ridged("mountains", 4.0, 50.0, 0.15),
        NoiseLayer::plain("hills", 10.0, 0.0, 0.03),
        NoiseLayer::plain("micro", 25.0, 0.0, 0.015),
        NoiseLayer::plain("micro_fine", 50.0, 0.0, 0.008),
    ]
}

/// Total displacement of `layers` at a unit direction
pub fn total_displacement(
    layers: &[NoiseLayer],
    perlin: &Perlin,
    direction: Vec3,
    radius: f32,
) -> f32 {
    layers
        .iter()
        .map(|layer| layer.displacement(perlin, direction, radius))
        .sum()
}
