//! The planet's signed distance field
//!
//! `distance` is a pure function of the point and the current edit list:
//! base sphere, minus the layered noise displacement along the point's
//! direction from the center, then every edit folded on in order.

use super::config::PlanetConfig;
use super::edits::{apply_modifications, Modification};
use super::layers::{total_displacement, NoiseLayer};
use crate::noise::Perlin;
use crate::primitives::sdf_sphere_at;
use glam::Vec3;

/// Direction used for noise lookups at the exact planet center
pub const FALLBACK_DIRECTION: Vec3 = Vec3::Y;

/// Field evaluator for one planet
#[derive(Debug, Clone)]
pub struct TerrainField {
    center: Vec3,
    radius: f32,
    layers: Vec<NoiseLayer>,
    perlin: Perlin,
    modifications: Vec<Modification>,
}

impl TerrainField {
    /// Create a field from its parts
    pub fn new(center: Vec3, radius: f32, layers: Vec<NoiseLayer>, perlin: Perlin) -> Self {
        TerrainField {
            center,
            radius,
            layers,
            perlin,
            modifications: Vec::new(),
        }
    }

    /// Plain sphere, no noise
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius, Vec::new(), Perlin::default())
    }

    /// Build the field described by `config`
    pub fn from_config(config: &PlanetConfig) -> Self {
        let perlin = match config.seed {
            Some(seed) => Perlin::seeded(seed),
            None => Perlin::default(),
        };
        Self::new(config.center, config.radius, config.layers.clone(), perlin)
    }

    /// Signed distance at `point` (negative inside the terrain)
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        apply_modifications(self.unmodified_distance(point), point, &self.modifications)
    }

    /// Signed distance ignoring edits
    #[inline]
    pub fn unmodified_distance(&self, point: Vec3) -> f32 {
        let base = sdf_sphere_at(point, self.center, self.radius);
        if self.layers.is_empty() {
            return base;
        }
        base - total_displacement(&self.layers, &self.perlin, self.direction(point), self.radius)
    }

    /// Unit direction from the center to `point`, or [`FALLBACK_DIRECTION`] at the center
    #[inline]
    pub fn direction(&self, point: Vec3) -> Vec3 {
        (point - self.center)
            .try_normalize()
            .unwrap_or(FALLBACK_DIRECTION)
    }

    /// Unit vector pointing from `point` toward the center
    #[inline]
    pub fn gravity_direction(&self, point: Vec3) -> Vec3 {
        -self.direction(point)
    }

    /// Distance from the center to the unedited surface along `direction`
    ///
    /// Exact for the noise model here, since displacement depends only on
    /// direction.
    pub fn surface_height(&self, direction: Vec3) -> f32 {
        let dir = direction.try_normalize().unwrap_or(FALLBACK_DIRECTION);
        self.radius + total_displacement(&self.layers, &self.perlin, dir, self.radius)
    }

    /// Append an edit
    pub fn push(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Edits in application order
    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    /// Planet center
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Base sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Noise layers
    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::layers::default_layers;

    #[test]
    fn test_sphere_field() {
        let field = TerrainField::sphere(Vec3::ZERO, 10.0);
        assert!((field.distance(Vec3::ZERO) + 10.0).abs() < 1e-5);
        assert!(field.distance(Vec3::new(10.0, 0.0, 0.0)).abs() < 1e-5);
        assert!((field.distance(Vec3::new(0.0, 0.0, 15.0)) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_is_finite() {
        let field = TerrainField::new(Vec3::ONE, 10.0, default_layers(), Perlin::default());
        let d = field.distance(Vec3::ONE);
        assert!(d.is_finite());
        assert!(d < 0.0);
        assert_eq!(field.gravity_direction(Vec3::ONE), -FALLBACK_DIRECTION);
    }

    #[test]
    fn test_gravity_points_to_center() {
        let field = TerrainField::sphere(Vec3::new(0.0, 5.0, 0.0), 3.0);
        let g = field.gravity_direction(Vec3::new(4.0, 5.0, 0.0));
        assert!((g - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((field.gravity_direction(Vec3::new(3.0, 9.0, -2.0)).length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_noise_moves_surface_within_amplitude() {
        let field = TerrainField::new(Vec3::ZERO, 10.0, default_layers(), Perlin::default());
        // Worst case: every plain layer at |n| <= 1.2, ridge in [0, 1]
        let max_raise = 10.0 * (0.08 * 1.2 + 0.15 + 0.03 * 1.2 + 0.015 * 1.2 + 0.008 * 1.2);
        let max_sink = 10.0 * (0.08 + 0.03 + 0.015 + 0.008) * 1.2;
        for i in 0..100 {
            let t = i as f32 * 0.61;
            let dir = Vec3::new(t.cos(), (t * 1.3).sin(), t.sin()).normalize();
            let h = field.surface_height(dir);
            assert!(h < 10.0 + max_raise && h > 10.0 - max_sink, "height {}", h);
            assert!(field.distance(dir * h).abs() < 1e-3);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = TerrainField::new(Vec3::ZERO, 10.0, default_layers(), Perlin::seeded(3));
        let b = TerrainField::new(Vec3::ZERO, 10.0, default_layers(), Perlin::seeded(3));
        let p = Vec3::new(3.1, -7.4, 6.6);
        assert_eq!(a.distance(p), b.distance(p));
    }

    #[test]
    fn test_place_never_raises_distance() {
        let mut field = TerrainField::new(Vec3::ZERO, 10.0, default_layers(), Perlin::default());
        let samples: Vec<Vec3> = (0..64)
            .map(|i| {
                let t = i as f32 * 0.41;
                Vec3::new(8.0 + t.cos() * 4.0, t.sin() * 4.0, (t * 0.7).cos() * 4.0)
            })
            .collect();
        let before: Vec<f32> = samples.iter().map(|&p| field.distance(p)).collect();
        field.push(Modification::add(Vec3::new(9.0, 0.0, 0.0), 4.0));
        for (p, b) in samples.iter().zip(before) {
            assert!(field.distance(*p) <= b);
        }
    }

    #[test]
    fn test_mine_never_lowers_distance() {
        let mut field = TerrainField::new(Vec3::ZERO, 10.0, default_layers(), Perlin::default());
        let samples: Vec<Vec3> = (0..64)
            .map(|i| {
                let t = i as f32 * 0.53;
                Vec3::new(6.0 + t.cos() * 6.0, t.sin() * 6.0, (t * 0.9).sin() * 6.0)
            })
            .collect();
        let before: Vec<f32> = samples.iter().map(|&p| field.distance(p)).collect();
        field.push(Modification::subtract(Vec3::new(10.0, 0.0, 0.0), 3.0));
        for (p, b) in samples.iter().zip(before) {
            assert!(field.distance(*p) >= b);
        }
    }
}
