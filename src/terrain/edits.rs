//! CSG edits folded onto the terrain field
//!
//! Edits are kept in insertion order. Each one composes onto the distance
//! produced by everything before it, so where an add and a subtract overlap
//! the later edit decides the result.

use crate::operations::{sdf_subtraction, sdf_union};
use crate::primitives::sdf_sphere_at;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Whether an edit deposits or removes material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Union with the brush sphere (place)
    Add,
    /// Carve the brush sphere out (mine)
    Subtract,
}

/// One spherical brush stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    /// Brush center in world space
    pub center: Vec3,
    /// Brush radius
    pub radius: f32,
    /// Add or subtract
    pub mode: EditMode,
}

impl Modification {
    /// Create a new modification
    pub fn new(center: Vec3, radius: f32, mode: EditMode) -> Self {
        Modification {
            center,
            radius,
            mode,
        }
    }

    /// Material-adding brush
    pub fn add(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius, EditMode::Add)
    }

    /// Material-removing brush
    pub fn subtract(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius, EditMode::Subtract)
    }

    /// Signed distance to the brush sphere
    #[inline(always)]
    pub fn brush_distance(&self, point: Vec3) -> f32 {
        sdf_sphere_at(point, self.center, self.radius)
    }

    /// Compose this edit onto `distance`
    #[inline(always)]
    pub fn apply(&self, distance: f32, point: Vec3) -> f32 {
        let brush = self.brush_distance(point);
        match self.mode {
            EditMode::Add => sdf_union(distance, brush),
            EditMode::Subtract => sdf_subtraction(distance, brush),
        }
    }
}

/// Fold `edits` onto `distance` in order
#[inline]
pub fn apply_modifications(distance: f32, point: Vec3, edits: &[Modification]) -> f32 {
    edits
        .iter()
        .fold(distance, |d, edit| edit.apply(d, point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fills_brush() {
        let edit = Modification::add(Vec3::new(12.0, 0.0, 0.0), 3.0);
        // Outside the planet but inside the brush
        let d = edit.apply(2.0, Vec3::new(12.0, 0.0, 0.0));
        assert!((d + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_subtract_carves_brush() {
        let edit = Modification::subtract(Vec3::new(10.0, 0.0, 0.0), 3.0);
        let d = edit.apply(-1.0, Vec3::new(9.0, 0.0, 0.0));
        assert!(d > 0.0, "point inside the brush should become empty, got {}", d);
    }

    #[test]
    fn test_order_decides_overlap() {
        let p = Vec3::ZERO;
        let add = Modification::add(p, 2.0);
        let sub = Modification::subtract(p, 2.0);

        let add_then_sub = apply_modifications(5.0, p, &[add, sub]);
        let sub_then_add = apply_modifications(5.0, p, &[sub, add]);

        assert!(add_then_sub > 0.0);
        assert!(sub_then_add < 0.0);
    }

    #[test]
    fn test_empty_list_is_identity() {
        assert_eq!(apply_modifications(1.25, Vec3::ONE, &[]), 1.25);
    }

    #[test]
    fn test_json_shape() {
        let edit = Modification::subtract(Vec3::new(1.0, 2.0, 3.0), 0.5);
        let json = serde_json::to_string(&edit).unwrap();
        assert!(json.contains("\"subtract\""));
        let back: Modification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edit);
    }
}
