//! Caller-side vertex attributes
//!
//! The extractor only produces positions and faces. Renderers that want
//! shading data derive it here from the field and from vertex height.

use super::Mesh;
use glam::Vec3;
use rayon::prelude::*;

/// Height bands for [`height_colors`], as fractions of the planet radius
/// above (or below) the base sphere. The last band catches everything higher.
pub const HEIGHT_BANDS: [(f32, [f32; 3]); 5] = [
    (-0.04, [0.30, 0.24, 0.20]), // basin soil
    (0.01, [0.76, 0.70, 0.50]),  // sand
    (0.07, [0.30, 0.55, 0.25]),  // grass
    (0.13, [0.45, 0.42, 0.40]),  // rock
    (f32::INFINITY, [0.95, 0.95, 0.97]), // snow
];

/// Per-vertex normals from the field gradient (central differences)
///
/// Zero where the gradient vanishes.
pub fn vertex_normals<F>(field: F, mesh: &Mesh, eps: f32) -> Vec<Vec3>
where
    F: Fn(Vec3) -> f32 + Sync,
{
    mesh.vertices
        .par_iter()
        .map(|&p| gradient_cd(&field, p, eps))
        .collect()
}

#[inline(always)]
fn gradient_cd<F: Fn(Vec3) -> f32>(field: &F, p: Vec3, eps: f32) -> Vec3 {
    Vec3::new(
        field(p + Vec3::X * eps) - field(p - Vec3::X * eps),
        field(p + Vec3::Y * eps) - field(p - Vec3::Y * eps),
        field(p + Vec3::Z * eps) - field(p - Vec3::Z * eps),
    )
    .normalize_or_zero()
}

/// Per-vertex RGB colors banded by height above a sphere of `radius` at `center`
pub fn height_colors(mesh: &Mesh, center: Vec3, radius: f32) -> Vec<[f32; 3]> {
    mesh.vertices
        .iter()
        .map(|&p| band_color(((p - center).length() - radius) / radius))
        .collect()
}

#[inline]
fn band_color(relative_height: f32) -> [f32; 3] {
    HEIGHT_BANDS
        .iter()
        .find(|(limit, _)| relative_height < *limit)
        .map(|(_, color)| *color)
        .unwrap_or(HEIGHT_BANDS[HEIGHT_BANDS.len() - 1].1)
}
