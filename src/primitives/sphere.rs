//! Sphere SDF
//!
//! The planet body and every edit brush are spheres placed anywhere in the
//! world, so only the centered form is provided.

use glam::Vec3;

/// Signed distance from `point` to a sphere of `radius` around `center`
///
/// Negative inside. Exact everywhere, including at `center`.
#[inline(always)]
pub fn sdf_sphere_at(point: Vec3, center: Vec3, radius: f32) -> f32 {
    point.distance(center) - radius
}
