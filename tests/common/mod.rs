//! Common test helpers for tiny-planet integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use tiny_planet::prelude::*;

// ============================================================================
// Standard fields and lattices
// ============================================================================

/// Sphere of radius 10 at the origin, no noise
pub fn plain_sphere() -> TerrainField {
    TerrainField::sphere(Vec3::ZERO, 10.0)
}

/// Bounds used by the coarse end-to-end scenarios
pub fn sphere_bounds() -> (Vec3, Vec3) {
    (Vec3::splat(-15.0), Vec3::splat(15.0))
}

/// Extract `field` over `sphere_bounds()` at `resolution`
pub fn extract(field: &TerrainField, resolution: usize) -> Mesh {
    let (min, max) = sphere_bounds();
    surface_nets(
        |p| field.distance(p),
        min,
        max,
        &SurfaceNetsConfig::with_resolution(resolution),
    )
    .expect("valid lattice")
}

/// Length of one lattice cell diagonal for `sphere_bounds()`
pub fn cell_diagonal(resolution: usize) -> f32 {
    let (min, max) = sphere_bounds();
    ((max - min) / (resolution - 1) as f32).length()
}

// ============================================================================
// Mesh checks
// ============================================================================

/// Number of undirected edges not shared by exactly two triangles
pub fn open_edge_count(mesh: &Mesh) -> usize {
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for t in &mesh.faces {
        for (a, b) in [(t.a, t.b), (t.b, t.c), (t.c, t.a)] {
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    edges.values().filter(|&&n| n != 2).count()
}

/// Fraction of faces whose normal points away from `center`
pub fn outward_fraction(mesh: &Mesh, center: Vec3) -> f32 {
    let outward = mesh
        .faces
        .iter()
        .filter(|t| {
            let centroid = (mesh.vertices[t.a as usize]
                + mesh.vertices[t.b as usize]
                + mesh.vertices[t.c as usize])
                / 3.0;
            mesh.face_normal(t).dot(centroid - center) > 0.0
        })
        .count();
    outward as f32 / mesh.triangle_count() as f32
}

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}
