//! Integration tests: surface nets extraction
//!
//! Verifies vertex placement, winding, closure and determinism on sphere
//! and noisy planet fields.

mod common;

use common::*;
use tiny_planet::mesh::tables::{CUBE_EDGES, EDGE_TABLE};
use tiny_planet::prelude::*;

// ============================================================================
// Tables
// ============================================================================

#[test]
fn edge_table_is_symmetric_under_sign_flip() {
    for mask in 0..256usize {
        assert_eq!(EDGE_TABLE[mask], EDGE_TABLE[!mask & 0xFF]);
    }
    assert_eq!(EDGE_TABLE[0x00].count_ones(), 0);
    assert_eq!(EDGE_TABLE[0xFF].count_ones(), 0);
}

#[test]
fn cube_edges_follow_corner_graph() {
    let mut degree = [0; 8];
    for [a, b] in CUBE_EDGES {
        degree[a as usize] += 1;
        degree[b as usize] += 1;
    }
    assert_eq!(degree, [3; 8]);
}

// ============================================================================
// Sphere scenarios
// ============================================================================

#[test]
fn coarse_sphere_scenario() {
    let mesh = extract(&plain_sphere(), 8);

    assert!(mesh.triangle_count() > 0);
    for (i, v) in mesh.vertices.iter().enumerate() {
        let r = v.length();
        assert!((9.0..=11.0).contains(&r), "vertex {} at radius {}", i, r);
    }
}

#[test]
fn sphere_vertices_within_one_cell_diagonal() {
    for resolution in [16, 24, 33] {
        let mesh = extract(&plain_sphere(), resolution);
        let diagonal = cell_diagonal(resolution);
        assert!(mesh.vertex_count() > 0);
        for v in &mesh.vertices {
            let err = (v.length() - 10.0).abs();
            assert!(
                err <= diagonal,
                "res {}: vertex off by {} > {}",
                resolution,
                err,
                diagonal
            );
        }
    }
}

#[test]
fn interior_sphere_is_closed() {
    // Surface never touches the lattice boundary, so no quad is skipped
    let mesh = extract(&plain_sphere(), 32);
    assert!(mesh.triangle_count() > 0);
    assert_eq!(open_edge_count(&mesh), 0);
    assert_eq!(mesh.triangle_count() % 2, 0);
}

#[test]
fn sphere_faces_point_outward() {
    for resolution in [8, 16, 32] {
        let mesh = extract(&plain_sphere(), resolution);
        let fraction = outward_fraction(&mesh, Vec3::ZERO);
        assert!(fraction > 0.99, "res {}: outward fraction {}", resolution, fraction);
    }
}

#[test]
fn clipped_sphere_leaves_boundary_gaps() {
    // Lattice cuts through the sphere: missing neighbours skip quads silently
    let field = plain_sphere();
    let mesh = surface_nets(
        |p| field.distance(p),
        Vec3::new(0.0, -15.0, -15.0),
        Vec3::splat(15.0),
        &SurfaceNetsConfig::with_resolution(16),
    )
    .unwrap();
    assert!(mesh.triangle_count() > 0);
    assert!(open_edge_count(&mesh) > 0);
}

#[test]
fn extraction_is_deterministic() {
    let planet = TerrainField::from_config(&PlanetConfig::default());
    let a = extract(&planet, 24);
    let b = extract(&planet, 24);

    assert_eq!(a.vertices.len(), b.vertices.len());
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        assert_eq!(va.to_array().map(f32::to_bits), vb.to_array().map(f32::to_bits));
    }
    assert_eq!(a.faces, b.faces);
}

#[test]
fn higher_resolution_more_detail() {
    let lo = extract(&plain_sphere(), 8);
    let hi = extract(&plain_sphere(), 24);
    assert!(hi.vertex_count() > lo.vertex_count());
    assert!(hi.triangle_count() > lo.triangle_count());
}

// ============================================================================
// Noisy planet
// ============================================================================

#[test]
fn noisy_planet_vertices_near_zero_level() {
    let field = TerrainField::from_config(&PlanetConfig::default());
    let resolution = 40;
    let mesh = extract(&field, resolution);
    let diagonal = cell_diagonal(resolution);

    // Sum of all layer amplitudes, in radii
    let relief: f32 = field.layers().iter().map(|l| l.amplitude).sum::<f32>() * field.radius();

    assert!(mesh.triangle_count() > 1000);
    for v in &mesh.vertices {
        let r = v.length();
        assert!(
            (r - field.radius()).abs() <= relief + diagonal,
            "vertex {:?} at radius {}",
            v,
            r
        );
    }
}

#[test]
fn vertex_normals_agree_with_winding() {
    let field = plain_sphere();
    let mesh = extract(&field, 20);
    let normals = vertex_normals(|p| field.distance(p), &mesh, 1e-2);

    for t in &mesh.faces {
        let face = mesh.face_normal(t);
        let n = normals[t.a as usize] + normals[t.b as usize] + normals[t.c as usize];
        assert!(face.dot(n) > 0.0);
    }
}
