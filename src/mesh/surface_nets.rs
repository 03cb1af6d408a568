//! Surface nets polygonization
//!
//! Cells are visited z-outermost, then y, then x. Face stitching for a cell
//! only looks at neighbours at `-1` on the other two axes, which the visit
//! order guarantees are already done. Each lattice edge leaving a cell's
//! corner 0 yields at most one quad, emitted from the forward-most cell of
//! the four that share it.
//!
//! A quad whose neighbour cells produced no vertex is skipped. That leaves
//! holes where the surface touches the lattice boundary; they are expected.

use super::tables::{CUBE_EDGES, EDGE_TABLE};
use super::{ExtractError, Mesh, Triangle};
use glam::Vec3;
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

/// Largest accepted samples-per-axis
pub const MAX_RESOLUTION: usize = 1024;

const NO_VERTEX: u32 = u32::MAX;

/// Configuration for surface nets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceNetsConfig {
    /// Lattice samples along each axis (cells = resolution - 1)
    pub resolution: usize,
    /// Evaluate the field on the rayon pool, one z-slice per task
    pub parallel_sampling: bool,
}

impl Default for SurfaceNetsConfig {
    fn default() -> Self {
        SurfaceNetsConfig {
            resolution: 64,
            parallel_sampling: true,
        }
    }
}

impl SurfaceNetsConfig {
    /// Config with the given resolution and default sampling
    pub fn with_resolution(resolution: usize) -> Self {
        SurfaceNetsConfig {
            resolution,
            ..Default::default()
        }
    }
}

/// Uniform sample lattice spanning `[min, max]`
struct Lattice {
    min: Vec3,
    cell_size: Vec3,
    res: usize,
}

impl Lattice {
    fn new(min: Vec3, max: Vec3, res: usize) -> Self {
        Lattice {
            min,
            cell_size: (max - min) / (res - 1) as f32,
            res,
        }
    }

    #[inline(always)]
    fn point(&self, x: usize, y: usize, z: usize) -> Vec3 {
        self.min + Vec3::new(x as f32, y as f32, z as f32) * self.cell_size
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.res + y) * self.res + x
    }

    /// Evaluate `field` at every lattice point, x fastest
    fn sample<F>(&self, field: &F, parallel: bool) -> Vec<f32>
    where
        F: Fn(Vec3) -> f32 + Sync,
    {
        let slice = self.res * self.res;
        let mut samples = vec![0.0f32; slice * self.res];

        let fill = |(z, values): (usize, &mut [f32])| {
            for y in 0..self.res {
                let row = &mut values[y * self.res..(y + 1) * self.res];
                for (x, value) in row.iter_mut().enumerate() {
                    *value = field(self.point(x, y, z));
                }
            }
        };

        if parallel {
            samples.par_chunks_mut(slice).enumerate().for_each(fill);
        } else {
            samples.chunks_mut(slice).enumerate().for_each(fill);
        }

        samples
    }
}

/// Extract the zero isosurface of `field` inside `[min, max]`
///
/// # Arguments
/// * `field` - Signed scalar field, negative inside
/// * `min` - Minimum corner of the lattice
/// * `max` - Maximum corner of the lattice
/// * `config` - Resolution and sampling mode
///
/// # Returns
/// Mesh with one vertex per surface cell, or an error if the lattice is
/// degenerate
pub fn surface_nets<F>(
    field: F,
    min: Vec3,
    max: Vec3,
    config: &SurfaceNetsConfig,
) -> Result<Mesh, ExtractError>
where
    F: Fn(Vec3) -> f32 + Sync,
{
    validate(min, max, config.resolution)?;

    let started = Instant::now();
    let lattice = Lattice::new(min, max, config.resolution);
    let samples = lattice.sample(&field, config.parallel_sampling);

    let non_finite = samples.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        warn!(
            "surface nets: {} of {} field samples are not finite",
            non_finite,
            samples.len()
        );
    }

    let mesh = polygonize(&lattice, &samples);

    debug!(
        "surface nets: resolution {} -> {} vertices, {} triangles in {:?}",
        config.resolution,
        mesh.vertex_count(),
        mesh.triangle_count(),
        started.elapsed()
    );

    Ok(mesh)
}

fn validate(min: Vec3, max: Vec3, resolution: usize) -> Result<(), ExtractError> {
    if resolution < 2 {
        return Err(ExtractError::InvalidResolution(resolution));
    }
    if resolution > MAX_RESOLUTION {
        return Err(ExtractError::ResolutionTooLarge(resolution));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(ExtractError::NonFiniteBounds);
    }
    for axis in 0..3 {
        if min[axis] >= max[axis] {
            return Err(ExtractError::InvalidBounds {
                axis,
                min: min[axis],
                max: max[axis],
            });
        }
    }
    Ok(())
}

/// Classify cells, place vertices and stitch faces in z, y, x order
fn polygonize(lattice: &Lattice, samples: &[f32]) -> Mesh {
    let cells = lattice.res - 1;
    let mut mesh = Mesh::new();

    // Vertex index per cell for the current and previous z-slice
    let mut previous = vec![NO_VERTEX; cells * cells];
    let mut current = vec![NO_VERTEX; cells * cells];

    for z in 0..cells {
        for y in 0..cells {
            for x in 0..cells {
                let mut corners = [0.0f32; 8];
                let mut mask = 0u8;
                for (i, corner) in corners.iter_mut().enumerate() {
                    let value =
                        samples[lattice.index(x + (i & 1), y + ((i >> 1) & 1), z + ((i >> 2) & 1))];
                    *corner = value;
                    if value < 0.0 {
                        mask |= 1 << i;
                    }
                }

                if mask == 0x00 || mask == 0xFF {
                    continue;
                }

                let edge_mask = EDGE_TABLE[mask as usize];
                let local = cell_vertex(&corners, edge_mask);
                let position = lattice.point(x, y, z) + local * lattice.cell_size;

                let m = mesh.vertices.len() as u32;
                mesh.vertices.push(position);
                current[y * cells + x] = m;

                stitch(
                    &mut mesh.faces,
                    [x, y, z],
                    m,
                    mask,
                    edge_mask,
                    &previous,
                    &current,
                    cells,
                );
            }
        }

        std::mem::swap(&mut previous, &mut current);
        current.fill(NO_VERTEX);
    }

    mesh
}

/// Mean of the edge zero-crossings of one cell, in cell-local `[0, 1]^3`
#[inline]
fn cell_vertex(corners: &[f32; 8], edge_mask: u16) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;

    for (e, &[a, b]) in CUBE_EDGES.iter().enumerate() {
        if edge_mask & (1 << e) == 0 {
            continue;
        }

        let s0 = corners[a as usize];
        let s1 = corners[b as usize];
        let t = s0 / (s0 - s1);

        let mut crossing = Vec3::ZERO;
        for axis in 0..3 {
            let bit = 1u8 << axis;
            crossing[axis] = if (a ^ b) & bit != 0 {
                if a & bit != 0 {
                    1.0 - t
                } else {
                    t
                }
            } else if a & bit != 0 {
                1.0
            } else {
                0.0
            };
        }

        sum += crossing;
        count += 1;
    }

    debug_assert!(count > 0, "non-uniform cell with no crossing edge");
    sum / count as f32
}

/// Emit quads for the crossing edges that leave corner 0 of `cell`
#[allow(clippy::too_many_arguments)]
#[inline]
fn stitch(
    faces: &mut Vec<Triangle>,
    cell: [usize; 3],
    m: u32,
    mask: u8,
    edge_mask: u16,
    previous: &[u32],
    current: &[u32],
    cells: usize,
) {
    for axis in 0..3 {
        if edge_mask & (1 << axis) == 0 {
            continue;
        }

        let iu = (axis + 1) % 3;
        let iv = (axis + 2) % 3;
        if cell[iu] == 0 || cell[iv] == 0 {
            continue;
        }

        let mut a = cell;
        a[iu] -= 1;
        let mut b = cell;
        b[iv] -= 1;
        let mut ab = a;
        ab[iv] -= 1;

        let lookup = |c: [usize; 3]| -> Option<u32> {
            let slice = if c[2] == cell[2] { current } else { previous };
            let v = slice[c[1] * cells + c[0]];
            (v != NO_VERTEX).then_some(v)
        };

        let (Some(va), Some(vb), Some(vab)) = (lookup(a), lookup(b), lookup(ab)) else {
            continue;
        };

        // Corner 0 inside: the surface faces +axis
        let quad = if mask & 1 != 0 {
            [m, va, vab, vb]
        } else {
            [m, vb, vab, va]
        };
        faces.push(Triangle::new(quad[0], quad[1], quad[2]));
        faces.push(Triangle::new(quad[0], quad[2], quad[3]));
    }
}
