//! 3D gradient noise over a permutation lattice
//!
//! # Optimizations
//! - **Forced Inlining**: `fade`, `lerp` and `grad` are inlined into `noise3`.
//! - **No Wrap Checks**: the doubled permutation table absorbs every `+1`
//!   lattice step, so hashing is eight chained lookups with no modulo.

use super::permutation::Permutation;
use glam::Vec3;

/// Gradient noise sampler bound to one permutation table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Perlin {
    perm: Permutation,
}

impl Perlin {
    /// Build a sampler over `perm`.
    pub fn new(perm: Permutation) -> Self {
        Perlin { perm }
    }

    /// Sampler over a shuffled table (see [`Permutation::seeded`]).
    pub fn seeded(seed: u64) -> Self {
        Perlin::new(Permutation::seeded(seed))
    }

    /// Sample noise at a point; roughly in `[-1, 1]`, zero at lattice points.
    #[inline]
    pub fn sample(&self, p: Vec3) -> f32 {
        self.noise3(p.x, p.y, p.z)
    }

    /// Sample noise at `(x, y, z)`.
    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        let fx = x.floor();
        let fy = y.floor();
        let fz = z.floor();

        let xi = (fx as i32 & 255) as usize;
        let yi = (fy as i32 & 255) as usize;
        let zi = (fz as i32 & 255) as usize;

        let xf = x - fx;
        let yf = y - fy;
        let zf = z - fz;

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let p = &self.perm;
        let a = p.at(xi) + yi;
        let aa = p.at(a) + zi;
        let ab = p.at(a + 1) + zi;
        let b = p.at(xi + 1) + yi;
        let ba = p.at(b) + zi;
        let bb = p.at(b + 1) + zi;

        lerp(
            lerp(
                lerp(grad(p.at(aa), xf, yf, zf), grad(p.at(ba), xf - 1.0, yf, zf), u),
                lerp(
                    grad(p.at(ab), xf, yf - 1.0, zf),
                    grad(p.at(bb), xf - 1.0, yf - 1.0, zf),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    grad(p.at(aa + 1), xf, yf, zf - 1.0),
                    grad(p.at(ba + 1), xf - 1.0, yf, zf - 1.0),
                    u,
                ),
                lerp(
                    grad(p.at(ab + 1), xf, yf - 1.0, zf - 1.0),
                    grad(p.at(bb + 1), xf - 1.0, yf - 1.0, zf - 1.0),
                    u,
                ),
                v,
            ),
            w,
        )
    }
}

/// Ridge transform: `(1 - |n|)^2`, in `[0, 1]`, peaking where `n` crosses zero.
#[inline(always)]
pub fn ridged(n: f32) -> f32 {
    let r = 1.0 - n.abs();
    r * r
}

/// Quintic fade `6t^5 - 15t^4 + 10t^3`
#[inline(always)]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// 4-bit hash to one of 12 cube-edge gradients (4 repeated to fill 16 slots).
#[inline(always)]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    let g1 = if (h & 1) == 0 { u } else { -u };
    let g2 = if (h & 2) == 0 { v } else { -v };
    g1 + g2
}
