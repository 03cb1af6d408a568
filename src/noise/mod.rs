//! Coherent noise for terrain layering
//!
//! Gradient noise driven by a doubled permutation table, plus the ridge
//! transform used for mountain chains.

mod perlin;
mod permutation;

pub use perlin::{ridged, Perlin};
pub use permutation::{Permutation, REFERENCE, REFERENCE_BASE};
