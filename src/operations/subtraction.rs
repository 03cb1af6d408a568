//! Subtraction operation for SDFs

/// Subtraction of B from A (A minus B)
///
/// # Returns
/// max(d1, -d2)
#[inline(always)]
pub fn sdf_subtraction(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}
