//! Permutation table for lattice hashing
//!
//! The 256-entry base table is stored twice back to back so that
//! `perm[perm[x] + y]` never needs an extra wrap. Both halves must hold the
//! same values, otherwise the noise jumps at every 256-cell boundary.

/// Classic reference permutation of 0..=255.
pub const REFERENCE_BASE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Doubled reference table, built at compile time.
pub const REFERENCE: Permutation = Permutation::from_base(&REFERENCE_BASE);

/// Doubled 512-entry permutation table (`perm[i] == perm[i + 256]`).
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    perm: [u8; 512],
}

impl Permutation {
    /// Double a 256-entry base table.
    pub const fn from_base(base: &[u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        let mut i = 0;
        while i < 256 {
            perm[i] = base[i];
            perm[i + 256] = base[i];
            i += 1;
        }
        Permutation { perm }
    }

    /// Deterministic Fisher-Yates shuffle of 0..=255 driven by `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut base = [0u8; 256];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        for i in (1..256usize).rev() {
            state = lcg_next(state);
            let j = ((state >> 33) % (i as u64 + 1)) as usize;
            base.swap(i, j);
        }

        Self::from_base(&base)
    }

    /// Table entry at `index` (valid for `0..512`).
    #[inline(always)]
    pub fn at(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// The 256-entry base half.
    pub fn base(&self) -> &[u8] {
        &self.perm[..256]
    }
}

impl Default for Permutation {
    fn default() -> Self {
        REFERENCE
    }
}

impl std::fmt::Debug for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permutation")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

#[inline]
fn lcg_next(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
