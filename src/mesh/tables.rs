//! Cube topology tables for surface nets
//!
//! Corner `i` of a cell sits at offset `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
//! Two corners share an edge iff their indices differ in exactly one bit,
//! which gives the 12 edges below. Edges are enumerated corner by corner,
//! so edges 0, 1 and 2 are the x, y and z edges leaving corner 0.
//!
//! Both tables are evaluated at compile time.

/// Endpoint corner pairs for the 12 cube edges
pub const CUBE_EDGES: [[u8; 2]; 12] = build_cube_edges();

/// Corner sign mask (bit set = sample below zero) to 12-bit crossing-edge mask
pub const EDGE_TABLE: [u16; 256] = build_edge_table();

const fn build_cube_edges() -> [[u8; 2]; 12] {
    let mut edges = [[0u8; 2]; 12];
    let mut k = 0;
    let mut i = 0u8;
    while i < 8 {
        let mut j = 1u8;
        while j <= 4 {
            let p = i ^ j;
            if i <= p {
                edges[k] = [i, p];
                k += 1;
            }
            j <<= 1;
        }
        i += 1;
    }
    edges
}

const fn build_edge_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut mask = 0usize;
    while mask < 256 {
        let mut crossing = 0u16;
        let mut e = 0;
        while e < 12 {
            let a = (mask >> CUBE_EDGES[e][0]) & 1;
            let b = (mask >> CUBE_EDGES[e][1]) & 1;
            if a != b {
                crossing |= 1 << e;
            }
            e += 1;
        }
        table[mask] = crossing;
        mask += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_differ_in_one_bit() {
        for [a, b] in CUBE_EDGES {
            assert!(a < b);
            assert_eq!((a ^ b).count_ones(), 1, "edge {}-{}", a, b);
        }
    }

    #[test]
    fn test_edges_unique() {
        for (i, e) in CUBE_EDGES.iter().enumerate() {
            for other in &CUBE_EDGES[i + 1..] {
                assert_ne!(e, other);
            }
        }
    }

    #[test]
    fn test_first_three_edges_leave_corner_zero() {
        assert_eq!(CUBE_EDGES[0], [0, 1]); // x
        assert_eq!(CUBE_EDGES[1], [0, 2]); // y
        assert_eq!(CUBE_EDGES[2], [0, 4]); // z
    }

    #[test]
    fn test_uniform_masks_have_no_crossings() {
        assert_eq!(EDGE_TABLE[0x00], 0);
        assert_eq!(EDGE_TABLE[0xFF], 0);
    }

    #[test]
    fn test_complement_symmetry() {
        for mask in 0..256usize {
            assert_eq!(EDGE_TABLE[mask], EDGE_TABLE[!mask & 0xFF], "mask {:#04x}", mask);
        }
    }

    #[test]
    fn test_non_uniform_masks_cross() {
        for mask in 1..255usize {
            assert_ne!(EDGE_TABLE[mask], 0, "mask {:#04x}", mask);
            assert_eq!(EDGE_TABLE[mask] >> 12, 0);
        }
    }

    #[test]
    fn test_single_corner_crosses_three_edges() {
        for corner in 0..8 {
            let crossings = EDGE_TABLE[1 << corner];
            assert_eq!(crossings.count_ones(), 3);
            for (e, [a, b]) in CUBE_EDGES.iter().enumerate() {
                let touches = *a == corner as u8 || *b == corner as u8;
                assert_eq!(crossings & (1 << e) != 0, touches);
            }
        }
    }
}
