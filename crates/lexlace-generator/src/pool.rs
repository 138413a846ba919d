//! The canonical die pool.

use lexlace_core::DieFaces;

/// The sixteen face-sets of the classic word-dice set.
///
/// Boards with more than sixteen cells (such as the classic 5x5 layout)
/// repeat this pool; see [`pool_for_cells`].
pub const CLASSIC_POOL: [DieFaces; 16] = [
    DieFaces::from_ascii(b"AAEEGN"),
    DieFaces::from_ascii(b"ELRTTY"),
    DieFaces::from_ascii(b"AOOTTW"),
    DieFaces::from_ascii(b"ABBJOO"),
    DieFaces::from_ascii(b"EHRTVW"),
    DieFaces::from_ascii(b"CIMOTU"),
    DieFaces::from_ascii(b"DISTTY"),
    DieFaces::from_ascii(b"EIOSST"),
    DieFaces::from_ascii(b"DELRVY"),
    DieFaces::from_ascii(b"ACHOPS"),
    DieFaces::from_ascii(b"HIMNQU"),
    DieFaces::from_ascii(b"EEINSU"),
    DieFaces::from_ascii(b"EEGHNW"),
    DieFaces::from_ascii(b"AFFKPS"),
    DieFaces::from_ascii(b"HLNNRZ"),
    DieFaces::from_ascii(b"DEILRX"),
];

/// Repeats `pool` whole as many times as needed to cover `cells` positions.
///
/// The result's length is the smallest multiple of the pool size that is at
/// least `cells`, so a subsequent shuffle-and-truncate draws nearly uniformly
/// from the pool composition. Empty input yields an empty result.
#[must_use]
pub fn pool_for_cells(pool: &[DieFaces], cells: usize) -> Vec<DieFaces> {
    if pool.is_empty() || cells == 0 {
        return Vec::new();
    }
    let repeats = cells.div_ceil(pool.len());
    pool.iter().copied().cycle().take(repeats * pool.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_pool_composition() {
        assert_eq!(CLASSIC_POOL.len(), 16);
        // Every set is distinct.
        for (i, a) in CLASSIC_POOL.iter().enumerate() {
            for b in &CLASSIC_POOL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pool_for_cells_repeats_whole_pools() {
        let pool = pool_for_cells(&CLASSIC_POOL, 25);
        assert_eq!(pool.len(), 32);
        for (i, faces) in pool.iter().enumerate() {
            assert_eq!(*faces, CLASSIC_POOL[i % 16]);
        }
    }

    #[test]
    fn test_pool_for_cells_exact_fit() {
        assert_eq!(pool_for_cells(&CLASSIC_POOL, 16).len(), 16);
        assert_eq!(pool_for_cells(&CLASSIC_POOL, 1).len(), 16);
    }

    #[test]
    fn test_pool_for_cells_degenerate_inputs() {
        assert!(pool_for_cells(&CLASSIC_POOL, 0).is_empty());
        assert!(pool_for_cells(&[], 25).is_empty());
    }
}
