//! Count the noncrossing acyclic digraphs on `n` points.
//!
//! A noncrossing graph on `n` vertices is drawn on `n` points in
//! counter-clockwise order on a circle, with its arcs inside the circle and
//! pairwise non-crossing. The resulting integer sequence is
//! [OEIS A246756](https://oeis.org/A246756):
//!
//! ```text
//! 1, 3, 25, 335, 5521, 101551, 1998753, 41188543, 877423873, 19166868607
//! ```

use log::debug;
use num::BigInt;
use rayon::prelude::*;

use crate::grammar::{CategoryTotals, Charts};

/// Derivation counts of the six categories over all `num_nodes` points.
pub fn category_totals(num_nodes: usize) -> CategoryTotals<BigInt> {
    Charts::<BigInt>::fill(num_nodes, |_, _| true).totals()
}

pub fn count_derivations(num_nodes: usize) -> BigInt {
    let total = category_totals(num_nodes).total();
    debug!("{} nodes: {} derivations", num_nodes, total);
    total
}

/// Counts for `1..=max_nodes`, computed in parallel on the current rayon pool.
pub fn count_sequence(max_nodes: usize) -> Vec<BigInt> {
    (1..=max_nodes)
        .into_par_iter()
        .map(count_derivations)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    const A246756: [u64; 10] = [
        1,
        3,
        25,
        335,
        5521,
        101551,
        1998753,
        41188543,
        877423873,
        19166868607,
    ];

    #[test]
    fn test_single_node() {
        assert_eq!(count_derivations(1), BigInt::from(1));
    }

    #[test]
    fn test_golden_sequence() {
        let expected: Vec<BigInt> = A246756.iter().map(|&c| BigInt::from(c)).collect();
        assert_eq!(count_sequence(10), expected);
    }

    #[test]
    fn test_monotone() {
        let counts = count_sequence(14);
        for pair in counts.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_exceeds_u64() {
        let count = count_derivations(40);
        assert!(count > BigInt::from(u64::MAX));
    }

    #[test]
    #[should_panic]
    fn test_zero_nodes_panics() {
        count_derivations(0);
    }
}
