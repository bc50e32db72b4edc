//! Helpers shared by the integration tests.

use min_seam_lib::{Distance, EnergyGrid};
use proptest::prelude::*;

/// Cheapest seam cost found by trying every connected seam. Only usable on
/// tiny grids: the work grows like `cols * 3^rows`.
pub fn exhaustive_minimum_cost(grid: &EnergyGrid) -> Distance {
    fn walk(grid: &EnergyGrid, row: usize, col: usize, acc: Distance, best: &mut Distance) {
        if acc >= *best {
            return;
        }
        if row + 1 == grid.rows() {
            *best = acc;
            return;
        }
        let lo = col.saturating_sub(1);
        let hi = (col + 1).min(grid.cols() - 1);
        for next in lo..=hi {
            let step = grid.transition_cost((row, col), (row + 1, next));
            walk(grid, row + 1, next, acc + Distance::from(step), best);
        }
    }

    let mut best = Distance::MAX;
    for col in 0..grid.cols() {
        walk(grid, 0, col, 0, &mut best);
    }
    best
}

/// Rectangular grids of `rows` x `cols` with energies below `max_energy`.
pub fn grid_strategy(
    rows: std::ops::RangeInclusive<usize>,
    cols: std::ops::RangeInclusive<usize>,
    max_energy: u32,
) -> impl Strategy<Value = Vec<Vec<u32>>> {
    (rows, cols).prop_flat_map(move |(r, c)| {
        prop::collection::vec(prop::collection::vec(0..max_energy, c), r)
    })
}

/// Rectangular grids drawing energies from the whole `u64` range, biased
/// towards zero and `u64::MAX` so huge steps show up next to flat ones.
pub fn wide_grid_strategy(
    rows: std::ops::RangeInclusive<usize>,
    cols: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Vec<Vec<u64>>> {
    let energy = prop_oneof![Just(0u64), Just(u64::MAX), any::<u64>()];
    (rows, cols).prop_flat_map(move |(r, c)| {
        prop::collection::vec(prop::collection::vec(energy.clone(), c), r)
    })
}

pub fn assert_connected(columns: &[usize], cols: usize) {
    for &c in columns {
        assert!(c < cols, "column {c} outside 0..{cols}");
    }
    for pair in columns.windows(2) {
        assert!(
            pair[0].abs_diff(pair[1]) <= 1,
            "seam jumps from {} to {}",
            pair[0],
            pair[1]
        );
    }
}
