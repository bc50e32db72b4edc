//! Row-by-row dynamic programming over the same transition costs the graph
//! uses. Independent of the graph and the heap, so it doubles as a
//! cross-check for [`crate::find_minimum_seam`].

use ndarray::{s, Array2, Axis};

use crate::error::{Result, SeamError};
use crate::grid::EnergyGrid;
use crate::solver::Distance;

/// `map[[r, c]]` is the cheapest cost of any seam prefix ending at `(r, c)`.
/// The first row is all zeros.
pub fn cumulative_cost_map(grid: &EnergyGrid) -> Result<Array2<Distance>> {
    let w = grid.cols();
    let h = grid.rows();

    let mut cost: Array2<Distance> = Array2::zeros((h, w));

    for row in 1..h {
        for column in 0..w {
            let min_c = column.saturating_sub(1);
            let max_c = w.min(column + 2);

            let mut best: Option<Distance> = None;
            for (i, &above) in cost.slice(s![row - 1, min_c..max_c]).indexed_iter() {
                let step = grid.transition_cost((row - 1, min_c + i), (row, column));
                let total = above
                    .checked_add(Distance::from(step))
                    .ok_or(SeamError::DistanceOverflow {
                        node: grid.node(row, column),
                    })?;
                best = Some(best.map_or(total, |b| b.min(total)));
            }
            cost[[row, column]] = best.unwrap_or(0);
        }
    }

    Ok(cost)
}

/// Cost of the cheapest seam.
pub fn minimum_seam_cost(grid: &EnergyGrid) -> Result<Distance> {
    let cost = cumulative_cost_map(grid)?;
    Ok(cost
        .index_axis(Axis(0), grid.rows() - 1)
        .iter()
        .copied()
        .min()
        .unwrap_or(0))
}

/// One cheapest seam, traced back from the last row. Ties go to the
/// leftmost column.
pub fn dp_seam(grid: &EnergyGrid) -> Result<Vec<usize>> {
    let cost = cumulative_cost_map(grid)?;
    let n_rows = grid.rows();
    let w = grid.cols();

    let mut idx = vec![0; n_rows];

    idx[n_rows - 1] = cost
        .index_axis(Axis(0), n_rows - 1)
        .indexed_iter()
        .min_by_key(|&(i, &x)| (x, i))
        .map(|(i, _)| i)
        .unwrap_or(0);

    for row in (0..n_rows - 1).rev() {
        let below = idx[row + 1];
        let target = cost[[row + 1, below]];
        let min_i = below.saturating_sub(1);
        let max_i = w.min(below + 2);

        idx[row] = cost
            .slice(s![row, min_i..max_i])
            .indexed_iter()
            .map(|(i, &above)| (i + min_i, above))
            .find(|&(c, above)| {
                let step = grid.transition_cost((row, c), (row + 1, below));
                above.checked_add(Distance::from(step)) == Some(target)
            })
            .map(|(c, _)| c)
            .unwrap_or(below);
    }

    Ok(idx)
}
