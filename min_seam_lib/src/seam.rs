//! Seam search entry points: run the shortest path over a [`SeamGraph`] and
//! read one column per row off the resulting node path.

use tracing::debug;

use crate::error::{Result, SeamError};
use crate::graph::{BoundaryEdges, SeamGraph};
use crate::grid::EnergyGrid;
use crate::solver::{shortest_path, Distance};

/// Knobs for [`find_minimum_seam_with`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeamOptions {
    pub boundary: BoundaryEdges,
}

/// A vertical seam: one column per row, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    columns: Vec<usize>,
    cost: Distance,
}

impl Seam {
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Sum of the transition costs between consecutive rows.
    pub fn cost(&self) -> Distance {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

/// Minimum seam with the default (clamped) boundary edges.
pub fn find_minimum_seam(grid: &EnergyGrid) -> Result<Seam> {
    find_minimum_seam_with(grid, SeamOptions::default())
}

pub fn find_minimum_seam_with(grid: &EnergyGrid, options: SeamOptions) -> Result<Seam> {
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        boundary = ?options.boundary,
        "finding minimum seam"
    );
    let graph = SeamGraph::with_boundary(grid, options.boundary);
    let path = shortest_path(&graph, graph.source(), graph.sink())?;
    let columns = seam_from_path(grid, &path.nodes)?;
    Ok(Seam {
        columns,
        cost: path.distance,
    })
}

/// Turns a `source, pixel.., sink` node path into one column per row.
///
/// The path has to hold exactly one pixel per row, in row order.
pub fn seam_from_path(grid: &EnergyGrid, path: &[usize]) -> Result<Vec<usize>> {
    let (&first, rest) = path
        .split_first()
        .ok_or_else(|| SeamError::InvalidPath("empty path".into()))?;
    let (&last, pixels) = rest
        .split_last()
        .ok_or_else(|| SeamError::InvalidPath("path has a single node".into()))?;
    if first != grid.source() || last != grid.sink() {
        return Err(SeamError::InvalidPath(format!(
            "path runs {first} -> {last}, expected {} -> {}",
            grid.source(),
            grid.sink()
        )));
    }
    if pixels.len() != grid.rows() {
        return Err(SeamError::InvalidPath(format!(
            "path crosses {} pixels for {} rows",
            pixels.len(),
            grid.rows()
        )));
    }

    pixels
        .iter()
        .enumerate()
        .map(|(expected_row, &node)| match grid.pixel(node) {
            Some((row, col)) if row == expected_row => Ok(col),
            _ => Err(SeamError::InvalidPath(format!(
                "node {node} is not a pixel of row {expected_row}"
            ))),
        })
        .collect()
}

/// Total transition cost of a seam, checking that it is a connected path
/// inside the grid.
pub fn seam_cost(grid: &EnergyGrid, columns: &[usize]) -> Result<Distance> {
    if columns.len() != grid.rows() {
        return Err(SeamError::InvalidInput(format!(
            "seam has {} entries for {} rows",
            columns.len(),
            grid.rows()
        )));
    }
    if let Some(row) = columns.iter().position(|&c| c >= grid.cols()) {
        return Err(SeamError::InvalidInput(format!(
            "column {} in row {row} is outside 0..{}",
            columns[row],
            grid.cols()
        )));
    }

    let mut total: Distance = 0;
    for (row, pair) in columns.windows(2).enumerate() {
        if pair[0].abs_diff(pair[1]) > 1 {
            return Err(SeamError::InvalidInput(format!(
                "seam jumps from column {} to {} below row {row}",
                pair[0], pair[1]
            )));
        }
        let step = grid.transition_cost((row, pair[0]), (row + 1, pair[1]));
        total = total
            .checked_add(Distance::from(step))
            .ok_or(SeamError::DistanceOverflow {
                node: grid.node(row + 1, pair[1]),
            })?;
    }
    Ok(total)
}
