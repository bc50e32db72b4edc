//! Validated energy grid and the pixel <-> node numbering shared by the
//! graph, the solver and seam extraction.
//!
//! Pixel `(r, c)` is node `r * cols + c`. The two nodes after the last pixel
//! are the synthetic source (`rows * cols`) and sink (`rows * cols + 1`).

use ndarray::{Array2, ArrayView2};
use num_traits::ToPrimitive;

use crate::error::{Result, SeamError};

/// An immutable, rectangular, non-empty grid of per-pixel energies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyGrid {
    energy: Array2<u64>,
}

impl EnergyGrid {
    /// Builds a grid from row slices, rejecting empty and ragged input.
    ///
    /// Any primitive integer type is accepted as long as every value is
    /// non-negative and fits in a `u64`.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: ToPrimitive + Copy,
        R: AsRef<[T]>,
    {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(SeamError::InvalidInput("grid has no rows".into()));
        }
        let n_cols = rows[0].as_ref().len();
        if n_cols == 0 {
            return Err(SeamError::InvalidInput("grid has no columns".into()));
        }

        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(SeamError::InvalidInput(format!(
                    "row {r} has {} values, expected {n_cols}",
                    row.len()
                )));
            }
            for (c, value) in row.iter().enumerate() {
                flat.push(to_energy(*value, r, c)?);
            }
        }

        let energy = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| SeamError::InvalidInput(e.to_string()))?;
        Ok(Self { energy })
    }

    /// Builds a grid from an already rectangular `ndarray` matrix.
    pub fn from_array<T>(energy: ArrayView2<'_, T>) -> Result<Self>
    where
        T: ToPrimitive + Copy,
    {
        if energy.nrows() == 0 {
            return Err(SeamError::InvalidInput("grid has no rows".into()));
        }
        if energy.ncols() == 0 {
            return Err(SeamError::InvalidInput("grid has no columns".into()));
        }

        let mut converted = Array2::zeros(energy.dim());
        for ((r, c), value) in energy.indexed_iter() {
            converted[[r, c]] = to_energy(*value, r, c)?;
        }
        Ok(Self { energy: converted })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.energy.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.energy.ncols()
    }

    #[inline]
    pub fn energy(&self, row: usize, col: usize) -> u64 {
        self.energy[[row, col]]
    }

    pub fn view(&self) -> ArrayView2<'_, u64> {
        self.energy.view()
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Pixels plus source and sink.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.pixel_count() + 2
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.pixel_count()
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.pixel_count() + 1
    }

    #[inline]
    pub fn node(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows() && col < self.cols());
        row * self.cols() + col
    }

    /// Inverse of [`EnergyGrid::node`]; `None` for source, sink and
    /// out-of-range ids.
    #[inline]
    pub fn pixel(&self, node: usize) -> Option<(usize, usize)> {
        (node < self.pixel_count()).then(|| (node / self.cols(), node % self.cols()))
    }

    /// Weight of moving between two pixels: the absolute energy difference.
    #[inline]
    pub fn transition_cost(&self, from: (usize, usize), to: (usize, usize)) -> u64 {
        self.energy(from.0, from.1).abs_diff(self.energy(to.0, to.1))
    }
}

fn to_energy<T: ToPrimitive>(value: T, row: usize, col: usize) -> Result<u64> {
    value.to_u64().ok_or_else(|| {
        SeamError::InvalidInput(format!(
            "value at ({row}, {col}) is not a non-negative integer fitting in u64"
        ))
    })
}
