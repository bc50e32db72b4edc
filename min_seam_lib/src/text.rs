//! Plain-text grid and seam formats.
//!
//! A grid is one row per line of whitespace-separated non-negative integers;
//! blank lines are skipped. A seam is written as its columns separated by
//! single spaces on one line.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::error::SeamError;
use crate::grid::EnergyGrid;

#[derive(Debug, Error)]
pub enum TextError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line}: `{token}` is not a non-negative integer")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Grid(#[from] SeamError),
}

/// Reads a grid, validating its shape.
pub fn read_grid<R: BufRead>(reader: R) -> Result<EnergyGrid, TextError> {
    let rows = read_rows(reader)?;
    Ok(EnergyGrid::from_rows(&rows)?)
}

/// Reads the raw rows without any shape checks.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Vec<u64>>, TextError> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u64>().map_err(|_| TextError::Parse {
                    line: i + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn write_seam<W: Write>(mut writer: W, columns: &[usize]) -> io::Result<()> {
    writeln!(writer, "{}", format_seam(columns))?;
    writer.flush()
}

pub fn format_seam(columns: &[usize]) -> String {
    columns
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
