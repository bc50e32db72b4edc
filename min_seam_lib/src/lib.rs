//! Minimum vertical seam search.
//!
//! An energy grid is turned into a graph with one node per pixel plus a
//! source above the first row and a sink below the last. Each pixel links to
//! the three pixels diagonally/directly below it, weighted by the absolute
//! energy difference. The cheapest source-to-sink path, found with Dijkstra
//! over an indexed heap, crosses every row exactly once: that is the seam.
//!
//! ```
//! use min_seam_lib::{find_minimum_seam, EnergyGrid};
//!
//! let grid = EnergyGrid::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]])?;
//! let seam = find_minimum_seam(&grid)?;
//! assert_eq!(seam.columns(), &[2, 1, 0]);
//! assert_eq!(seam.cost(), 4);
//! # Ok::<(), min_seam_lib::SeamError>(())
//! ```

pub mod dp;
pub mod error;
pub mod graph;
pub mod grid;
pub mod queue;
pub mod seam;
pub mod solver;
pub mod text;

pub use error::{Result, SeamError};
pub use graph::{AdjacencyList, BoundaryEdges, Edge, SeamGraph, WeightedGraph};
pub use grid::EnergyGrid;
pub use queue::IndexedMinQueue;
pub use seam::{
    find_minimum_seam, find_minimum_seam_with, seam_cost, seam_from_path, Seam, SeamOptions,
};
pub use solver::{shortest_path, Distance, ShortestPath};
