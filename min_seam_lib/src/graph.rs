//! The seam graph: pixels plus a source above the first row and a sink below
//! the last one.
//!
//! Edges point *downwards*: every pixel above the last row links to the three
//! (clamped) pixels of the row below it. Source feeds the whole first row and
//! the whole last row drains into sink. Every edge leaves a pixel for the row
//! below, so the graph is acyclic and any source-to-sink path visits exactly
//! one pixel per row, top to bottom.

use std::ops::Range;

use crate::grid::EnergyGrid;

/// A directed, weighted edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

impl Edge {
    pub fn new(to: usize, weight: u64) -> Self {
        Edge { to, weight }
    }
}

/// Anything the shortest path solver can walk.
pub trait WeightedGraph {
    type Neighbors<'a>: Iterator<Item = Edge>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    /// Out-edges of `node`. Nodes outside the graph have none.
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_>;
}

/// How the downward edges of the first and last column are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryEdges {
    /// Columns are clamped into range, so a pixel on the left or right border
    /// gets two parallel edges to the same neighbour below (three when the
    /// grid is one column wide).
    #[default]
    Clamped,
    /// Parallel edges are collapsed into one.
    Distinct,
}

/// Implicit graph over an [`EnergyGrid`]. Edges are recomputed on every
/// [`WeightedGraph::neighbors`] call and never stored.
#[derive(Debug, Clone, Copy)]
pub struct SeamGraph<'g> {
    grid: &'g EnergyGrid,
    boundary: BoundaryEdges,
}

impl<'g> SeamGraph<'g> {
    pub fn new(grid: &'g EnergyGrid) -> Self {
        Self::with_boundary(grid, BoundaryEdges::default())
    }

    pub fn with_boundary(grid: &'g EnergyGrid, boundary: BoundaryEdges) -> Self {
        SeamGraph { grid, boundary }
    }

    pub fn grid(&self) -> &'g EnergyGrid {
        self.grid
    }

    pub fn source(&self) -> usize {
        self.grid.source()
    }

    pub fn sink(&self) -> usize {
        self.grid.sink()
    }

    fn pixel_edges(&self, row: usize, col: usize) -> GridNeighbors {
        let grid = self.grid;
        let mut edges = [Edge::default(); 3];
        let mut len = 0;

        if row + 1 < grid.rows() {
            let candidates = [
                col.saturating_sub(1),
                col,
                (col + 1).min(grid.cols() - 1),
            ];
            for (i, &down) in candidates.iter().enumerate() {
                if self.boundary == BoundaryEdges::Distinct && candidates[..i].contains(&down) {
                    continue;
                }
                let weight = grid.transition_cost((row, col), (row + 1, down));
                edges[len] = Edge::new(grid.node(row + 1, down), weight);
                len += 1;
            }
        } else {
            edges[len] = Edge::new(grid.sink(), 0);
            len += 1;
        }

        GridNeighbors::Pixel { edges, len, pos: 0 }
    }
}

impl WeightedGraph for SeamGraph<'_> {
    type Neighbors<'a>
        = GridNeighbors
    where
        Self: 'a;

    fn node_count(&self) -> usize {
        self.grid.node_count()
    }

    fn neighbors(&self, node: usize) -> GridNeighbors {
        if node == self.grid.source() {
            return GridNeighbors::Source(0..self.grid.cols());
        }
        match self.grid.pixel(node) {
            Some((row, col)) => self.pixel_edges(row, col),
            None => GridNeighbors::empty(),
        }
    }
}

/// Out-edges of a single [`SeamGraph`] node.
#[derive(Debug, Clone)]
pub enum GridNeighbors {
    /// Zero-weight edges to each first-row pixel; pixel `(0, c)` is node `c`.
    Source(Range<usize>),
    /// Up to three downward edges, or the single sink edge on the last row.
    Pixel {
        edges: [Edge; 3],
        len: usize,
        pos: usize,
    },
}

impl GridNeighbors {
    fn empty() -> Self {
        GridNeighbors::Pixel {
            edges: [Edge::default(); 3],
            len: 0,
            pos: 0,
        }
    }
}

impl Iterator for GridNeighbors {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        match self {
            GridNeighbors::Source(cols) => cols.next().map(|to| Edge::new(to, 0)),
            GridNeighbors::Pixel { edges, len, pos } => {
                if *pos == *len {
                    return None;
                }
                let edge = edges[*pos];
                *pos += 1;
                Some(edge)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self {
            GridNeighbors::Source(cols) => cols.len(),
            GridNeighbors::Pixel { len, pos, .. } => len - pos,
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for GridNeighbors {}

/// A fully materialised adjacency list.
///
/// Built from any [`WeightedGraph`] (keeping its edge order) or by hand with
/// [`AdjacencyList::add_edge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adj: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    pub fn new(node_count: usize) -> Self {
        AdjacencyList {
            adj: vec![Vec::new(); node_count],
        }
    }

    pub fn from_graph<G: WeightedGraph>(graph: &G) -> Self {
        let adj = (0..graph.node_count())
            .map(|node| graph.neighbors(node).collect())
            .collect();
        AdjacencyList { adj }
    }

    /// Appends `from -> to`. Parallel edges are kept.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not below the node count the list was built with.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        self.adj[from].push(Edge::new(to, weight));
    }

    pub fn edges(&self, node: usize) -> &[Edge] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}

impl WeightedGraph for AdjacencyList {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, Edge>>;

    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.edges(node).iter().copied()
    }
}
