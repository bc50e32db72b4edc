//! Dijkstra's algorithm with an indexed heap.
//!
//! All nodes are queued up front keyed by their tentative distance, and a
//! relaxation lowers the key in place, so every node is extracted exactly
//! once and no stale entries are ever skipped.

use tracing::{debug, trace};

use crate::error::{Result, SeamError};
use crate::graph::WeightedGraph;
use crate::queue::IndexedMinQueue;

/// Path lengths are twice as wide as edge weights, so no grid that fits in
/// memory can sum its way up to [`INFINITY`].
pub type Distance = u128;

/// Distance of a node that has not been reached. No finite distance may
/// ever be equal to it.
pub const INFINITY: Distance = Distance::MAX;

/// A source-to-sink path, both ends included, and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub nodes: Vec<usize>,
    pub distance: Distance,
}

/// Finds the cheapest path from `source` to `sink`.
///
/// The search stops as soon as `sink` is extracted from the queue; edge
/// weights are non-negative so its distance is final at that point.
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    source: usize,
    sink: usize,
) -> Result<ShortestPath> {
    let n = graph.node_count();
    if source >= n || sink >= n {
        return Err(SeamError::InvalidInput(format!(
            "endpoints {source} -> {sink} outside graph of {n} nodes"
        )));
    }
    debug!(nodes = n, source, sink, "shortest path search");

    let mut distance = vec![INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    distance[source] = 0;

    let mut queue = IndexedMinQueue::from_priorities(&distance);
    let mut settled = 0usize;

    loop {
        if queue.is_empty() {
            return Err(SeamError::Unreachable { start: source, sink });
        }
        let (u, dist_u) = queue.extract_min()?;
        if dist_u == INFINITY {
            // everything still queued is cut off from the source
            return Err(SeamError::Unreachable { start: source, sink });
        }
        settled += 1;
        if u == sink {
            break;
        }

        for edge in graph.neighbors(u) {
            let v = edge.to;
            let current = *distance.get(v).ok_or_else(|| {
                SeamError::InvalidInput(format!("edge {u} -> {v} leaves the graph"))
            })?;
            let Some(candidate) = dist_u
                .checked_add(Distance::from(edge.weight))
                .filter(|&d| d < INFINITY)
            else {
                // a finite distance already beats any overflowing candidate
                if current == INFINITY {
                    return Err(SeamError::DistanceOverflow { node: v });
                }
                continue;
            };
            if candidate < current {
                trace!(from = u, to = v, candidate = %candidate, "relax");
                distance[v] = candidate;
                predecessor[v] = Some(u);
                queue.decrease_key(v, candidate)?;
            }
        }
    }

    let nodes = reconstruct_path(&predecessor, source, sink)?;
    debug!(
        settled,
        distance = %distance[sink],
        length = nodes.len(),
        "sink reached"
    );
    Ok(ShortestPath {
        nodes,
        distance: distance[sink],
    })
}

/// Walks the predecessor chain from `sink` back to `source`.
fn reconstruct_path(
    predecessor: &[Option<usize>],
    source: usize,
    sink: usize,
) -> Result<Vec<usize>> {
    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        current = predecessor[current].ok_or(SeamError::Unreachable {
            start: source,
            sink,
        })?;
        path.push(current);
        if path.len() > predecessor.len() {
            return Err(SeamError::InvalidPath("predecessor chain has a cycle".into()));
        }
    }
    path.reverse();
    Ok(path)
}
