//! Minimum spanning tree via Kruskal's algorithm (undirected graphs).
//!
//! Sorts edges by ascending weight with a stable sort, then greedily
//! accepts every edge that joins two previously disconnected components,
//! using union-find to test and update connectivity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use super::disjoint_set::DisjointSet;
use super::error::{GraphError, GraphResult};
use super::types::{Edge, MstResult};

/// Kruskal's minimum spanning tree algorithm.
///
/// For a connected input the result holds exactly V-1 edges; for a
/// disconnected input it is a minimum spanning forest with one tree per
/// component. Accepted edges are returned in acceptance order: ascending
/// weight, ties keeping the input edge list's relative order. The scan
/// never stops early, so trailing components are always spanned.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
///
/// # Errors
/// - [`GraphError::UnknownVertex`] if an edge references a vertex absent
///   from `vertices`.
/// - [`GraphError::InvalidInput`] if an edge weight is not comparable to
///   itself (e.g. a NaN float).
pub fn minimum_spanning_tree<V, W>(
    vertices: impl IntoIterator<Item = V>,
    edges: &[Edge<V, W>],
) -> GraphResult<MstResult<V, W>>
where
    V: Clone + Eq + Hash + fmt::Debug,
    W: Clone + PartialOrd,
{
    let mut components = DisjointSet::new(vertices);

    // Validate eagerly so no partial result is ever produced.
    for edge in edges {
        for endpoint in [&edge.u, &edge.v] {
            if !components.contains(endpoint) {
                return Err(GraphError::UnknownVertex {
                    vertex: format!("{:?}", endpoint),
                    context: "edge list",
                });
            }
        }
        if edge.weight.partial_cmp(&edge.weight).is_none() {
            return Err(GraphError::InvalidInput {
                reason: format!(
                    "weight of edge {:?} -- {:?} is not totally ordered",
                    edge.u, edge.v
                ),
            });
        }
    }

    // Stable sort: equal weights keep their input order.
    let mut sorted: Vec<&Edge<V, W>> = edges.iter().collect();
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    // Self-loops and cycle-closing edges fail the union and are skipped.
    let mut accepted = Vec::new();
    for edge in sorted {
        if components.union(&edge.u, &edge.v)? {
            accepted.push(edge.clone());
        }
    }

    Ok(MstResult { edges: accepted })
}
