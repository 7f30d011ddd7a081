//! spanr - Minimum spanning forests over weighted undirected graphs
//!
//! spanr computes minimum spanning trees (and forests, for disconnected
//! inputs) with Kruskal's algorithm, backed by a disjoint-set
//! (union-find) structure with path compression and union by rank.
//!
//! # Current Modules
//!
//! - [`graph`] - Kruskal spanning tree / forest and the disjoint-set
//!   structure driving it
//! - [`registry`] - In-memory student registry (an independent key-value
//!   collaborator; nothing connects it to the graph algorithms)
//!
//! # Example
//!
//! ```
//! use spanr::{minimum_spanning_tree, Edge};
//!
//! let vertices = ["A", "B", "C", "D"];
//! let edges = [
//!     Edge::new("A", "B", 1),
//!     Edge::new("B", "C", 2),
//!     Edge::new("A", "C", 2),
//!     Edge::new("C", "D", 3),
//! ];
//!
//! let mst = minimum_spanning_tree(vertices, &edges)?;
//! assert_eq!(mst.len(), 3);
//! assert_eq!(mst.total_weight(), 6);
//! # Ok::<(), spanr::GraphError>(())
//! ```

pub mod graph;
pub mod registry;

// Re-export main types for convenience
pub use graph::{minimum_spanning_tree, DisjointSet, Edge, GraphError, GraphResult, MstResult};
pub use registry::{StudentRegistry, UNKNOWN_NAME};
