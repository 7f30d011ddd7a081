//! Graph algorithms over weighted undirected graphs.
//!
//! This module provides:
//! - Minimum spanning tree / forest (Kruskal)
//! - Disjoint-set (union-find) with path compression and union by rank
//!
//! Each computation is self-contained: the spanning-tree builder creates
//! its own [`DisjointSet`], drives it for one edge scan, and discards it.

pub mod disjoint_set;
pub mod error;
pub mod mst;
pub mod types;

pub use disjoint_set::DisjointSet;
pub use error::{GraphError, GraphResult};
pub use mst::minimum_spanning_tree;
pub use types::{Edge, MstResult};
