//! Disjoint-set (union-find) over arbitrary vertex labels.
//!
//! Labels are interned to dense indices at construction; parent and rank
//! live in flat arrays indexed by those ids. Path compression keeps find
//! chains short and union by rank keeps trees shallow.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::error::{GraphError, GraphResult};

/// Partition of a fixed vertex set into disjoint connected components.
///
/// Created fresh per computation. State changes only through [`find`]
/// (path compression) and [`union`] (root re-parenting); `find` never
/// changes which component a vertex belongs to.
///
/// [`find`]: DisjointSet::find
/// [`union`]: DisjointSet::union
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    ids: HashMap<V, usize>,
    labels: Vec<V>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl<V> DisjointSet<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a partition with one singleton component per unique vertex.
    ///
    /// Duplicate labels are idempotently ignored.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut ids = HashMap::new();
        let mut labels: Vec<V> = Vec::new();
        for vertex in vertices {
            if !ids.contains_key(&vertex) {
                ids.insert(vertex.clone(), labels.len());
                labels.push(vertex);
            }
        }
        let n = labels.len();
        Self {
            ids,
            labels,
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of vertices in the partition.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the partition holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> usize {
        self.components
    }

    /// Whether `vertex` was part of the construction input.
    pub fn contains(&self, vertex: &V) -> bool {
        self.ids.contains_key(vertex)
    }

    /// Root representative of the component containing `vertex`.
    ///
    /// Compresses the walked chain as a side effect, so later finds on
    /// those vertices are O(1) amortized.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `vertex` was not part of
    /// the construction input.
    pub fn find(&mut self, vertex: &V) -> GraphResult<V> {
        let id = self.id_of(vertex, "find")?;
        let root = self.find_root(id);
        Ok(self.labels[root].clone())
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// Returns `true` if two separate components were merged, `false` if
    /// the vertices were already connected (no mutation). The `false`
    /// case is how the MST builder detects cycles.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either vertex was not
    /// part of the construction input.
    pub fn union(&mut self, a: &V, b: &V) -> GraphResult<bool> {
        let a = self.id_of(a, "union")?;
        let b = self.id_of(b, "union")?;

        let ra = self.find_root(a);
        let rb = self.find_root(b);

        if ra == rb {
            return Ok(false);
        }

        // Union by rank
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
        self.components -= 1;

        Ok(true)
    }

    fn id_of(&self, vertex: &V, context: &'static str) -> GraphResult<usize> {
        self.ids
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: format!("{:?}", vertex),
                context,
            })
    }

    /// Iterative find with path compression. Two passes: walk to the
    /// root, then re-point the walked chain directly at it. Stack usage
    /// is bounded regardless of chain length.
    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = start;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}
