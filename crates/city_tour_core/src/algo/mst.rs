//! Kruskal's minimum spanning tree (forest, on disconnected input).

use crate::{Edge, algo::disjoint_set::DisjointSet};

/// Builds a minimum spanning forest over `n` nodes.
///
/// Edges are stable-sorted by weight, so equal weights keep the caller's order.
/// The whole list is scanned even after `n - 1` edges are accepted. Accepted
/// edges are returned in acceptance order.
pub fn kruskal(n: usize, mut edges: Vec<Edge>) -> Vec<Edge> {
    edges.sort_by(Edge::cmp_weight);

    let mut components = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for edge in edges {
        if !components.same(edge.u, edge.v) {
            tree.push(edge);
            components.union(edge.u, edge.v);
        }
    }

    tree
}
