//! Closed tour from a depth-first preorder walk of a spanning tree.

use crate::Edge;

pub const TOUR_START: usize = 0;

/// Undirected adjacency lists. Each edge is appended to both endpoints in
/// iteration order, and that order is the order the walk visits children.
pub fn adjacency(n: usize, tree: &[Edge]) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); n];
    for edge in tree {
        adj[edge.u].push(edge.v);
        adj[edge.v].push(edge.u);
    }
    adj
}

/// Preorder walk from node 0, closed by returning to node 0.
///
/// Uses an explicit stack of `(node, next neighbor index)` frames, which visits
/// nodes in exactly the order the recursive walk would. Nodes outside node 0's
/// component are never reached and do not appear in the result.
pub fn preorder_tour(n: usize, tree: &[Edge]) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let adj = adjacency(n, tree);
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    let mut stack = vec![(TOUR_START, 0usize)];
    visited[TOUR_START] = true;
    path.push(TOUR_START);

    while let Some(&(node, cursor)) = stack.last() {
        let Some(&next) = adj[node].get(cursor) else {
            stack.pop();
            continue;
        };
        let top = stack.len() - 1;
        stack[top].1 += 1;

        if !visited[next] {
            visited[next] = true;
            path.push(next);
            stack.push((next, 0));
        }
    }

    path.push(TOUR_START);
    path
}

#[cfg(test)]
mod tests {
    use super::{adjacency, preorder_tour};
    use crate::Edge;

    fn recursive_preorder(
        node: usize,
        adj: &[Vec<usize>],
        visited: &mut [bool],
        out: &mut Vec<usize>,
    ) {
        visited[node] = true;
        out.push(node);
        for &next in &adj[node] {
            if !visited[next] {
                recursive_preorder(next, adj, visited, out);
            }
        }
    }

    #[test]
    fn empty_graph_has_empty_tour() {
        assert!(preorder_tour(0, &[]).is_empty());
    }

    #[test]
    fn single_node_tour_returns_to_itself() {
        assert_eq!(preorder_tour(1, &[]), vec![0, 0]);
    }

    #[test]
    fn adjacency_keeps_edge_order_on_both_endpoints() {
        let tree = [Edge::new(0, 2, 1.0), Edge::new(1, 0, 1.0), Edge::new(2, 3, 1.0)];
        let adj = adjacency(4, &tree);
        assert_eq!(adj[0], vec![2, 1]);
        assert_eq!(adj[1], vec![0]);
        assert_eq!(adj[2], vec![0, 3]);
        assert_eq!(adj[3], vec![2]);
    }

    #[test]
    fn children_are_visited_in_adjacency_order_not_id_order() {
        let tree = [Edge::new(0, 3, 1.0), Edge::new(0, 1, 1.0), Edge::new(3, 2, 1.0)];
        assert_eq!(preorder_tour(4, &tree), vec![0, 3, 2, 1, 0]);
    }

    #[test]
    fn matches_recursive_walk_on_branchy_tree() {
        let tree = [
            Edge::new(4, 6, 1.0),
            Edge::new(0, 4, 1.0),
            Edge::new(2, 7, 1.0),
            Edge::new(0, 2, 1.0),
            Edge::new(4, 1, 1.0),
            Edge::new(7, 5, 1.0),
            Edge::new(3, 7, 1.0),
        ];
        let n = 8;
        let adj = adjacency(n, &tree);
        let mut visited = vec![false; n];
        let mut expected = Vec::new();
        recursive_preorder(0, &adj, &mut visited, &mut expected);
        expected.push(0);

        assert_eq!(preorder_tour(n, &tree), expected);
    }

    #[test]
    fn unreachable_nodes_are_left_out() {
        let tree = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)];
        assert_eq!(preorder_tour(4, &tree), vec![0, 1, 0]);
    }

    #[test]
    fn long_path_does_not_overflow_the_stack() {
        let n = 200_000;
        let tree: Vec<Edge> = (1..n).map(|i| Edge::new(i - 1, i, 1.0)).collect();
        let tour = preorder_tour(n, &tree);
        assert_eq!(tour.len(), n + 1);
        assert_eq!(tour[n - 1], n - 1);
        assert_eq!(tour[n], 0);
    }
}
