use std::{cmp::Ordering, fmt};

/// Weighted connection between two city ids. `u` and `v` are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    pub const fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Weight-only ordering. Callers rely on a stable sort to keep ties in
    /// insertion order.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu::Buffer::new();
        write!(f, "{} {} {}", self.u, self.v, buf.format(self.weight))
    }
}

pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{Edge, total_weight};

    #[test]
    fn stable_sort_by_weight_keeps_insertion_order_on_ties() {
        let mut edges = vec![
            Edge::new(0, 1, 2.0),
            Edge::new(0, 2, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 1.0),
        ];
        edges.sort_by(Edge::cmp_weight);
        let order: Vec<(usize, usize)> = edges.iter().map(|e| (e.u, e.v)).collect();
        assert_eq!(order, vec![(0, 2), (2, 3), (0, 1), (1, 2)]);
    }

    #[test]
    fn cmp_weight_orders_infinity_last() {
        let finite = Edge::new(0, 1, 1e300);
        let infinite = Edge::new(0, 1, f64::INFINITY);
        assert_eq!(finite.cmp_weight(&infinite), Ordering::Less);
    }

    #[test]
    fn display_prints_ids_and_weight() {
        assert_eq!(Edge::new(0, 3, 1.414).to_string(), "0 3 1.414");
    }

    #[test]
    fn total_weight_sums_all_edges() {
        let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.5)];
        assert_eq!(total_weight(&edges), 3.5);
        assert_eq!(total_weight(&[]), 0.0);
    }
}
