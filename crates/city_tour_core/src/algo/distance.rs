//! Dense all-pairs distance matrix and its Floyd-Warshall closure.

use crate::{Edge, Error, Result};

/// Symmetric `n x n` distance matrix in row-major order.
/// The diagonal is 0 and unknown connections are `f64::INFINITY`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Seeds the matrix from sparse edges.
    ///
    /// Both `[u][v]` and `[v][u]` take each edge's weight. A pair listed more than
    /// once keeps the weight of its last occurrence. Self-loops are skipped so
    /// the diagonal stays 0. `NaN` and infinite weights are rejected.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Result<Self> {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        let mut matrix = Self { data, size };

        for (idx, edge) in edges.iter().enumerate() {
            for id in [edge.u, edge.v] {
                if id >= size {
                    return Err(Error::IndexOutOfRange {
                        edge: idx,
                        id,
                        city_count: size,
                    });
                }
            }
            if !edge.weight.is_finite() {
                return Err(Error::NonFiniteWeight {
                    edge: idx,
                    weight: edge.weight,
                });
            }
            if edge.is_self_loop() {
                log::debug!("matrix: skipping self-loop edge={idx} city={}", edge.u);
                continue;
            }
            matrix.set_symmetric(edge.u, edge.v, edge.weight);
        }

        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        self.data[i * self.size + j] = weight;
        self.data[j * self.size + i] = weight;
    }

    /// Relaxes every pair through every intermediate node. Runs the full `O(n^3)`
    /// loop with no early exit.
    pub fn close(&mut self) {
        let n = self.size;
        for k in 0..n {
            for i in 0..n {
                let d_ik = self.data[i * n + k];
                if d_ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let through_k = d_ik + self.data[k * n + j];
                    if through_k < self.data[i * n + j] {
                        self.data[i * n + j] = through_k;
                    }
                }
            }
        }
    }

    /// One edge per `i < j` pair with a finite distance, in row order.
    pub fn finite_edges(&self) -> Vec<Edge> {
        let n = self.size;
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.get(i, j);
                if d.is_finite() {
                    edges.push(Edge::new(i, j, d));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMatrix;
    use crate::{Edge, Error};

    fn is_symmetric(m: &DistanceMatrix) -> bool {
        (0..m.size()).all(|i| (0..m.size()).all(|j| m.get(i, j) == m.get(j, i)))
    }

    #[test]
    fn from_edges_sets_diagonal_and_infinity() {
        let m = DistanceMatrix::from_edges(3, &[Edge::new(0, 1, 4.0)]).expect("matrix");
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(0, 1), 4.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.get(0, 2), f64::INFINITY);
        assert!(is_symmetric(&m));
    }

    #[test]
    fn duplicate_pairs_keep_the_last_weight() {
        let m = DistanceMatrix::from_edges(
            2,
            &[
                Edge::new(0, 1, 1.0),
                Edge::new(1, 0, 7.0),
                Edge::new(0, 1, 5.0),
            ],
        )
        .expect("matrix");
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(1, 0), 5.0);

        let m = DistanceMatrix::from_edges(2, &[Edge::new(0, 1, 1.0), Edge::new(1, 0, 9.0)])
            .expect("matrix");
        assert_eq!(m.get(0, 1), 9.0);
    }

    #[test]
    fn self_loops_leave_diagonal_at_zero() {
        let m = DistanceMatrix::from_edges(2, &[Edge::new(1, 1, 3.0)]).expect("matrix");
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn out_of_range_ids_fail_fast() {
        let err = DistanceMatrix::from_edges(2, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)])
            .expect_err("id 2 is out of range");
        assert!(matches!(
            err,
            Error::IndexOutOfRange {
                edge: 1,
                id: 2,
                city_count: 2
            }
        ));
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        let err = DistanceMatrix::from_edges(
            3,
            &[Edge::new(1, 2, 1.0), Edge::new(0, 1, f64::NAN)],
        )
        .expect_err("NaN weight");
        assert!(matches!(err, Error::NonFiniteWeight { edge: 1, weight } if weight.is_nan()));

        let err = DistanceMatrix::from_edges(2, &[Edge::new(0, 1, f64::INFINITY)])
            .expect_err("infinite weight");
        assert!(matches!(err, Error::NonFiniteWeight { edge: 0, .. }));
    }

    #[test]
    fn close_finds_indirect_paths() {
        let mut m = DistanceMatrix::from_edges(
            4,
            &[
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(0, 2, 10.0),
                Edge::new(2, 3, 1.0),
            ],
        )
        .expect("matrix");
        m.close();

        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(3, 0), 4.0);
        assert!(is_symmetric(&m));
    }

    #[test]
    fn close_satisfies_triangle_inequality() {
        let edges = [
            Edge::new(0, 1, 3.0),
            Edge::new(1, 2, 4.0),
            Edge::new(2, 3, 1.5),
            Edge::new(3, 4, 2.0),
            Edge::new(4, 0, 9.0),
            Edge::new(1, 3, 7.5),
            Edge::new(0, 2, 6.0),
        ];
        let mut m = DistanceMatrix::from_edges(5, &edges).expect("matrix");
        m.close();

        let n = m.size();
        for i in 0..n {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..n {
                for k in 0..n {
                    assert!(m.get(i, j) <= m.get(i, k) + m.get(k, j) + 1e-9);
                }
            }
        }
    }

    #[test]
    fn close_keeps_disconnected_pairs_infinite() {
        let mut m = DistanceMatrix::from_edges(4, &[Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)])
            .expect("matrix");
        m.close();
        assert_eq!(m.get(0, 2), f64::INFINITY);
        assert_eq!(m.get(1, 3), f64::INFINITY);

        let edges = m.finite_edges();
        assert_eq!(edges, vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)]);
    }

    #[test]
    fn finite_edges_enumerates_pairs_in_row_order() {
        let mut m = DistanceMatrix::from_edges(
            3,
            &[Edge::new(2, 1, 1.0), Edge::new(1, 0, 2.0)],
        )
        .expect("matrix");
        m.close();
        assert_eq!(
            m.finite_edges(),
            vec![
                Edge::new(0, 1, 2.0),
                Edge::new(0, 2, 3.0),
                Edge::new(1, 2, 1.0),
            ]
        );
    }

    #[test]
    fn empty_matrix_has_no_edges() {
        let mut m = DistanceMatrix::from_edges(0, &[]).expect("matrix");
        m.close();
        assert_eq!(m.size(), 0);
        assert!(m.finite_edges().is_empty());
    }
}
