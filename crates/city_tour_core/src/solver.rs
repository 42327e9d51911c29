use std::fmt;

use crate::{
    DistanceMatrix, Edge, Result, Tour,
    algo::{mst, preorder},
    edge,
};

/// Progress of a [`GraphSolver`]. Phases only move forward, and each one is
/// computed at most once.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Phase {
    Init,
    ShortestPathsReady,
    MstReady,
    TourReady,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Init => "init",
            Self::ShortestPathsReady => "shortest-paths-ready",
            Self::MstReady => "mst-ready",
            Self::TourReady => "tour-ready",
        };
        write!(f, "{value}")
    }
}

/// Metric closure, MST and tour approximation over one city graph.
///
/// Every `run_*` call and every accessor computes the phases it depends on
/// first, then memoizes the result. Calling any of them again returns the
/// stored result without recomputing it. All mutation goes through `&mut self`,
/// so sharing a solver across threads needs a lock around it.
#[derive(Clone, Debug)]
pub struct GraphSolver {
    distances: DistanceMatrix,
    mst_edges: Vec<Edge>,
    tour: Tour,
    phase: Phase,
}

impl GraphSolver {
    /// Seeds the distance matrix from `edges`.
    ///
    /// Fails with [`crate::Error::IndexOutOfRange`] when an edge names a city id
    /// outside `0..city_count`, and with [`crate::Error::NonFiniteWeight`] when a
    /// weight is `NaN` or infinite. When an unordered pair appears more than once,
    /// its last weight wins.
    pub fn new(city_count: usize, edges: &[Edge]) -> Result<Self> {
        let distances = DistanceMatrix::from_edges(city_count, edges)?;
        log::debug!(
            "solver: init cities={city_count} input_edges={}",
            edges.len()
        );
        Ok(Self {
            distances,
            mst_edges: Vec::new(),
            tour: Tour::default(),
            phase: Phase::Init,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn city_count(&self) -> usize {
        self.distances.size()
    }

    /// Seeded matrix before `run_shortest_paths`, closed matrix after it.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn run_shortest_paths(&mut self) {
        if self.phase >= Phase::ShortestPathsReady {
            return;
        }
        self.distances.close();
        self.phase = Phase::ShortestPathsReady;
        log::info!("solver: closure n={}", self.city_count());
    }

    pub fn run_mst(&mut self) {
        if self.phase >= Phase::MstReady {
            return;
        }
        let complete = self.complete_edges();
        let candidates = complete.len();
        self.mst_edges = mst::kruskal(self.city_count(), complete);
        self.phase = Phase::MstReady;
        log::info!(
            "solver: mst candidates={candidates} edges={} weight={:.3}",
            self.mst_edges.len(),
            edge::total_weight(&self.mst_edges)
        );
    }

    pub fn run_tour_approx(&mut self) {
        if self.phase >= Phase::TourReady {
            return;
        }
        self.run_mst();
        let n = self.city_count();
        self.tour = Tour::new(preorder::preorder_tour(n, &self.mst_edges));
        self.phase = Phase::TourReady;

        let visited = self.tour.visited();
        if visited < n {
            log::warn!(
                "solver: graph is disconnected; tour covers {visited} of {n} cities reachable from city {}",
                preorder::TOUR_START
            );
        }
        log::info!("solver: tour stops={}", self.tour.path.len());
    }

    /// Edges of the completed graph, one per `i < j` pair with a finite
    /// distance. Pairs that stay unreachable after the closure are left out.
    pub fn complete_edges(&mut self) -> Vec<Edge> {
        self.run_shortest_paths();
        self.distances.finite_edges()
    }

    pub fn mst_edges(&mut self) -> &[Edge] {
        self.run_mst();
        &self.mst_edges
    }

    pub fn mst_weight(&mut self) -> f64 {
        edge::total_weight(self.mst_edges())
    }

    /// Closed tour starting and ending at city 0.
    ///
    /// If the completed graph is disconnected, only city 0's component is
    /// visited. Other cities are silently missing from the path. A warning is
    /// logged, but no error is returned.
    pub fn tour_path(&mut self) -> &[usize] {
        &self.tour().path
    }

    pub fn tour(&mut self) -> &Tour {
        self.run_tour_approx();
        &self.tour
    }
}
