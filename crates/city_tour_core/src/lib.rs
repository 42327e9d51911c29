//! Metric closure, minimum spanning tree and MST-preorder tour approximation over
//! weighted city maps.
//!
//! The flow is strictly one way: sparse edges, then the closed distance matrix,
//! then Kruskal's MST, then a preorder walk of that tree closed back to city 0.
//! Under the triangle inequality the resulting tour is at most twice the MST
//! weight.

mod algo;
mod city;
mod edge;
mod error;
mod io;
pub mod logging;
mod solver;
mod tour;

pub use algo::{disjoint_set::DisjointSet, distance::DistanceMatrix};
pub use city::{City, Point};
pub use edge::{Edge, total_weight};
pub use error::{Error, Result};
pub use io::city_map::CityMap;
pub use io::options::{LogFormat, LogLevel, Stage, TourOptions};
pub use solver::{GraphSolver, Phase};
pub use tour::{Tour, TourMetrics};
