use crate::{City, DistanceMatrix};

pub const ROUTE_SEPARATOR: &str = " -> ";

/// Closed tour over city ids. A non-empty tour starts and ends at the same id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour {
    pub path: Vec<usize>,
}

impl Tour {
    pub fn new(path: Vec<usize>) -> Self {
        Self { path }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Distinct cities visited. The closing return to the start is not counted.
    pub fn visited(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Sum of leg lengths taken from a closed distance matrix.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        self.path
            .windows(2)
            .map(|leg| distances.get(leg[0], leg[1]))
            .sum()
    }

    /// City names joined by `->`. Ids without a city are printed as `#id`.
    pub fn route(&self, cities: &[City]) -> String {
        self.path
            .iter()
            .map(|&id| match cities.get(id) {
                Some(city) => city.name.clone(),
                None => format!("#{id}"),
            })
            .collect::<Vec<_>>()
            .join(ROUTE_SEPARATOR)
    }

    pub fn tour_metrics(&self, distances: &DistanceMatrix, threshold_factor: f64) -> TourMetrics {
        let legs: Vec<f64> = self
            .path
            .windows(2)
            .map(|leg| distances.get(leg[0], leg[1]))
            .collect();

        if legs.is_empty() {
            log::info!("metrics: legs=0 so there's nothing to report");
            return TourMetrics::default();
        }

        let total: f64 = legs.iter().sum();
        let average = total / (legs.len() as f64);
        let threshold = average * threshold_factor;
        let outliers = legs.iter().filter(|d| **d > threshold).count();
        let longest = legs.iter().copied().fold(0.0_f64, f64::max);

        log::info!(
            "metrics: legs={} total={total:.3} longest={longest:.3} avg={average:.3} spike_threshold={threshold:.3} spikes={outliers}",
            legs.len()
        );

        TourMetrics {
            legs: legs.len(),
            longest,
            outliers,
            total,
            average,
            threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub legs: usize,
    pub longest: f64,
    pub outliers: usize,
    pub total: f64,
    pub average: f64,
    pub threshold: f64,
}

impl TourMetrics {
    /// Tour length over MST weight. The preorder walk keeps this at or below 2.
    pub fn mst_ratio(&self, mst_weight: f64) -> Option<f64> {
        (mst_weight > 0.0).then(|| self.total / mst_weight)
    }
}
