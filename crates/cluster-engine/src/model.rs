//! Cluster Model
//!
//! Nearest-centroid assignment over the frozen centroid table. The
//! model's only capability is `predict`; interpretation of the index
//! (1-based display, descriptions) lives elsewhere.

use crate::{ClusterError, ModelArtifact};
use feature_engine::{WeightedVector, FEATURE_DIMENSION};

/// Number of behavioral clusters the model was fitted with
pub const CLUSTER_COUNT: usize = 8;

/// Read-only clustering model
pub struct ClusterModel {
    centroids: Vec<[f64; FEATURE_DIMENSION]>,
}

impl ClusterModel {
    /// Build a model from a loaded artifact, checking shape
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, ClusterError> {
        if artifact.centroids.len() != CLUSTER_COUNT {
            return Err(ClusterError::WrongClusterCount {
                expected: CLUSTER_COUNT,
                actual: artifact.centroids.len(),
            });
        }
        let mut centroids = Vec::with_capacity(CLUSTER_COUNT);
        for (cluster, raw) in artifact.centroids.iter().enumerate() {
            let centroid: [f64; FEATURE_DIMENSION] =
                raw.as_slice()
                    .try_into()
                    .map_err(|_| ClusterError::WrongDimension {
                        cluster,
                        expected: FEATURE_DIMENSION,
                        actual: raw.len(),
                    })?;
            centroids.push(centroid);
        }
        Ok(Self { centroids })
    }

    /// Predict the 0-based cluster index for a weighted vector.
    ///
    /// Ties resolve to the lowest index, which keeps prediction
    /// deterministic for synthetic inputs equidistant to centroids.
    pub fn predict(&self, vector: &WeightedVector) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (idx, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = vector
                .iter()
                .zip(centroid.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum();
            if distance < best_distance {
                best_distance = distance;
                best = idx;
            }
        }
        best
    }

    /// Number of clusters in the model
    pub fn cluster_count(&self) -> usize {
        self.centroids.len()
    }
}
