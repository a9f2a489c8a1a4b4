//! Clustering Engine
//!
//! Loads the pre-fitted clustering model as a read-only artifact and
//! assigns customers to one of eight behavioral segments. The model
//! is a frozen centroid table; this crate never trains anything.

mod artifact;
mod descriptions;
mod model;
mod pipeline;

pub use artifact::ModelArtifact;
pub use descriptions::{describe, Characteristic};
pub use model::{ClusterModel, CLUSTER_COUNT};
pub use pipeline::{Assignment, SegmentPipeline};

use thiserror::Error;

/// Errors while loading or applying the clustering model
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("failed to read model artifact: {0}")]
    ArtifactRead(#[from] std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    ArtifactParse(#[from] serde_json::Error),
    #[error("model artifact has {actual} centroids, expected {expected}")]
    WrongClusterCount { expected: usize, actual: usize },
    #[error("centroid {cluster} has {actual} dimensions, expected {expected}")]
    WrongDimension {
        cluster: usize,
        expected: usize,
        actual: usize,
    },
}
