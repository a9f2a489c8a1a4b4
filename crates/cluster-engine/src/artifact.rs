//! Model Artifact
//!
//! The clustering model is trained offline and shipped as a JSON
//! file holding the centroid table and the training-time reference
//! date. Persisting the reference date here is deliberate: a single
//! prediction must measure tenure against the date the model was
//! fitted with, never against its own join date.

use crate::ClusterError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Persisted clustering model: centroids in weighted-feature space
/// plus the reference date the training batch was transformed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Maximum join date of the training batch
    pub reference_date: NaiveDate,
    /// One centroid per cluster, in weighted-feature space
    pub centroids: Vec<Vec<f64>>,
}

impl ModelArtifact {
    /// Load an artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClusterError> {
        let file = File::open(path.as_ref())?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        info!(
            path = %path.as_ref().display(),
            clusters = artifact.centroids.len(),
            reference_date = %artifact.reference_date,
            "loaded model artifact"
        );
        Ok(artifact)
    }
}
