//! Segmentation Pipeline
//!
//! One immutable handle tying the transformer, the weight table, and
//! the clustering model together. Built once at startup from the
//! model artifact and shared read-only across requests; nothing here
//! re-reads storage per call.

use crate::descriptions::{describe, NO_DESCRIPTION};
use crate::{ClusterError, ClusterModel, ModelArtifact};
use chrono::NaiveDate;
use feature_engine::{FeatureWeights, TransformError, TransformMode, Transformer};
use record_validator::RawRecord;
use serde::Serialize;
use tracing::{debug, info};

/// A customer's segment assignment
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    /// Retained customer ID, never seen by the model
    pub customer_id: i64,
    /// 1-based group number as surfaced to users
    pub cluster: u8,
    /// Static profile text for the group
    pub description: &'static str,
}

/// Immutable prediction context: transformer + weights + model
pub struct SegmentPipeline {
    transformer: Transformer,
    weights: FeatureWeights,
    model: ClusterModel,
}

impl SegmentPipeline {
    /// Build the pipeline from a loaded artifact. The transformer
    /// inherits the artifact's training-time reference date.
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, ClusterError> {
        let model = ClusterModel::from_artifact(artifact)?;
        info!(
            reference_date = %artifact.reference_date,
            clusters = model.cluster_count(),
            "segmentation pipeline ready"
        );
        Ok(Self {
            transformer: Transformer::new(artifact.reference_date),
            weights: FeatureWeights::default(),
            model,
        })
    }

    /// The training-time reference date in use
    pub fn reference_date(&self) -> NaiveDate {
        self.transformer.reference_date()
    }

    /// Cluster a historical batch. Rows failing the data-quality
    /// filters are dropped; an entirely filtered batch is an error.
    pub fn assign_batch(&self, records: &[RawRecord]) -> Result<Vec<Assignment>, TransformError> {
        let (features, ids) = self.transformer.transform(records, TransformMode::Batch)?;
        let assignments = features
            .iter()
            .zip(ids)
            .map(|(feature_set, customer_id)| {
                let vector = self.weights.scale(feature_set);
                self.label(customer_id, self.model.predict(&vector))
            })
            .collect();
        Ok(assignments)
    }

    /// Score one live customer record
    pub fn assign_one(&self, record: &RawRecord) -> Result<Assignment, TransformError> {
        let feature_set = self.transformer.transform_one(record)?;
        let vector = self.weights.scale(&feature_set);
        let assignment = self.label(record.id, self.model.predict(&vector));
        debug!(
            customer_id = assignment.customer_id,
            cluster = assignment.cluster,
            "assigned customer"
        );
        Ok(assignment)
    }

    /// Turn a 0-based model index into a displayable assignment
    fn label(&self, customer_id: i64, model_index: usize) -> Assignment {
        let cluster = model_index as u8 + 1;
        Assignment {
            customer_id,
            cluster,
            description: describe(cluster).unwrap_or(NO_DESCRIPTION),
        }
    }
}
