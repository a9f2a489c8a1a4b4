//! Feature Engineering Engine
//!
//! Turns raw customer records into the bounded ordinal feature set the
//! clustering model was fitted on, and applies importance weighting.
//! Every clip bound, bin width, and encoding here is a contract with
//! the trained model; changing one silently reassigns customers.

mod binning;
mod scaler;
mod transformer;

pub use binning::{bin4, clip, clip_upper};
pub use scaler::{FeatureWeights, WeightedVector, IMPORTANCE_WEIGHT};
pub use transformer::{FeatureSet, TransformMode, Transformer, FEATURE_DIMENSION};

use record_validator::ValidationError;
use thiserror::Error;

/// Errors during feature transformation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransformError {
    /// A record failed a field-level check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Batch mode filtered out every row
    #[error("every row was filtered out of the batch")]
    EmptyBatch,
}
