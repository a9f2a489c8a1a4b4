//! Feature Scaler
//!
//! Multiplies the designated importance features before distance
//! computation. The clustering model was fitted on the weighted
//! vectors, so the weight and the weighted set are model contracts.

use crate::transformer::{FeatureSet, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};

/// Multiplier applied to the importance features
pub const IMPORTANCE_WEIGHT: f64 = 5.0;

/// Final numeric representation submitted to the clustering model
pub type WeightedVector = [f64; FEATURE_DIMENSION];

/// Per-feature weighting table.
///
/// `is_buying`, `is_kids`, and `drinks` were judged the most
/// discriminative features for the segmentation objective; inflating
/// them stretches the Euclidean distances along those axes without
/// changing their ordinal meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Weight for the importance features
    pub emphasis: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            emphasis: IMPORTANCE_WEIGHT,
        }
    }
}

impl FeatureWeights {
    /// Produce the weighted vector for one feature set. Total
    /// function; no failure modes.
    pub fn scale(&self, features: &FeatureSet) -> WeightedVector {
        let mut vector = features.to_vector();
        vector[7] *= self.emphasis; // is_buying
        vector[9] *= self.emphasis; // is_kids
        vector[12] *= self.emphasis; // drinks
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> FeatureSet {
        FeatureSet {
            year_birth: 2,
            education: 3,
            complain: 1,
            buys_on_campaign: 4,
            purchases_with_discount: 2,
            preference: 1,
            is_client_since: 3,
            is_buying: 2,
            family_size: 4,
            is_kids: 1,
            amount_spent_per_person: 1,
            spent_vs_income: 2,
            drinks: 1,
        }
    }

    #[test]
    fn test_weighted_features_are_five_times_raw() {
        let features = sample_features();
        let scaled = FeatureWeights::default().scale(&features);
        assert_eq!(scaled[7], features.is_buying as f64 * 5.0);
        assert_eq!(scaled[9], features.is_kids as f64 * 5.0);
        assert_eq!(scaled[12], features.drinks as f64 * 5.0);
    }

    #[test]
    fn test_non_target_features_pass_through() {
        let features = sample_features();
        let raw = features.to_vector();
        let scaled = FeatureWeights::default().scale(&features);
        for idx in [0usize, 1, 2, 3, 4, 5, 6, 8, 10, 11] {
            assert_eq!(scaled[idx], raw[idx]);
        }
    }

    #[test]
    fn test_zero_features_stay_zero() {
        let features = FeatureSet {
            year_birth: 0,
            education: 0,
            complain: 0,
            buys_on_campaign: 0,
            purchases_with_discount: 0,
            preference: 0,
            is_client_since: 0,
            is_buying: 0,
            family_size: 1,
            is_kids: 0,
            amount_spent_per_person: 0,
            spent_vs_income: 0,
            drinks: 0,
        };
        let scaled = FeatureWeights::default().scale(&features);
        assert_eq!(scaled[7], 0.0);
        assert_eq!(scaled[12], 0.0);
    }
}
