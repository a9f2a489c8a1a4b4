//! Category Vocabularies and Ordinal Encodings
//!
//! The trained model depends on these exact category-to-integer
//! mappings; an unknown value is rejected instead of passing through.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Education level vocabulary, ordered by encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    /// "Basic" -> 0
    Basic,
    /// "2n Cycle" -> 1
    SecondCycle,
    /// "Graduation" -> 2
    Graduation,
    /// "Master" -> 3
    Master,
    /// "PhD" -> 4
    PhD,
}

impl Education {
    /// Parse a raw dataset value, rejecting anything outside the vocabulary
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "Basic" => Ok(Education::Basic),
            "2n Cycle" => Ok(Education::SecondCycle),
            "Graduation" => Ok(Education::Graduation),
            "Master" => Ok(Education::Master),
            "PhD" => Ok(Education::PhD),
            other => Err(ValidationError::UnknownCategory {
                field: "Education",
                value: other.to_string(),
            }),
        }
    }

    /// Ordinal encoding in vocabulary order (0..=4)
    pub fn encode(self) -> u8 {
        match self {
            Education::Basic => 0,
            Education::SecondCycle => 1,
            Education::Graduation => 2,
            Education::Master => 3,
            Education::PhD => 4,
        }
    }
}

/// Marital status vocabulary
///
/// Only the household-size signal survives into the feature set:
/// Married and Together count as two adults, every other status as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Together,
    Single,
    Divorced,
    Widow,
    Alone,
    Absurd,
    Yolo,
}

impl MaritalStatus {
    /// Parse a raw dataset value, rejecting anything outside the vocabulary
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "Married" => Ok(MaritalStatus::Married),
            "Together" => Ok(MaritalStatus::Together),
            "Single" => Ok(MaritalStatus::Single),
            "Divorced" => Ok(MaritalStatus::Divorced),
            "Widow" => Ok(MaritalStatus::Widow),
            "Alone" => Ok(MaritalStatus::Alone),
            "Absurd" => Ok(MaritalStatus::Absurd),
            "YOLO" => Ok(MaritalStatus::Yolo),
            other => Err(ValidationError::UnknownCategory {
                field: "Marital_Status",
                value: other.to_string(),
            }),
        }
    }

    /// Number of adults in the household
    pub fn household_adults(self) -> u8 {
        match self {
            MaritalStatus::Married | MaritalStatus::Together => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_encoding_order() {
        let ordered = ["Basic", "2n Cycle", "Graduation", "Master", "PhD"];
        for (expected, raw) in ordered.iter().enumerate() {
            assert_eq!(Education::parse(raw).unwrap().encode(), expected as u8);
        }
    }

    #[test]
    fn test_unknown_education_rejected() {
        let err = Education::parse("Bootcamp").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownCategory { field: "Education", .. }
        ));
    }

    #[test]
    fn test_household_adults() {
        assert_eq!(MaritalStatus::parse("Married").unwrap().household_adults(), 2);
        assert_eq!(MaritalStatus::parse("Together").unwrap().household_adults(), 2);
        assert_eq!(MaritalStatus::parse("Widow").unwrap().household_adults(), 1);
        assert_eq!(MaritalStatus::parse("YOLO").unwrap().household_adults(), 1);
    }

    #[test]
    fn test_unknown_marital_status_rejected() {
        assert!(MaritalStatus::parse("Complicated").is_err());
        // Vocabulary is case-sensitive, as in the source data
        assert!(MaritalStatus::parse("married").is_err());
    }
}
