//! Validation Error Types

use thiserror::Error;

/// Errors during record validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Join date does not parse as DD-MM-YYYY
    #[error("join date '{value}' is not a valid DD-MM-YYYY date")]
    InvalidDate { value: String },

    /// Categorical value outside the fixed vocabulary
    #[error("unknown {field} value '{value}'")]
    UnknownCategory {
        field: &'static str,
        value: String,
    },

    /// Campaign or complaint flag outside {0, 1}
    #[error("{field} flag must be 0 or 1, got {value}")]
    InvalidFlag { field: &'static str, value: u8 },

    /// Income is absent, so spend-to-income is undefined
    #[error("income is missing")]
    MissingIncome,

    /// Income must be positive for ratio features
    #[error("income must be positive, got {income}")]
    NonPositiveIncome { income: f64 },

    /// Income beyond the outlier ceiling on a single prediction
    #[error("income {income} exceeds the outlier ceiling of {ceiling}")]
    IncomeOutlier { income: f64, ceiling: f64 },

    /// Customer has never purchased through any channel
    #[error("customer has no purchases in any channel")]
    NoPurchases,

    /// Discounted purchases meet or exceed total purchases
    #[error("deals purchases ({deals}) must be below total purchases ({total})")]
    ExcessiveDiscounts { deals: u32, total: u32 },
}
