//! Record Validator
//!
//! Field-level checks shared by batch filtering and the single-record
//! prediction path. Batch mode drops offending rows; single mode
//! surfaces the same conditions as explicit errors.

use crate::error::ValidationError;
use crate::record::RawRecord;
use crate::vocab::{Education, MaritalStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dataset date format (e.g. "04-09-2012")
pub const JOIN_DATE_FORMAT: &str = "%d-%m-%Y";

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Income above this is treated as an outlier
    pub income_ceiling: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            income_ceiling: 200_000.0,
        }
    }
}

/// Fields a strict validation parses on the way through, handed back
/// so derivation never parses them a second time.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedFields {
    pub joined: NaiveDate,
    pub education: Education,
    pub marital: MaritalStatus,
    pub income: f64,
}

/// Validator for raw customer records
pub struct RecordValidator {
    config: ValidationConfig,
}

impl RecordValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Income ceiling used by the outlier checks
    pub fn income_ceiling(&self) -> f64 {
        self.config.income_ceiling
    }

    /// Parse the join date, DD-MM-YYYY
    pub fn parse_join_date(&self, raw: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(raw, JOIN_DATE_FORMAT).map_err(|_| {
            ValidationError::InvalidDate {
                value: raw.to_string(),
            }
        })
    }

    /// Validate a boolean-as-integer flag
    pub fn validate_flag(&self, field: &'static str, value: u8) -> Result<(), ValidationError> {
        if value > 1 {
            Err(ValidationError::InvalidFlag { field, value })
        } else {
            Ok(())
        }
    }

    /// Check the seven boolean-as-integer flag columns
    pub fn validate_flags(&self, record: &RawRecord) -> Result<(), ValidationError> {
        self.validate_flag("AcceptedCmp1", record.accepted_cmp1)?;
        self.validate_flag("AcceptedCmp2", record.accepted_cmp2)?;
        self.validate_flag("AcceptedCmp3", record.accepted_cmp3)?;
        self.validate_flag("AcceptedCmp4", record.accepted_cmp4)?;
        self.validate_flag("AcceptedCmp5", record.accepted_cmp5)?;
        self.validate_flag("Response", record.response)?;
        self.validate_flag("Complain", record.complain)?;
        Ok(())
    }

    /// Check the purchase-count invariants: at least one purchase, and
    /// strictly fewer discounted purchases than total purchases.
    pub fn validate_purchase_counts(&self, record: &RawRecord) -> Result<(), ValidationError> {
        let total = record.total_purchases();
        if total == 0 {
            return Err(ValidationError::NoPurchases);
        }
        if record.num_deals_purchases >= total {
            return Err(ValidationError::ExcessiveDiscounts {
                deals: record.num_deals_purchases,
                total,
            });
        }
        Ok(())
    }

    /// Check that income is present and positive
    pub fn validate_income(&self, record: &RawRecord) -> Result<f64, ValidationError> {
        let income = record.income.ok_or(ValidationError::MissingIncome)?;
        if income <= 0.0 {
            return Err(ValidationError::NonPositiveIncome { income });
        }
        Ok(income)
    }

    /// Check income against the outlier ceiling.
    ///
    /// Only the single-prediction path calls this; in batch mode
    /// outliers are filtered, not rejected.
    pub fn validate_income_ceiling(&self, income: f64) -> Result<(), ValidationError> {
        if income > self.config.income_ceiling {
            return Err(ValidationError::IncomeOutlier {
                income,
                ceiling: self.config.income_ceiling,
            });
        }
        Ok(())
    }

    /// Full strict validation of one record, as the prediction path
    /// requires. Returns the first failing check, or the parsed fields
    /// on success.
    pub fn validate_for_prediction(
        &self,
        record: &RawRecord,
    ) -> Result<ValidatedFields, ValidationError> {
        let joined = self.parse_join_date(&record.dt_customer)?;
        let education = Education::parse(&record.education)?;
        let marital = MaritalStatus::parse(&record.marital_status)?;
        self.validate_flags(record)?;
        self.validate_purchase_counts(record)?;
        let income = self.validate_income(record)?;
        self.validate_income_ceiling(income)?;
        Ok(ValidatedFields {
            joined,
            education,
            marital,
            income,
        })
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
