//! Feature Transformer
//!
//! Converts raw customer records into the 13-feature ordinal set.
//! Batch mode filters bad rows the way the historical fit did; single
//! mode surfaces the same conditions as validation errors so a live
//! prediction is never silently dropped.

use crate::binning::{bin4, clip, clip_upper};
use crate::TransformError;
use chrono::NaiveDate;
use record_validator::{Education, MaritalStatus, RawRecord, RecordValidator, ValidatedFields};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of features fed to the clustering model
pub const FEATURE_DIMENSION: usize = 13;

/// Model-ready feature set for one customer.
///
/// Every field is a small bounded integer; `to_vector` fixes the
/// column order the model was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Birth-year bucket, 0..=3
    pub year_birth: u8,
    /// Education encoding, 0..=4
    pub education: u8,
    /// Complaint flag, 0 or 1
    pub complain: u8,
    /// Campaign acceptances plus latest response, 0..=6
    pub buys_on_campaign: u8,
    /// Discounted-purchase share bucket, 0..=3
    pub purchases_with_discount: u8,
    /// Preferred channel: 0 catalog, 1 store, 2 web
    pub preference: u8,
    /// Customer-tenure bucket, 0..=3
    pub is_client_since: u8,
    /// Recency bucket, 0..=3
    pub is_buying: u8,
    /// Adults plus kids in the household, unclipped
    pub family_size: u8,
    /// Whether any kids or teens live at home, 0 or 1
    pub is_kids: u8,
    /// Per-person spend bucket, 0..=3
    pub amount_spent_per_person: u8,
    /// Spend as a share of income bucket, 0..=3
    pub spent_vs_income: u8,
    /// Whether the customer buys wine, 0 or 1
    pub drinks: u8,
}

impl FeatureSet {
    /// Flatten into the column order the model was fitted on
    pub fn to_vector(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.year_birth as f64,
            self.education as f64,
            self.complain as f64,
            self.buys_on_campaign as f64,
            self.purchases_with_discount as f64,
            self.preference as f64,
            self.is_client_since as f64,
            self.is_buying as f64,
            self.family_size as f64,
            self.is_kids as f64,
            self.amount_spent_per_person as f64,
            self.spent_vs_income as f64,
            self.drinks as f64,
        ]
    }
}

/// How filtering behaves during transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    /// Historical data: rows failing the quality filters are dropped
    Batch,
    /// One live record: any failing check is an error, never a drop
    Single,
}

/// Feature transformer bound to a fixed reference date.
///
/// The reference date is the maximum join date of the fitting batch
/// and must be the training-time one when scoring new customers; it
/// is persisted alongside the model artifact for that reason.
pub struct Transformer {
    reference_date: NaiveDate,
    validator: RecordValidator,
}

impl Transformer {
    /// Create a transformer with a known reference date
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            validator: RecordValidator::default(),
        }
    }

    /// Derive the reference date from a fitting batch (its maximum
    /// join date) and build a transformer around it.
    pub fn fit_batch(records: &[RawRecord]) -> Result<Self, TransformError> {
        let validator = RecordValidator::default();
        let mut reference: Option<NaiveDate> = None;
        for record in records {
            let joined = validator.parse_join_date(&record.dt_customer)?;
            reference = Some(reference.map_or(joined, |r| r.max(joined)));
        }
        let reference_date = reference.ok_or(TransformError::EmptyBatch)?;
        info!(%reference_date, "fitted reference date from batch");
        Ok(Self {
            reference_date,
            validator,
        })
    }

    /// The date customer tenure is measured against
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Transform records into feature sets plus their retained IDs.
    ///
    /// Batch mode applies the data-quality filters (missing values,
    /// zero purchases, contradictory discount counts, out-of-range
    /// flags, and the income outlier ceiling when at least one row
    /// survives it). Single mode validates strictly instead.
    pub fn transform(
        &self,
        records: &[RawRecord],
        mode: TransformMode,
    ) -> Result<(Vec<FeatureSet>, Vec<i64>), TransformError> {
        match mode {
            TransformMode::Batch => self.transform_batch(records),
            TransformMode::Single => {
                let mut features = Vec::with_capacity(records.len());
                let mut ids = Vec::with_capacity(records.len());
                for record in records {
                    features.push(self.transform_one(record)?);
                    ids.push(record.id);
                }
                Ok((features, ids))
            }
        }
    }

    /// Strictly transform one live record
    pub fn transform_one(&self, record: &RawRecord) -> Result<FeatureSet, TransformError> {
        let parsed = self.validator.validate_for_prediction(record)?;
        Ok(self.derive(record, &parsed))
    }

    fn transform_batch(
        &self,
        records: &[RawRecord],
    ) -> Result<(Vec<FeatureSet>, Vec<i64>), TransformError> {
        // Row-quality filters, silent drops as in the historical fit
        let mut kept: Vec<(&RawRecord, ValidatedFields)> = Vec::with_capacity(records.len());
        for record in records {
            let income = match self.validator.validate_income(record) {
                Ok(income) => income,
                Err(reason) => {
                    debug!(id = record.id, %reason, "dropping row");
                    continue;
                }
            };
            if let Err(reason) = self.validator.validate_purchase_counts(record) {
                debug!(id = record.id, %reason, "dropping row");
                continue;
            }
            if let Err(reason) = self.validator.validate_flags(record) {
                debug!(id = record.id, %reason, "dropping row");
                continue;
            }
            // Unparseable dates and unknown categories are schema
            // breakage, not row noise: the whole batch is rejected.
            let joined = self.validator.parse_join_date(&record.dt_customer)?;
            let education = Education::parse(&record.education)?;
            let marital = MaritalStatus::parse(&record.marital_status)?;
            kept.push((
                record,
                ValidatedFields {
                    joined,
                    education,
                    marital,
                    income,
                },
            ));
        }

        // Outlier filter, skipped entirely if it would empty the batch
        let ceiling = self.validator.income_ceiling();
        if kept.iter().any(|(_, parsed)| parsed.income <= ceiling) {
            kept.retain(|(record, parsed)| {
                let within = parsed.income <= ceiling;
                if !within {
                    debug!(id = record.id, income = parsed.income, "dropping income outlier");
                }
                within
            });
        }

        if kept.is_empty() {
            return Err(TransformError::EmptyBatch);
        }

        let mut features = Vec::with_capacity(kept.len());
        let mut ids = Vec::with_capacity(kept.len());
        for (record, parsed) in kept {
            features.push(self.derive(record, &parsed));
            ids.push(record.id);
        }

        info!(
            rows_in = records.len(),
            rows_out = features.len(),
            "transformed batch"
        );
        Ok((features, ids))
    }

    /// The derivations themselves. Callers guarantee income is
    /// positive, total purchases are nonzero, and the flag columns
    /// hold 0 or 1.
    fn derive(&self, record: &RawRecord, parsed: &ValidatedFields) -> FeatureSet {
        let total = record.total_purchases() as f64;
        let buys_on_campaign = record.campaign_flags().iter().sum::<u8>();

        let discount_share = record.num_deals_purchases as f64 / total * 100.0;
        let purchases_with_discount = bin4(clip(discount_share, 0.1, 79.0), 0.0, 20.0);

        // Arg-max over channel shares; ties resolve catalog > store > web
        let catalog = record.num_catalog_purchases;
        let store = record.num_store_purchases;
        let web = record.num_web_purchases;
        let preference = if catalog >= store && catalog >= web {
            0
        } else if store >= web {
            1
        } else {
            2
        };

        let tenure_days = (self.reference_date - parsed.joined).num_days() as f64;
        let is_client_since = bin4(clip(tenure_days, 0.1, 1099.99), 0.0, 275.0);

        let is_buying = bin4(clip(record.recency as f64, 0.1, 99.99), 0.0, 25.0);

        let kids = record.kidhome + record.teenhome;
        let family_size = parsed.marital.household_adults() + kids;
        let is_kids = u8::from(kids > 0);

        let spend = record.total_spend();
        let per_person = clip_upper(spend / family_size as f64, 699.99);
        let amount_spent_per_person = bin4(per_person, 0.0, 175.0);

        let spend_share = clip_upper(spend * 100.0 / parsed.income, 3.99);
        let spent_vs_income = bin4(spend_share, 0.0, 1.0);

        FeatureSet {
            year_birth: bin4(clip(record.year_birth as f64, 1900.0, 2000.0), 1900.0, 25.0),
            education: parsed.education.encode(),
            complain: record.complain,
            buys_on_campaign,
            purchases_with_discount,
            preference,
            is_client_since,
            is_buying,
            family_size,
            is_kids,
            amount_spent_per_person,
            spent_vs_income,
            drinks: u8::from(record.mnt_wines > 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_validator::ValidationError;

    /// The worked scenario from the product notes: born 1970,
    /// Graduation, Married, income 60000, joined one year before the
    /// reference date, only wine spend.
    fn scenario_record() -> RawRecord {
        RawRecord {
            id: 7,
            year_birth: 1970,
            education: "Graduation".to_string(),
            marital_status: "Married".to_string(),
            income: Some(60_000.0),
            kidhome: 0,
            teenhome: 0,
            dt_customer: "01-01-2014".to_string(),
            recency: 10,
            mnt_wines: 500.0,
            mnt_fruits: 0.0,
            mnt_meat_products: 0.0,
            mnt_fish_products: 0.0,
            mnt_sweet_products: 0.0,
            mnt_gold_prods: 0.0,
            num_deals_purchases: 1,
            num_web_purchases: 5,
            num_catalog_purchases: 0,
            num_store_purchases: 4,
            num_web_visits_month: 3,
            accepted_cmp3: 0,
            accepted_cmp4: 0,
            accepted_cmp5: 0,
            accepted_cmp1: 1,
            accepted_cmp2: 0,
            complain: 0,
            z_cost_contact: 3,
            z_revenue: 11,
            response: 0,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let transformer = Transformer::new(reference());
        let features = transformer.transform_one(&scenario_record()).unwrap();

        assert_eq!(features.year_birth, 2); // 1970 in [1950, 1975)
        assert_eq!(features.education, 2);
        assert_eq!(features.complain, 0);
        assert_eq!(features.buys_on_campaign, 1);
        assert_eq!(features.purchases_with_discount, 0); // 1/9*100 ~ 11.1
        assert_eq!(features.preference, 2); // web 5 beats store 4
        assert_eq!(features.is_client_since, 1); // 365 days in [275, 550)
        assert_eq!(features.is_buying, 0); // recency 10 in [0, 25)
        assert_eq!(features.family_size, 2);
        assert_eq!(features.is_kids, 0);
        assert_eq!(features.amount_spent_per_person, 1); // 250 in [175, 350)
        assert_eq!(features.spent_vs_income, 0); // 0.83 in [0, 1)
        assert_eq!(features.drinks, 1);
    }

    #[test]
    fn test_transformation_is_deterministic() {
        let transformer = Transformer::new(reference());
        let record = scenario_record();
        let first = transformer.transform_one(&record).unwrap();
        let second = transformer.transform_one(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_range_invariants() {
        let transformer = Transformer::new(reference());
        let mut record = scenario_record();
        record.recency = 400;
        record.kidhome = 2;
        record.teenhome = 2;
        record.mnt_wines = 100_000.0;
        record.accepted_cmp2 = 1;
        record.accepted_cmp3 = 1;
        record.accepted_cmp4 = 1;
        record.accepted_cmp5 = 1;
        record.response = 1;
        let f = transformer.transform_one(&record).unwrap();

        assert!(f.year_birth <= 3);
        assert!(f.education <= 4);
        assert!(f.complain <= 1);
        assert!(f.buys_on_campaign <= 6);
        assert!(f.purchases_with_discount <= 3);
        assert!(f.preference <= 2);
        assert!(f.is_client_since <= 3);
        assert!(f.is_buying <= 3);
        assert!(f.is_kids <= 1);
        assert!(f.amount_spent_per_person <= 3);
        assert!(f.spent_vs_income <= 3);
        assert!(f.drinks <= 1);
    }

    #[test]
    fn test_clip_boundaries() {
        let transformer = Transformer::new(reference());
        let mut record = scenario_record();

        record.recency = 0;
        assert_eq!(transformer.transform_one(&record).unwrap().is_buying, 0);

        record.recency = 150; // beyond the 99.99 ceiling
        assert_eq!(transformer.transform_one(&record).unwrap().is_buying, 3);
    }

    #[test]
    fn test_preference_tie_breaks() {
        let transformer = Transformer::new(reference());
        let mut record = scenario_record();

        // Exact three-way tie: catalog wins
        record.num_catalog_purchases = 3;
        record.num_store_purchases = 3;
        record.num_web_purchases = 3;
        assert_eq!(transformer.transform_one(&record).unwrap().preference, 0);

        // Store/web tie with catalog behind: store wins
        record.num_catalog_purchases = 1;
        record.num_store_purchases = 4;
        record.num_web_purchases = 4;
        assert_eq!(transformer.transform_one(&record).unwrap().preference, 1);
    }

    #[test]
    fn test_batch_filters_drop_bad_rows() {
        let transformer = Transformer::new(reference());
        let good = scenario_record();

        let mut no_purchases = scenario_record();
        no_purchases.id = 8;
        no_purchases.num_web_purchases = 0;
        no_purchases.num_catalog_purchases = 0;
        no_purchases.num_store_purchases = 0;
        no_purchases.num_deals_purchases = 0;

        let mut all_discounted = scenario_record();
        all_discounted.id = 9;
        all_discounted.num_deals_purchases = all_discounted.total_purchases();

        let mut no_income = scenario_record();
        no_income.id = 10;
        no_income.income = None;

        let batch = vec![good, no_purchases, all_discounted, no_income];
        let (features, ids) = transformer.transform(&batch, TransformMode::Batch).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn test_batch_drops_out_of_range_flags() {
        let transformer = Transformer::new(reference());
        let mut bad_flags = scenario_record();
        bad_flags.id = 11;
        bad_flags.response = 9;
        bad_flags.complain = 7;

        let batch = vec![scenario_record(), bad_flags];
        let (features, ids) = transformer.transform(&batch, TransformMode::Batch).unwrap();
        assert_eq!(ids, vec![7]);
        assert!(features
            .iter()
            .all(|f| f.buys_on_campaign <= 6 && f.complain <= 1));
    }

    #[test]
    fn test_outlier_filter_never_empties_batch() {
        let transformer = Transformer::new(reference());
        let mut rich = scenario_record();
        rich.income = Some(500_000.0);

        // Only outliers: the income filter must not run
        let (features, _) = transformer
            .transform(&[rich.clone()], TransformMode::Batch)
            .unwrap();
        assert_eq!(features.len(), 1);

        // Mixed batch: the outlier goes
        let (_, ids) = transformer
            .transform(&[rich, scenario_record()], TransformMode::Batch)
            .unwrap();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn test_single_mode_rejects_instead_of_dropping() {
        let transformer = Transformer::new(reference());

        let mut rich = scenario_record();
        rich.income = Some(500_000.0);
        assert!(matches!(
            transformer.transform_one(&rich),
            Err(TransformError::Validation(
                ValidationError::IncomeOutlier { .. }
            ))
        ));

        let mut no_purchases = scenario_record();
        no_purchases.num_web_purchases = 0;
        no_purchases.num_catalog_purchases = 0;
        no_purchases.num_store_purchases = 0;
        assert!(matches!(
            transformer.transform_one(&no_purchases),
            Err(TransformError::Validation(ValidationError::NoPurchases))
        ));
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let transformer = Transformer::new(reference());
        let mut no_income = scenario_record();
        no_income.income = None;

        let result = transformer.transform(&[no_income], TransformMode::Batch);
        assert_eq!(result.unwrap_err(), TransformError::EmptyBatch);
    }

    #[test]
    fn test_fit_batch_uses_latest_join_date() {
        let mut early = scenario_record();
        early.dt_customer = "05-03-2012".to_string();
        let late = scenario_record();

        let transformer = Transformer::fit_batch(&[early, late]).unwrap();
        assert_eq!(
            transformer.reference_date(),
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_fit_batch_rejects_bad_date() {
        let mut record = scenario_record();
        record.dt_customer = "not-a-date".to_string();
        assert!(matches!(
            Transformer::fit_batch(&[record]),
            Err(TransformError::Validation(ValidationError::InvalidDate { .. }))
        ));
    }

    #[test]
    fn test_single_joined_after_reference_lands_in_first_bucket() {
        // A customer joining after the training reference date clips
        // to the tenure floor instead of going negative.
        let transformer = Transformer::new(reference());
        let mut record = scenario_record();
        record.dt_customer = "01-06-2016".to_string();
        assert_eq!(transformer.transform_one(&record).unwrap().is_client_since, 0);
    }
}
