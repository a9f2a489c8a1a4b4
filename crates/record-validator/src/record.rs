//! Raw Customer Record Schema

use serde::{Deserialize, Serialize};

/// One row of the marketing dataset, 29 named fields.
///
/// Field names mirror the dataset headers via serde renames so the
/// same type deserializes from the historical TSV file and from the
/// prediction endpoint's JSON body. `Education`, `Marital_Status`,
/// and `Dt_Customer` stay raw strings here; the vocabularies and the
/// date format are enforced during validation, not deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Year_Birth")]
    pub year_birth: i32,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Marital_Status")]
    pub marital_status: String,
    /// Missing in some historical rows; batch mode drops those.
    #[serde(rename = "Income")]
    pub income: Option<f64>,
    #[serde(rename = "Kidhome")]
    pub kidhome: u8,
    #[serde(rename = "Teenhome")]
    pub teenhome: u8,
    /// First-purchase date, DD-MM-YYYY
    #[serde(rename = "Dt_Customer")]
    pub dt_customer: String,
    /// Days since last purchase
    #[serde(rename = "Recency")]
    pub recency: u32,
    #[serde(rename = "MntWines")]
    pub mnt_wines: f64,
    #[serde(rename = "MntFruits")]
    pub mnt_fruits: f64,
    #[serde(rename = "MntMeatProducts")]
    pub mnt_meat_products: f64,
    #[serde(rename = "MntFishProducts")]
    pub mnt_fish_products: f64,
    #[serde(rename = "MntSweetProducts")]
    pub mnt_sweet_products: f64,
    #[serde(rename = "MntGoldProds")]
    pub mnt_gold_prods: f64,
    #[serde(rename = "NumDealsPurchases")]
    pub num_deals_purchases: u32,
    #[serde(rename = "NumWebPurchases")]
    pub num_web_purchases: u32,
    #[serde(rename = "NumCatalogPurchases")]
    pub num_catalog_purchases: u32,
    #[serde(rename = "NumStorePurchases")]
    pub num_store_purchases: u32,
    #[serde(rename = "NumWebVisitsMonth")]
    pub num_web_visits_month: u32,
    #[serde(rename = "AcceptedCmp3")]
    pub accepted_cmp3: u8,
    #[serde(rename = "AcceptedCmp4")]
    pub accepted_cmp4: u8,
    #[serde(rename = "AcceptedCmp5")]
    pub accepted_cmp5: u8,
    #[serde(rename = "AcceptedCmp1")]
    pub accepted_cmp1: u8,
    #[serde(rename = "AcceptedCmp2")]
    pub accepted_cmp2: u8,
    #[serde(rename = "Complain")]
    pub complain: u8,
    /// Constant placeholder column, carries no signal
    #[serde(rename = "Z_CostContact")]
    pub z_cost_contact: i32,
    /// Constant placeholder column, carries no signal
    #[serde(rename = "Z_Revenue")]
    pub z_revenue: i32,
    /// Response to the most recent campaign
    #[serde(rename = "Response")]
    pub response: u8,
}

impl RawRecord {
    /// Purchases across the three real channels (web, catalog, store)
    pub fn total_purchases(&self) -> u32 {
        self.num_web_purchases + self.num_catalog_purchases + self.num_store_purchases
    }

    /// Monetary spend summed over the six product categories
    pub fn total_spend(&self) -> f64 {
        self.mnt_wines
            + self.mnt_fruits
            + self.mnt_meat_products
            + self.mnt_fish_products
            + self.mnt_sweet_products
            + self.mnt_gold_prods
    }

    /// Accepted-campaign flags plus the latest-campaign response
    pub fn campaign_flags(&self) -> [u8; 6] {
        [
            self.accepted_cmp1,
            self.accepted_cmp2,
            self.accepted_cmp3,
            self.accepted_cmp4,
            self.accepted_cmp5,
            self.response,
        ]
    }
}

/// A plausible historical row for use across the crate's tests.
#[cfg(test)]
pub(crate) fn sample_record() -> RawRecord {
    RawRecord {
        id: 5524,
        year_birth: 1957,
        education: "Graduation".to_string(),
        marital_status: "Single".to_string(),
        income: Some(58138.0),
        kidhome: 0,
        teenhome: 0,
        dt_customer: "04-09-2012".to_string(),
        recency: 58,
        mnt_wines: 635.0,
        mnt_fruits: 88.0,
        mnt_meat_products: 546.0,
        mnt_fish_products: 172.0,
        mnt_sweet_products: 88.0,
        mnt_gold_prods: 88.0,
        num_deals_purchases: 3,
        num_web_purchases: 8,
        num_catalog_purchases: 10,
        num_store_purchases: 4,
        num_web_visits_month: 7,
        accepted_cmp3: 0,
        accepted_cmp4: 0,
        accepted_cmp5: 0,
        accepted_cmp1: 0,
        accepted_cmp2: 0,
        complain: 0,
        z_cost_contact: 3,
        z_revenue: 11,
        response: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_purchases() {
        let record = sample_record();
        assert_eq!(record.total_purchases(), 22);
    }

    #[test]
    fn test_total_spend() {
        let record = sample_record();
        assert!((record.total_spend() - 1617.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_campaign_flags_include_response() {
        let record = sample_record();
        assert_eq!(record.campaign_flags().iter().sum::<u8>(), 1);
    }
}
