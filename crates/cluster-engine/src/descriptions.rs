//! Static Segment Descriptions
//!
//! Human-readable profiles for the eight clusters and the fixed
//! characteristic-to-cluster lookup. Curated alongside the trained
//! model, not generated by the pipeline.

use serde::{Deserialize, Serialize};

/// Description for a 1-based group number
pub fn describe(group: u8) -> Option<&'static str> {
    match group {
        1 => Some(
            "Group 1: Mixed ages and education levels. Medium-sized families with \
             children, low spend per family member and a small share of income spent \
             with us. They respond well to promotional campaigns, prefer buying with \
             a discount, have purchased recently, and buy alcoholic drinks. Discount \
             coupons and campaigns aimed at this loyal group should perform well.",
        ),
        2 => Some(
            "Group 2: Mixed ages and education levels. Medium-sized families with \
             children, low spend per family member. They do not respond to campaigns, \
             prefer discounts, and have not purchased in a long time. Discount coupons \
             and loyalty programs are the lever here; campaigns yield little.",
        ),
        3 => Some(
            "Group 3: Mixed ages and education levels. Small families without \
             children, medium-to-high spend per member and a modest share of income \
             spent with us. They respond well to campaigns, buy at full price, and \
             have purchased recently. Campaigns can expand sales; coupons are not \
             needed.",
        ),
        4 => Some(
            "Group 4: Medium-sized families with children, low spend per member and a \
             small share of income spent with us. They do not respond to campaigns \
             but prefer discounts, and have purchased recently. Offer coupons, \
             children's items, and discounted drinks rather than campaigns.",
        ),
        5 => Some(
            "Group 5: Medium-sized families with children, low spend per member. They \
             do not respond to campaigns, prefer discounts, and have been inactive \
             for a while. Coupons plus a loyalty program are the way to bring them \
             back.",
        ),
        6 => Some(
            "Group 6: Small high-income families without children, high spend per \
             member. They respond well to campaigns, buy at full price, and have \
             been inactive for a while. A loyalty program should reactivate them; \
             coupons are unnecessary.",
        ),
        7 => Some(
            "Group 7: Small high-income families without children, high spend per \
             member. They respond very well to campaigns, buying in almost all of \
             them, purchase at full price, and have bought recently. Keep them on \
             every campaign; no coupons needed.",
        ),
        8 => Some(
            "Group 8: Small high-income families without children, high spend per \
             member. They respond well to campaigns, buy at full price, and have \
             been inactive for a while. Campaigns plus a loyalty nudge should bring \
             them back; coupons are unnecessary.",
        ),
        _ => None,
    }
}

/// Fallback text for an out-of-table group
pub const NO_DESCRIPTION: &str = "No description is available for this group.";

/// Searchable segment characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Characteristic {
    /// Families with children at home
    HasKids,
    /// Customers who respond well to promotional campaigns
    RespondsToCampaigns,
    /// Customers who prefer buying with a discount
    PrefersDiscounts,
    /// Customers who have not purchased in a long time
    Inactive,
    /// Customers who buy alcoholic drinks
    Drinks,
}

impl Characteristic {
    /// The 1-based groups exhibiting this characteristic
    pub fn clusters(self) -> &'static [u8] {
        match self {
            Characteristic::HasKids => &[1, 2, 4, 5],
            Characteristic::RespondsToCampaigns => &[1, 3, 6, 7, 8],
            Characteristic::PrefersDiscounts => &[1, 2, 4, 5],
            Characteristic::Inactive => &[2, 5, 6, 8],
            Characteristic::Drinks => &[1, 2, 3, 4, 5, 6, 7, 8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_groups_described() {
        for group in 1..=8 {
            assert!(describe(group).is_some(), "group {group} lacks a description");
        }
        assert!(describe(0).is_none());
        assert!(describe(9).is_none());
    }

    #[test]
    fn test_characteristic_cluster_sets() {
        assert_eq!(Characteristic::HasKids.clusters(), &[1, 2, 4, 5]);
        assert_eq!(Characteristic::Drinks.clusters().len(), 8);
    }

    #[test]
    fn test_characteristic_kebab_case_parsing() {
        let parsed: Characteristic =
            serde_json::from_str("\"responds-to-campaigns\"").unwrap();
        assert_eq!(parsed, Characteristic::RespondsToCampaigns);
        assert!(serde_json::from_str::<Characteristic>("\"wealthy\"").is_err());
    }
}
