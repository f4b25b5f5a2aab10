use crate::shared::stats;
use serde::{Deserialize, Serialize};

/// Aggregated rent and utility figures from `/api/insights/cost-breakdown`.
/// Rent is CAD per m², utilities CAD per year. The server substitutes `0`
/// for dimensions with no matching rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(default)]
    pub average_rent: f64,
    #[serde(default)]
    pub average_utility: f64,
    #[serde(default)]
    pub max_rent: f64,
    #[serde(default)]
    pub min_rent: f64,
    #[serde(default)]
    pub max_utility: f64,
    #[serde(default)]
    pub min_utility: f64,
}

impl CostBreakdown {
    /// No rent or utility extremes at all: the filter combination matched
    /// nothing, or the fetch failed and was defaulted.
    pub fn is_empty(&self) -> bool {
        self.min_rent == 0.0
            && self.max_rent == 0.0
            && self.min_utility == 0.0
            && self.max_utility == 0.0
    }

    pub fn rent_variance(&self) -> Option<f64> {
        stats::variance_percent(self.min_rent, self.max_rent)
    }

    pub fn utility_variance(&self) -> Option<f64> {
        stats::variance_percent(self.min_utility, self.max_utility)
    }

    pub fn rent_range(&self) -> f64 {
        self.max_rent - self.min_rent
    }

    pub fn utility_range(&self) -> f64 {
        self.max_utility - self.min_utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::stats::{classify_variance, VarianceBand};

    fn breakdown() -> CostBreakdown {
        CostBreakdown {
            average_rent: 30.0,
            average_utility: 6000.0,
            min_rent: 20.0,
            max_rent: 50.0,
            min_utility: 4000.0,
            max_utility: 5500.0,
        }
    }

    #[test]
    fn variance_and_range_derivations() {
        let costs = breakdown();
        assert_eq!(costs.rent_variance(), Some(150.0));
        assert_eq!(costs.utility_variance(), Some(37.5));
        assert_eq!(costs.rent_range(), 30.0);
        assert_eq!(costs.utility_range(), 1500.0);

        assert_eq!(classify_variance(costs.rent_variance().unwrap()), VarianceBand::High);
        assert_eq!(
            classify_variance(costs.utility_variance().unwrap()),
            VarianceBand::Moderate
        );
    }

    #[test]
    fn zero_minimum_yields_no_variance() {
        let costs = CostBreakdown {
            max_rent: 50.0,
            ..Default::default()
        };
        assert_eq!(costs.rent_variance(), None);
    }

    #[test]
    fn defaulted_breakdown_is_empty() {
        assert!(CostBreakdown::default().is_empty());
        assert!(!breakdown().is_empty());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let costs: CostBreakdown = serde_json::from_str(r#"{"average_rent": 25.5}"#).unwrap();
        assert_eq!(costs.average_rent, 25.5);
        assert_eq!(costs.max_rent, 0.0);
    }
}
