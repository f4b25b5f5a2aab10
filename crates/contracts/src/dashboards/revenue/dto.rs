use crate::shared::stats;
use serde::{Deserialize, Serialize};

/// One aggregate row from `/api/insights/revenue-by-type-kpi`. In practice
/// the server returns a single row for the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueKpiRow {
    #[serde(default)]
    pub max_rev_cad: f64,
    #[serde(default)]
    pub min_rev_cad: f64,
    #[serde(default)]
    pub avg_rev_cad: f64,
    /// Number of distinct years contributing to the aggregate.
    #[serde(default)]
    pub years: i64,
}

/// One per-city row from `/api/insights/revenue-by-type-chart`: the best and
/// worst revenue year for the city plus its overall average. The policy
/// impact fields carry the server's textual scale ("Very High" … "None").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueCityRow {
    pub city: String,
    #[serde(default)]
    pub max_year: i32,
    #[serde(default)]
    pub max_revenue: f64,
    #[serde(default)]
    pub max_policy_impact: Option<String>,
    #[serde(default)]
    pub min_year: i32,
    #[serde(default)]
    pub min_revenue: f64,
    #[serde(default)]
    pub min_policy_impact: Option<String>,
    #[serde(default)]
    pub average_revenue: f64,
}

/// KPI reduction over the revenue aggregate rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueStats {
    pub average_revenue: f64,
    pub highest_revenue: Option<f64>,
    pub lowest_revenue: Option<f64>,
}

impl RevenueStats {
    pub fn from_rows(rows: &[RevenueKpiRow]) -> Self {
        Self {
            average_revenue: stats::average(rows, |r| r.avg_rev_cad),
            highest_revenue: stats::max_of(rows, |r| r.max_rev_cad),
            lowest_revenue: stats::min_of(rows, |r| r.min_rev_cad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_reduction() {
        let rows = vec![RevenueKpiRow {
            max_rev_cad: 250_000.0,
            min_rev_cad: 90_000.0,
            avg_rev_cad: 160_000.0,
            years: 5,
        }];
        let stats = RevenueStats::from_rows(&rows);
        assert_eq!(stats.average_revenue, 160_000.0);
        assert_eq!(stats.highest_revenue, Some(250_000.0));
        assert_eq!(stats.lowest_revenue, Some(90_000.0));
    }

    #[test]
    fn kpi_reduction_over_empty_rows() {
        let stats = RevenueStats::from_rows(&[]);
        assert_eq!(stats.average_revenue, 0.0);
        assert_eq!(stats.highest_revenue, None);
    }

    #[test]
    fn city_row_tolerates_null_policy_impact() {
        let row: RevenueCityRow = serde_json::from_str(
            r#"{"city":"Ottawa","max_year":2022,"max_revenue":180000.0,
                "max_policy_impact":null,"min_year":2019,"min_revenue":110000.0,
                "min_policy_impact":"Low","average_revenue":150000.0}"#,
        )
        .unwrap();
        assert_eq!(row.max_policy_impact, None);
        assert_eq!(row.min_policy_impact.as_deref(), Some("Low"));
    }
}
