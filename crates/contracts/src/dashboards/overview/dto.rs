use crate::dashboards::revenue::RevenueKpiRow;
use crate::dashboards::wages::WageTrendRow;
use crate::shared::stats;
use serde::{Deserialize, Serialize};

/// Body of `/api/insights/business-count`. The count is an average over the
/// filtered rows, so it arrives as a float.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessCount {
    #[serde(default)]
    pub total_count: f64,
}

/// One row from `/api/insights/failure-rate`. `success_rate` is null when
/// the filtered view has no openings to divide by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessRateRow {
    #[serde(default)]
    pub success_rate: Option<f64>,
}

/// One row from `/api/insights/open-close-trends`, grouped per year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenCloseTrendRow {
    pub year: i32,
    #[serde(default)]
    pub opened: f64,
    #[serde(default)]
    pub closed: f64,
}

/// One row from `/api/insights/footfall-by-city` (top 10 by footfall).
/// `year` is present only when no year filter was active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootfallRow {
    pub city: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub footfall: f64,
}

/// Everything the overview page shows, reduced from the six-way category
/// fan-out. Failed categories arrive here already defaulted, so the
/// reduction itself can never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub business_count: f64,
    pub average_revenue: f64,
    pub median_wage: f64,
    pub success_rate: Option<f64>,
    pub open_close_trends: Vec<OpenCloseTrendRow>,
    pub footfall_by_city: Vec<FootfallRow>,
}

impl DashboardSummary {
    pub fn from_parts(
        count: BusinessCount,
        revenue: Vec<RevenueKpiRow>,
        wages: Vec<WageTrendRow>,
        failure: Vec<SuccessRateRow>,
        trends: Vec<OpenCloseTrendRow>,
        footfall: Vec<FootfallRow>,
    ) -> Self {
        Self {
            business_count: count.total_count,
            average_revenue: stats::average(&revenue, |r| r.avg_rev_cad).round(),
            median_wage: wages.first().map(|r| r.median_wage.round()).unwrap_or(0.0),
            success_rate: failure.first().and_then(|r| r.success_rate),
            open_close_trends: trends,
            footfall_by_city: footfall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_all_six_categories() {
        let summary = DashboardSummary::from_parts(
            BusinessCount { total_count: 42.5 },
            vec![RevenueKpiRow {
                avg_rev_cad: 120_400.6,
                ..Default::default()
            }],
            vec![WageTrendRow {
                year: Some(2021),
                median_wage: 41_999.7,
                ..Default::default()
            }],
            vec![SuccessRateRow {
                success_rate: Some(87.5),
            }],
            vec![OpenCloseTrendRow {
                year: 2021,
                opened: 10.0,
                closed: 4.0,
            }],
            vec![FootfallRow {
                city: "Toronto".to_string(),
                year: None,
                footfall: 5_000.0,
            }],
        );

        assert_eq!(summary.business_count, 42.5);
        assert_eq!(summary.average_revenue, 120_401.0);
        assert_eq!(summary.median_wage, 42_000.0);
        assert_eq!(summary.success_rate, Some(87.5));
        assert_eq!(summary.open_close_trends.len(), 1);
        assert_eq!(summary.footfall_by_city.len(), 1);
    }

    #[test]
    fn failed_categories_reduce_to_defaults_without_touching_the_rest() {
        // Revenue and failure-rate "failed" and were settled to defaults;
        // the other four categories keep their real data.
        let summary = DashboardSummary::from_parts(
            BusinessCount { total_count: 7.0 },
            Vec::new(),
            vec![WageTrendRow {
                year: Some(2022),
                median_wage: 39_000.0,
                ..Default::default()
            }],
            Vec::new(),
            vec![OpenCloseTrendRow {
                year: 2022,
                opened: 3.0,
                closed: 1.0,
            }],
            vec![FootfallRow {
                city: "Calgary".to_string(),
                year: Some(2022),
                footfall: 900.0,
            }],
        );

        assert_eq!(summary.average_revenue, 0.0);
        assert_eq!(summary.success_rate, None);
        assert_eq!(summary.business_count, 7.0);
        assert_eq!(summary.median_wage, 39_000.0);
        assert_eq!(summary.open_close_trends[0].opened, 3.0);
        assert_eq!(summary.footfall_by_city[0].city, "Calgary");
    }

    #[test]
    fn null_success_rate_stays_unset() {
        let rows: Vec<SuccessRateRow> =
            serde_json::from_str(r#"[{"success_rate":null}]"#).unwrap();
        let summary =
            DashboardSummary::from_parts(BusinessCount::default(), vec![], vec![], rows, vec![], vec![]);
        assert_eq!(summary.success_rate, None);
    }
}
