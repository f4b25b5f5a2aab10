use crate::shared::stats;
use serde::{Deserialize, Serialize};

/// One row from `/api/insights/policy-distribution`, ordered by `count`
/// descending on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDistributionRow {
    pub policy_type: String,
    /// Rows carrying this policy type.
    #[serde(default)]
    pub count: i64,
    /// Distinct policy types in the group (the server's headline total).
    #[serde(default)]
    pub dist_count: i64,
}

/// One row from `/api/insights/policy-impact-trend`: average impact score
/// per year and policy type on the server's -2..3 scale. `average_impact`
/// is null when every underlying record had an unknown impact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyImpactTrendRow {
    #[serde(default)]
    pub year: i32,
    // The deployed API misspells this key; accept both.
    #[serde(alias = "policy_typr")]
    pub policy_type: String,
    #[serde(default)]
    pub average_impact: Option<f64>,
}

/// One row from `/api/insights/maximum_impact_of_policy` or
/// `minimum_impact_of_policy`: average impact score per city, top/bottom 10.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyImpactCityRow {
    pub city: String,
    #[serde(default)]
    pub impact_score: f64,
}

/// KPI reduction over the distribution and impact-trend row sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyStats {
    pub total_policies: i64,
    pub most_common_type: Option<String>,
    pub average_impact: f64,
    pub highest_impact: Option<f64>,
}

impl PolicyStats {
    pub fn from_rows(
        distribution: &[PolicyDistributionRow],
        impact: &[PolicyImpactTrendRow],
    ) -> Self {
        let impacts: Vec<f64> = impact.iter().filter_map(|r| r.average_impact).collect();
        Self {
            total_policies: distribution.iter().map(|r| r.dist_count).sum(),
            most_common_type: stats::most_common(distribution, |r| r.count as f64)
                .map(|r| r.policy_type.clone()),
            average_impact: stats::average(&impacts, |v| *v),
            highest_impact: stats::max_of(&impacts, |v| *v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(policy_type: &str, count: i64, dist_count: i64) -> PolicyDistributionRow {
        PolicyDistributionRow {
            policy_type: policy_type.to_string(),
            count,
            dist_count,
        }
    }

    fn trend(year: i32, impact: Option<f64>) -> PolicyImpactTrendRow {
        PolicyImpactTrendRow {
            year,
            policy_type: "Tax Credit".to_string(),
            average_impact: impact,
        }
    }

    #[test]
    fn stats_from_distribution_and_trend() {
        let distribution = vec![dist("Subsidy", 12, 1), dist("Tax Credit", 8, 1)];
        let impact = vec![trend(2021, Some(1.5)), trend(2022, Some(2.5)), trend(2023, None)];

        let stats = PolicyStats::from_rows(&distribution, &impact);
        assert_eq!(stats.total_policies, 2);
        assert_eq!(stats.most_common_type.as_deref(), Some("Subsidy"));
        assert_eq!(stats.average_impact, 2.0);
        assert_eq!(stats.highest_impact, Some(2.5));
    }

    #[test]
    fn tied_counts_keep_the_first_row() {
        let distribution = vec![dist("a", 3, 1), dist("b", 3, 1)];
        let stats = PolicyStats::from_rows(&distribution, &[]);
        assert_eq!(stats.most_common_type.as_deref(), Some("a"));
    }

    #[test]
    fn empty_inputs_yield_safe_zeroes() {
        let stats = PolicyStats::from_rows(&[], &[]);
        assert_eq!(stats.total_policies, 0);
        assert_eq!(stats.most_common_type, None);
        assert_eq!(stats.average_impact, 0.0);
        assert_eq!(stats.highest_impact, None);
    }

    #[test]
    fn accepts_the_misspelled_trend_key() {
        let row: PolicyImpactTrendRow =
            serde_json::from_str(r#"{"year":2022,"policy_typr":"Grant","average_impact":1.0}"#)
                .unwrap();
        assert_eq!(row.policy_type, "Grant");

        let row: PolicyImpactTrendRow =
            serde_json::from_str(r#"{"year":2022,"policy_type":"Grant","average_impact":null}"#)
                .unwrap();
        assert_eq!(row.average_impact, None);
    }
}
