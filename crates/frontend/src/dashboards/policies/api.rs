use crate::shared::fetch::{fetch_rows, or_default};
use contracts::dashboards::policies::{
    PolicyDistributionRow, PolicyImpactCityRow, PolicyImpactTrendRow,
};
use contracts::shared::filters::FilterState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyData {
    pub distribution: Vec<PolicyDistributionRow>,
    pub impact_trend: Vec<PolicyImpactTrendRow>,
    pub top_cities: Vec<PolicyImpactCityRow>,
    pub bottom_cities: Vec<PolicyImpactCityRow>,
}

/// All four endpoints settle independently; a failed one falls back to an
/// empty row set so the rest of the page still renders.
pub async fn load_policies(filters: &FilterState) -> PolicyData {
    let query = filters.to_query_string();
    let (distribution, impact_trend, top_cities, bottom_cities) = futures::join!(
        fetch_rows::<PolicyDistributionRow>("/api/insights/policy-distribution", &query),
        fetch_rows::<PolicyImpactTrendRow>("/api/insights/policy-impact-trend", &query),
        fetch_rows::<PolicyImpactCityRow>("/api/insights/maximum_impact_of_policy", &query),
        fetch_rows::<PolicyImpactCityRow>("/api/insights/minimum_impact_of_policy", &query),
    );

    PolicyData {
        distribution: or_default(distribution, "policy-distribution"),
        impact_trend: or_default(impact_trend, "policy-impact-trend"),
        top_cities: or_default(top_cities, "policy-impact-max"),
        bottom_cities: or_default(bottom_cities, "policy-impact-min"),
    }
}
