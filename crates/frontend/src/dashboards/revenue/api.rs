use crate::shared::fetch::{fetch_rows, or_default};
use contracts::dashboards::revenue::{RevenueCityRow, RevenueKpiRow};
use contracts::shared::filters::FilterState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueData {
    pub kpi: Vec<RevenueKpiRow>,
    pub cities: Vec<RevenueCityRow>,
}

/// Both endpoints are fetched concurrently and settle independently. A
/// failed endpoint contributes its empty default instead of failing the
/// whole page.
pub async fn load_revenue(filters: &FilterState) -> RevenueData {
    let query = filters.to_query_string();
    let (kpi, cities) = futures::join!(
        fetch_rows::<RevenueKpiRow>("/api/insights/revenue-by-type-kpi", &query),
        fetch_rows::<RevenueCityRow>("/api/insights/revenue-by-type-chart", &query),
    );

    RevenueData {
        kpi: or_default(kpi, "revenue-kpi"),
        cities: or_default(cities, "revenue-chart"),
    }
}
