use crate::shared::fetch::{fetch_object, fetch_rows, or_default};
use contracts::dashboards::overview::{
    BusinessCount, DashboardSummary, FootfallRow, OpenCloseTrendRow, SuccessRateRow,
};
use contracts::dashboards::revenue::RevenueKpiRow;
use contracts::dashboards::wages::WageTrendRow;
use contracts::shared::filters::FilterState;

/// Six-way category fan-out behind the overview KPIs.
///
/// The requests run concurrently and the join waits for all of them to
/// settle; each arm collapses its own failure to the category default, so
/// the summary always materializes.
pub async fn load_summary(filters: &FilterState) -> DashboardSummary {
    let query = filters.to_query_string();

    let (count, revenue, wages, failure, trends, footfall) = futures::join!(
        fetch_object::<BusinessCount>("/api/insights/business-count", &query),
        fetch_rows::<RevenueKpiRow>("/api/insights/revenue-by-type-kpi", &query),
        fetch_rows::<WageTrendRow>("/api/insights/wage-trends", &query),
        fetch_rows::<SuccessRateRow>("/api/insights/failure-rate", &query),
        fetch_rows::<OpenCloseTrendRow>("/api/insights/open-close-trends", &query),
        fetch_rows::<FootfallRow>("/api/insights/footfall-by-city", &query),
    );

    DashboardSummary::from_parts(
        or_default(count, "business-count"),
        or_default(revenue, "revenue-by-type-kpi"),
        or_default(wages, "wage-trends"),
        or_default(failure, "failure-rate"),
        or_default(trends, "open-close-trends"),
        or_default(footfall, "footfall-by-city"),
    )
}
