use crate::shared::fetch::fetch_rows;
use contracts::dashboards::wages::WageTrendRow;
use contracts::shared::filters::FilterState;

/// Row granularity depends on the filters: per city when a year is
/// selected, per year otherwise.
pub async fn load_wage_trends(filters: &FilterState) -> Result<Vec<WageTrendRow>, String> {
    fetch_rows("/api/insights/wage-trends", &filters.to_query_string()).await
}
