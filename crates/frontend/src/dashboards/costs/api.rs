use crate::shared::fetch::fetch_object;
use contracts::dashboards::costs::CostBreakdown;
use contracts::shared::filters::FilterState;

pub async fn load_cost_breakdown(filters: &FilterState) -> Result<CostBreakdown, String> {
    fetch_object("/api/insights/cost-breakdown", &filters.to_query_string()).await
}
