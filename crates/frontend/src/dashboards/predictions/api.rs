use crate::shared::api_utils::request_url;
use crate::shared::fetch::{fetch_json, fetch_rows, or_default};
use contracts::dashboards::overview::OpenCloseTrendRow;
use contracts::dashboards::predictions::{ForecastResponse, Recommendation};
use contracts::shared::filters::{FilterPatch, FilterState, Patch};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionData {
    pub forecast: ForecastResponse,
    pub history: Vec<OpenCloseTrendRow>,
    /// None when the advice endpoint failed; a missing recommendation is
    /// rendered as such rather than a fabricated "no".
    pub advice: Option<Recommendation>,
}

/// Returns `None` until the filters carry the city, province and year the
/// forecast model needs. The history series deliberately drops the year
/// filter so the chart shows the full trend the forecast extrapolates from.
pub async fn load_predictions(filters: &FilterState) -> Option<PredictionData> {
    let forecast_query = filters.to_forecast_query()?;
    let advice_query = filters.to_advice_query()?;
    let history_query = filters
        .apply(&FilterPatch {
            year: Patch::Clear,
            ..Default::default()
        })
        .to_query_string();

    let forecast_url = request_url("/api/insights/forecast-openings", &forecast_query);
    let advice_url = request_url("/api/advice/should-open", &advice_query);
    let (forecast, history, advice) = futures::join!(
        fetch_json::<ForecastResponse>(&forecast_url),
        fetch_rows::<OpenCloseTrendRow>("/api/insights/open-close-trends", &history_query),
        fetch_json::<Recommendation>(&advice_url),
    );

    Some(PredictionData {
        forecast: or_default(forecast, "forecast-openings"),
        history: or_default(history, "open-close-history"),
        advice: advice.ok(),
    })
}
