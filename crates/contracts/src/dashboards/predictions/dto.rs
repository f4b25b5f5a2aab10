use serde::{Deserialize, Serialize};

/// One projected year from the linear forecast model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    #[serde(default)]
    pub predicted_openings: f64,
}

/// Body of `/api/insights/forecast-openings`. Unlike the insights endpoints
/// this one has no `data` envelope: it returns `{ city, forecast }` on
/// success and a `{ message }` body when there is not enough history to fit
/// a model, which deserializes here to an empty forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ForecastResponse {
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}

/// Averages over the three analysis years behind a recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetrics {
    #[serde(default)]
    pub avg_opened: f64,
    #[serde(default)]
    pub avg_closed: f64,
    #[serde(default)]
    pub avg_revenue: f64,
    #[serde(default)]
    pub avg_costs: f64,
    #[serde(default)]
    pub policy_score: f64,
}

/// Body of `/api/advice/should-open` (no `data` envelope). `confidence` is
/// one of "high", "medium", "low".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_metrics: RecommendationMetrics,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_successful_forecast() {
        let body = r#"{
            "city": "Toronto",
            "forecast": [
                {"year": 2026, "predicted_openings": 14.2},
                {"year": 2027, "predicted_openings": 15.1}
            ]
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.city, "Toronto");
        assert_eq!(response.forecast.len(), 2);
        assert!(!response.is_empty());
    }

    #[test]
    fn message_only_body_means_no_forecast() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"message":"Not enough historical data to forecast."}"#)
                .unwrap();
        assert!(response.is_empty());
        assert_eq!(
            response.message.as_deref(),
            Some("Not enough historical data to forecast.")
        );
    }

    #[test]
    fn parses_a_recommendation() {
        let body = r#"{
            "recommended": true,
            "confidence": "medium",
            "summary": "Salon businesses in Toronto show medium potential based on historical trends.",
            "key_metrics": {
                "avg_opened": 12.0, "avg_closed": 8.0, "avg_revenue": 150000.0,
                "avg_costs": 90000.0, "policy_score": 1.2
            },
            "reasons": ["More businesses are opening than closing."]
        }"#;
        let advice: Recommendation = serde_json::from_str(body).unwrap();
        assert!(advice.recommended);
        assert_eq!(advice.confidence, "medium");
        assert_eq!(advice.key_metrics.policy_score, 1.2);
        assert_eq!(advice.reasons.len(), 1);
    }
}
