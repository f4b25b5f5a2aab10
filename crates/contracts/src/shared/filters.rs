use serde::{Deserialize, Serialize};

/// Business types served by the aggregation API, in display order.
pub const BUSINESS_TYPES: &[&str] = &["salon", "cafe", "restaurant", "retail", "pharmacy"];

fn default_business_type() -> String {
    BUSINESS_TYPES[0].to_string()
}

/// The currently selected filter dimensions for a dashboard session.
///
/// This is the single source of truth behind every insights query. Optional
/// dimensions that are `None` are omitted from outgoing query strings
/// entirely, never sent as empty strings; the server distinguishes
/// "unfiltered" from "filtered to empty". Serialization goes through
/// `serde_qs`, so the key order is the declaration order below and stays
/// stable across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(rename = "type", default = "default_business_type")]
    pub business_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub policy_type: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            business_type: default_business_type(),
            province: None,
            city: None,
            year: None,
            policy_type: None,
        }
    }
}

/// One field of a [`FilterPatch`]: leave the dimension alone, clear it, or
/// replace it. `Clear` models the source UI's explicit "All ..." choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T: Clone> Patch<T> {
    fn apply_to(&self, current: &Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current.clone(),
            Patch::Clear => None,
            Patch::Set(value) => Some(value.clone()),
        }
    }
}

/// A partial update to a [`FilterState`]. Unset fields merge the existing
/// value. Construct with struct-update syntax:
///
/// ```rust
/// use contracts::shared::filters::{FilterPatch, Patch};
/// let patch = FilterPatch {
///     province: Patch::Set("Ontario".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub business_type: Option<String>,
    pub province: Patch<String>,
    pub city: Patch<String>,
    pub year: Patch<i32>,
    pub policy_type: Patch<String>,
}

impl FilterState {
    /// Apply a partial update, returning the resulting state. The receiver
    /// is untouched; the store swaps the whole object on success.
    pub fn apply(&self, patch: &FilterPatch) -> FilterState {
        FilterState {
            business_type: patch
                .business_type
                .clone()
                .unwrap_or_else(|| self.business_type.clone()),
            province: patch.province.apply_to(&self.province),
            city: patch.city.apply_to(&self.city),
            year: patch.year.apply_to(&self.year),
            policy_type: patch.policy_type.apply_to(&self.policy_type),
        }
    }

    /// Serialize into an insights query string, e.g.
    /// `type=salon&province=Ontario`. Absent dimensions are omitted.
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    /// Parse filters back out of a URL query string (without the leading
    /// `?`). Unknown keys are ignored; a missing `type` falls back to the
    /// default business type.
    pub fn from_query_string(query: &str) -> FilterState {
        serde_qs::from_str(query).unwrap_or_default()
    }

    /// Number of optional dimensions currently set, for the filter bar badge.
    pub fn active_filter_count(&self) -> usize {
        [
            self.province.is_some(),
            self.city.is_some(),
            self.year.is_some(),
            self.policy_type.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Forecasting needs a concrete city, province and target year.
    pub fn has_forecast_dimensions(&self) -> bool {
        self.city.is_some() && self.province.is_some() && self.year.is_some()
    }

    /// Query string for the forecast endpoint, which takes `target_year`
    /// instead of `year` and requires all three location dimensions.
    pub fn to_forecast_query(&self) -> Option<String> {
        let query = ForecastQuery {
            business_type: &self.business_type,
            city: self.city.as_deref()?,
            province: self.province.as_deref()?,
            target_year: self.year?,
        };
        serde_qs::to_string(&query).ok()
    }

    /// Query string for the should-open advice endpoint (same required
    /// dimensions as the forecast, but the year keeps its plain name).
    pub fn to_advice_query(&self) -> Option<String> {
        let query = AdviceQuery {
            business_type: &self.business_type,
            city: self.city.as_deref()?,
            province: self.province.as_deref()?,
            year: self.year?,
        };
        serde_qs::to_string(&query).ok()
    }
}

#[derive(Serialize)]
struct ForecastQuery<'a> {
    #[serde(rename = "type")]
    business_type: &'a str,
    city: &'a str,
    province: &'a str,
    target_year: i32,
}

#[derive(Serialize)]
struct AdviceQuery<'a> {
    #[serde(rename = "type")]
    business_type: &'a str,
    city: &'a str,
    province: &'a str,
    year: i32,
}

/// Select-input choices returned by `/api/filters/options` for the current
/// business type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub provinces: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub policy_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_dimensions_are_omitted() {
        let filters = FilterState {
            business_type: "salon".to_string(),
            province: Some("Ontario".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.to_query_string(), "type=salon&province=Ontario");
    }

    #[test]
    fn full_state_serializes_in_stable_order() {
        let filters = FilterState {
            business_type: "cafe".to_string(),
            province: Some("Quebec".to_string()),
            city: Some("Montreal".to_string()),
            year: Some(2023),
            policy_type: Some("Subsidy".to_string()),
        };
        assert_eq!(
            filters.to_query_string(),
            "type=cafe&province=Quebec&city=Montreal&year=2023&policy_type=Subsidy"
        );
    }

    #[test]
    fn default_state_has_only_the_business_type() {
        let filters = FilterState::default();
        assert_eq!(filters.to_query_string(), "type=salon");
        assert_eq!(filters.active_filter_count(), 0);
    }

    #[test]
    fn patch_keeps_clears_and_sets() {
        let base = FilterState {
            province: Some("Ontario".to_string()),
            city: Some("Toronto".to_string()),
            year: Some(2022),
            ..Default::default()
        };

        let next = base.apply(&FilterPatch {
            city: Patch::Clear,
            year: Patch::Set(2024),
            ..Default::default()
        });

        assert_eq!(next.province.as_deref(), Some("Ontario"));
        assert_eq!(next.city, None);
        assert_eq!(next.year, Some(2024));
        // Cleared dimensions vanish from the query string.
        assert_eq!(next.to_query_string(), "type=salon&province=Ontario&year=2024");
    }

    #[test]
    fn patch_replaces_business_type() {
        let next = FilterState::default().apply(&FilterPatch {
            business_type: Some("retail".to_string()),
            ..Default::default()
        });
        assert_eq!(next.business_type, "retail");
    }

    #[test]
    fn round_trips_through_a_query_string() {
        let filters = FilterState {
            business_type: "pharmacy".to_string(),
            city: Some("Vancouver".to_string()),
            year: Some(2021),
            ..Default::default()
        };
        let parsed = FilterState::from_query_string(&filters.to_query_string());
        assert_eq!(parsed, filters);
    }

    #[test]
    fn parsing_garbage_falls_back_to_defaults() {
        assert_eq!(FilterState::from_query_string("year=notanumber"), FilterState::default());
        assert_eq!(FilterState::from_query_string(""), FilterState::default());
    }

    #[test]
    fn forecast_query_requires_all_dimensions() {
        let mut filters = FilterState::default();
        assert_eq!(filters.to_forecast_query(), None);
        assert!(!filters.has_forecast_dimensions());

        filters.city = Some("Toronto".to_string());
        filters.province = Some("Ontario".to_string());
        filters.year = Some(2026);
        assert!(filters.has_forecast_dimensions());
        assert_eq!(
            filters.to_forecast_query().as_deref(),
            Some("type=salon&city=Toronto&province=Ontario&target_year=2026")
        );
        assert_eq!(
            filters.to_advice_query().as_deref(),
            Some("type=salon&city=Toronto&province=Ontario&year=2026")
        );
    }
}
