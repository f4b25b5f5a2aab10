use crate::shared::stats;
use serde::{Deserialize, Serialize};

/// One row from `/api/insights/wage-trends`.
///
/// Granularity depends on the active filters: with a year filter the server
/// groups by city (`city` set, `year` absent), otherwise by year (`year`
/// set, `city` absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WageTrendRow {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub median_wage: f64,
}

impl WageTrendRow {
    /// Grouping key for display, whichever axis the server returned.
    pub fn label(&self) -> String {
        if let Some(city) = &self.city {
            return city.clone();
        }
        match self.year {
            Some(year) => year.to_string(),
            None => "—".to_string(),
        }
    }
}

/// KPI reduction over a wage-trend row set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WageStats {
    pub average_wage: f64,
    pub highest_wage: Option<f64>,
    pub lowest_wage: Option<f64>,
    pub entries: usize,
}

impl WageStats {
    pub fn from_rows(rows: &[WageTrendRow]) -> Self {
        Self {
            average_wage: stats::average(rows, |r| r.median_wage),
            highest_wage: stats::max_of(rows, |r| r.median_wage),
            lowest_wage: stats::min_of(rows, |r| r.median_wage),
            entries: rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_year(year: i32, wage: f64) -> WageTrendRow {
        WageTrendRow {
            year: Some(year),
            median_wage: wage,
            ..Default::default()
        }
    }

    #[test]
    fn stats_over_rows() {
        let rows = vec![per_year(2021, 42_000.0), per_year(2022, 46_000.0), per_year(2023, 44_000.0)];
        let stats = WageStats::from_rows(&rows);
        assert_eq!(stats.average_wage, 44_000.0);
        assert_eq!(stats.highest_wage, Some(46_000.0));
        assert_eq!(stats.lowest_wage, Some(42_000.0));
        assert_eq!(stats.entries, 3);
    }

    #[test]
    fn stats_over_empty_rows_never_fail() {
        let stats = WageStats::from_rows(&[]);
        assert_eq!(stats.average_wage, 0.0);
        assert_eq!(stats.highest_wage, None);
        assert_eq!(stats.lowest_wage, None);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn label_prefers_the_city_axis() {
        let row = WageTrendRow {
            city: Some("Halifax".to_string()),
            median_wage: 40_000.0,
            ..Default::default()
        };
        assert_eq!(row.label(), "Halifax");
        assert_eq!(per_year(2022, 0.0).label(), "2022");
        assert_eq!(WageTrendRow::default().label(), "—");
    }

    #[test]
    fn deserializes_both_granularities() {
        let per_city: Vec<WageTrendRow> =
            serde_json::from_str(r#"[{"city":"Toronto","median_wage":48000.0}]"#).unwrap();
        assert_eq!(per_city[0].city.as_deref(), Some("Toronto"));
        assert_eq!(per_city[0].year, None);

        let per_year: Vec<WageTrendRow> =
            serde_json::from_str(r#"[{"year":2021,"median_wage":41000.0}]"#).unwrap();
        assert_eq!(per_year[0].year, Some(2021));
        assert_eq!(per_year[0].city, None);
    }
}
