//! Client-side reductions over fetched metric rows.
//!
//! Every function here is total over empty input: the fetch layer already
//! collapsed failures to empty row sets, and nothing downstream may panic or
//! leak non-finite numbers into the presentation layer.

/// Arithmetic mean of a numeric field. Empty input yields `0.0`.
pub fn average<T>(rows: &[T], value: impl Fn(&T) -> f64) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(value).sum::<f64>() / rows.len() as f64
}

/// Smallest value of a numeric field, `None` on empty input.
pub fn min_of<T>(rows: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    let mut values = rows.iter().map(value);
    let first = values.next()?;
    Some(values.fold(first, f64::min))
}

/// Largest value of a numeric field, `None` on empty input.
pub fn max_of<T>(rows: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    let mut values = rows.iter().map(value);
    let first = values.next()?;
    Some(values.fold(first, f64::max))
}

/// Spread of a min/max pair relative to the minimum, in percent:
/// `(max - min) / min * 100`.
///
/// A zero minimum has no meaningful relative spread, so it yields `None`
/// instead of letting Infinity or NaN reach a KPI card.
pub fn variance_percent(min: f64, max: f64) -> Option<f64> {
    if min == 0.0 {
        return None;
    }
    Some((max - min) / min * 100.0)
}

/// The row with the largest count. Ties resolve to the first occurrence in
/// input order, which is the server's ordering.
pub fn most_common<T>(rows: &[T], count: impl Fn(&T) -> f64) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;
    for row in rows {
        let candidate = count(row);
        let better = match best {
            Some((_, current)) => candidate > current,
            None => true,
        };
        if better {
            best = Some((row, candidate));
        }
    }
    best.map(|(row, _)| row)
}

/// Volatility band for a variance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceBand {
    High,
    Moderate,
    Low,
}

impl VarianceBand {
    pub fn label(self) -> &'static str {
        match self {
            VarianceBand::High => "high",
            VarianceBand::Moderate => "moderate",
            VarianceBand::Low => "low",
        }
    }
}

/// Classify a variance percentage. Boundaries are inclusive on the moderate
/// side: above 50 is high, 25 through 50 is moderate, below 25 is low.
pub fn classify_variance(percent: f64) -> VarianceBand {
    if percent > 50.0 {
        VarianceBand::High
    } else if percent >= 25.0 {
        VarianceBand::Moderate
    } else {
        VarianceBand::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        value: f64,
    }

    fn rows(values: &[f64]) -> Vec<Row> {
        values.iter().map(|v| Row { value: *v }).collect()
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(&rows(&[]), |r| r.value), 0.0);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        assert_eq!(average(&rows(&[10.0, 20.0]), |r| r.value), 15.0);
    }

    #[test]
    fn min_and_max_of_empty_are_none() {
        assert_eq!(min_of(&rows(&[]), |r| r.value), None);
        assert_eq!(max_of(&rows(&[]), |r| r.value), None);
    }

    #[test]
    fn min_and_max_scan_all_rows() {
        let data = rows(&[12.0, 3.5, 40.0, 7.0]);
        assert_eq!(min_of(&data, |r| r.value), Some(3.5));
        assert_eq!(max_of(&data, |r| r.value), Some(40.0));
    }

    #[test]
    fn variance_percent_is_relative_to_the_minimum() {
        assert_eq!(variance_percent(10.0, 20.0), Some(100.0));
        assert_eq!(variance_percent(50.0, 50.0), Some(0.0));
    }

    #[test]
    fn variance_percent_with_zero_min_is_none() {
        // The source leaked Infinity here; the sentinel must be None.
        assert_eq!(variance_percent(0.0, 20.0), None);
    }

    #[test]
    fn most_common_ties_break_on_first_occurrence() {
        struct Policy {
            policy_type: &'static str,
            count: i64,
        }
        let data = [
            Policy { policy_type: "a", count: 3 },
            Policy { policy_type: "b", count: 3 },
        ];
        let winner = most_common(&data, |p| p.count as f64).unwrap();
        assert_eq!(winner.policy_type, "a");
    }

    #[test]
    fn most_common_of_empty_is_none() {
        assert!(most_common(&rows(&[]), |r| r.value).is_none());
    }

    #[test]
    fn variance_band_boundaries() {
        assert_eq!(classify_variance(24.99), VarianceBand::Low);
        assert_eq!(classify_variance(25.0), VarianceBand::Moderate);
        assert_eq!(classify_variance(50.0), VarianceBand::Moderate);
        assert_eq!(classify_variance(50.01), VarianceBand::High);
    }

    #[test]
    fn variance_band_labels() {
        assert_eq!(classify_variance(120.0).label(), "high");
        assert_eq!(classify_variance(0.0).label(), "low");
    }
}
