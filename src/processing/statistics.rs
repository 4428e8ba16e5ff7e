use crate::data::time_series::TimeSeries;
use crate::error::CaseError;

/// Summary statistics for one case's series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub sum: f64,
    pub euclidean_norm: f64,
    pub mean: f64,
    pub median: f64,
}

impl MetricsRow {
    /// Column headings, in the order returned by [`MetricsRow::values`].
    pub const COLUMNS: [&'static str; 4] = ["Sum", "Euclidean Norm", "Mean", "Median"];

    /// Reduce a series to its metrics row.
    ///
    /// Non-finite values are not filtered: they propagate into every metric.
    pub fn compute(series: &TimeSeries) -> Result<Self, CaseError> {
        let values = series.values();
        if values.is_empty() {
            return Err(CaseError::EmptySeries);
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let euclidean_norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        let mean = sum / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Ok(Self {
            sum,
            euclidean_norm,
            mean,
            median,
        })
    }

    pub fn values(&self) -> [f64; 4] {
        [self.sum, self.euclidean_norm, self.mean, self.median]
    }
}

/// Free-function form of [`MetricsRow::compute`].
pub fn aggregate(series: &TimeSeries) -> Result<MetricsRow, CaseError> {
    MetricsRow::compute(series)
}

/// Format a metric for the table: fixed precision when finite, the raw float otherwise.
pub fn format_metric(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let points = start
            .iter_days()
            .zip(values.iter().copied())
            .collect();
        TimeSeries::from_points(points).unwrap()
    }

    #[test]
    fn median_odd_length() {
        let row = aggregate(&series(&[3.0, 1.0, 2.0])).unwrap();
        assert_eq!(row.median, 2.0);
    }

    #[test]
    fn median_even_length() {
        let row = aggregate(&series(&[4.0, 1.0, 3.0, 2.0])).unwrap();
        assert_eq!(row.median, 2.5);
    }

    #[test]
    fn sum_mean_and_norm() {
        let values = [3.0, -4.0, 12.0, 0.5];
        let row = aggregate(&series(&values)).unwrap();
        assert_relative_eq!(row.sum, 11.5);
        assert_relative_eq!(row.mean, 11.5 / 4.0);
        let expected = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_relative_eq!(row.euclidean_norm, expected, max_relative = 1e-9);
    }

    #[test]
    fn norm_of_pythagorean_pair() {
        let row = aggregate(&series(&[3.0, 4.0])).unwrap();
        assert_relative_eq!(row.euclidean_norm, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn single_value() {
        let row = aggregate(&series(&[-7.0])).unwrap();
        assert_eq!(row.values(), [-7.0, 7.0, -7.0, -7.0]);
    }

    #[test]
    fn empty_series_is_an_error() {
        let empty = TimeSeries::from_points(Vec::new()).unwrap();
        assert_eq!(aggregate(&empty), Err(CaseError::EmptySeries));
    }

    #[test]
    fn infinity_propagates() {
        let row = aggregate(&series(&[1.0, f64::INFINITY, 2.0])).unwrap();
        assert!(row.sum.is_infinite());
        assert!(row.euclidean_norm.is_infinite());
        assert_eq!(row.median, 2.0);
    }

    #[test]
    fn metric_formatting() {
        assert_eq!(format_metric(2.5), "2.5000");
        assert_eq!(format_metric(f64::INFINITY), "inf");
        assert_eq!(format_metric(f64::NAN), "NaN");
    }
}
