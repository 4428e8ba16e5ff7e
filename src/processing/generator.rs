use crate::data::time_series::TimeSeries;
use crate::processing::polynomial;
use crate::state::case_config::{CaseConfig, CoefficientVector, DateRange};

/// Evaluate the case polynomial at every day offset in `range`.
///
/// The i-th date (zero-based) maps to `polynomial(i)`. The result always has
/// `range.day_count()` entries in date order.
pub fn generate(range: &DateRange, coefficients: &CoefficientVector) -> TimeSeries {
    let count = range.day_count();
    // `iter_days` stops before yielding `NaiveDate::MAX`, so step with `succ_opt` directly.
    let dates: Vec<_> = std::iter::successors(Some(range.start()), |d| d.succ_opt())
        .take(count)
        .collect();
    let values: Vec<f64> = (0..dates.len())
        .map(|offset| polynomial::evaluate(coefficients.as_array(), offset as f64))
        .collect();
    TimeSeries::from_parts(dates, values)
}

/// Convenience wrapper taking a whole case.
pub fn generate_case(config: &CaseConfig) -> TimeSeries {
    generate(&config.range, &config.coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    #[test]
    fn length_matches_day_count() {
        let cases = [
            (date(2023, 1, 1), date(2023, 1, 1)),
            (date(2023, 1, 1), date(2023, 12, 31)),
            (date(2024, 2, 27), date(2024, 3, 2)),
            (date(1999, 12, 30), date(2000, 1, 2)),
        ];
        for (start, end) in cases {
            let series = generate(&range(start, end), &CoefficientVector::zero());
            assert_eq!(series.len() as i64, (end - start).num_days() + 1);
            assert_eq!(series.dates().first(), Some(&start));
            assert_eq!(series.dates().last(), Some(&end));
        }
    }

    #[test]
    fn range_ending_at_max_date_keeps_last_day() {
        let max = NaiveDate::MAX;
        let series = generate(&range(max.pred_opt().unwrap(), max), &CoefficientVector::zero());
        assert_eq!(series.len(), 2);
        assert_eq!(series.dates().last(), Some(&max));

        let single = generate(&range(max, max), &CoefficientVector::zero());
        assert_eq!(single.len(), 1);
        assert!(crate::processing::statistics::aggregate(&single).is_ok());
    }

    #[test]
    fn dates_step_by_one_day() {
        let series = generate(&range(date(2024, 2, 27), date(2024, 3, 2)), &CoefficientVector::zero());
        for pair in series.dates().windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn constant_coefficients_give_constant_series() {
        let coeffs = CoefficientVector::new(&[0.0, 0.0, 0.0, 0.0, -42.5]).unwrap();
        let series = generate(&range(date(2023, 3, 1), date(2023, 3, 31)), &coeffs);
        assert!(series.values().iter().all(|&v| v == -42.5));
    }

    #[test]
    fn linear_coefficients_give_day_offsets() {
        let coeffs = CoefficientVector::new(&[0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        let series = generate(&range(date(2023, 1, 1), date(2023, 1, 5)), &coeffs);
        assert_eq!(series.values(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn quartic_term_uses_offset_not_date() {
        let coeffs = CoefficientVector::new(&[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let series = generate(&range(date(2030, 6, 1), date(2030, 6, 4)), &coeffs);
        assert_eq!(series.values(), &[0.0, 1.0, 16.0, 81.0]);
    }

    #[test]
    fn generate_case_uses_its_own_config() {
        let config = CaseConfig::from_raw(date(2023, 1, 1), date(2023, 1, 3), &[0.0, 0.0, 1.0, 0.0, 1.0]).unwrap();
        let series = generate_case(&config);
        assert_eq!(series.values(), &[1.0, 2.0, 5.0]);
    }
}
