use chrono::NaiveDate;
use crate::data::datetime;
use crate::error::CaseError;

/// Daily series: one value per calendar day, dates strictly increasing by one day.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build from parallel vectors the caller already knows to be contiguous.
    pub(crate) fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    /// Build from (date, value) pairs, checking that dates step by exactly one day.
    pub fn from_points(points: Vec<(NaiveDate, f64)>) -> Result<Self, CaseError> {
        let (dates, values): (Vec<NaiveDate>, Vec<f64>) = points.into_iter().unzip();
        for (index, pair) in dates.windows(2).enumerate() {
            if pair[0].succ_opt() != Some(pair[1]) {
                return Err(CaseError::NonContiguousDates { index: index + 1 });
            }
        }
        Ok(Self { dates, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// `[timestamp, value]` pairs for the line plot.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.iter()
            .map(|(date, value)| [datetime::date_to_timestamp(date), value])
            .collect()
    }
}
