use chrono::NaiveDate;
use crate::error::{CaseError, CoefficientFault};

/// Number of polynomial coefficients (degree 4, highest degree first).
pub const COEFFICIENT_COUNT: usize = 5;
pub const COEFFICIENT_MIN: f64 = -100.0;
pub const COEFFICIENT_MAX: f64 = 100.0;
/// Slider granularity for coefficient input.
pub const COEFFICIENT_STEP: f64 = 0.1;

/// Inclusive calendar date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CaseError> {
        if end < start {
            return Err(CaseError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included. Never zero.
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }
}

/// Degree-4 polynomial coefficients, highest degree first.
///
/// Every coefficient is finite and lies in
/// [`COEFFICIENT_MIN`, `COEFFICIENT_MAX`]; out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientVector([f64; COEFFICIENT_COUNT]);

impl CoefficientVector {
    pub fn new(raw: &[f64]) -> Result<Self, CaseError> {
        if raw.len() != COEFFICIENT_COUNT {
            return Err(CoefficientFault::Arity {
                expected: COEFFICIENT_COUNT,
                actual: raw.len(),
            }
            .into());
        }

        let mut coeffs = [0.0; COEFFICIENT_COUNT];
        for (index, (slot, &value)) in coeffs.iter_mut().zip(raw).enumerate() {
            if !value.is_finite() {
                return Err(CoefficientFault::NonFinite { index, value }.into());
            }
            *slot = value.clamp(COEFFICIENT_MIN, COEFFICIENT_MAX);
        }
        Ok(Self(coeffs))
    }

    pub fn zero() -> Self {
        Self([0.0; COEFFICIENT_COUNT])
    }

    pub fn as_array(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.0
    }
}

impl Default for CoefficientVector {
    fn default() -> Self {
        Self::zero()
    }
}

/// One fully validated scenario, handed by value to the generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseConfig {
    pub range: DateRange,
    pub coefficients: CoefficientVector,
}

impl CaseConfig {
    pub fn new(range: DateRange, coefficients: CoefficientVector) -> Self {
        Self { range, coefficients }
    }

    /// Validate raw inputs into a config.
    pub fn from_raw(start: NaiveDate, end: NaiveDate, coefficients: &[f64]) -> Result<Self, CaseError> {
        Ok(Self::new(
            DateRange::new(start, end)?,
            CoefficientVector::new(coefficients)?,
        ))
    }
}
