use chrono::NaiveDate;
use crate::error::CaseError;
use crate::state::case_config::{CaseConfig, COEFFICIENT_COUNT};

/// Line colors, cycled by case index.
pub const COLOR_PALETTE: [[u8; 4]; 10] = [
    [99, 110, 250, 255],  // Indigo
    [239, 85, 59, 255],   // Vermilion
    [0, 204, 150, 255],   // Teal
    [171, 99, 250, 255],  // Violet
    [255, 161, 90, 255],  // Apricot
    [25, 211, 243, 255],  // Sky
    [255, 102, 146, 255], // Rose
    [182, 232, 128, 255], // Lime
    [255, 151, 255, 255], // Orchid
    [254, 203, 82, 255],  // Amber
];

pub fn color_for_index(index: usize) -> [u8; 4] {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid date")
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 31).expect("2023-12-31 is a valid date")
}

static NEXT_CASE_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

fn next_case_id() -> u64 {
    NEXT_CASE_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
}

/// Editable sidebar state for one case. Raw and possibly invalid until
/// [`CaseInput::to_config`] validates it.
#[derive(Debug, Clone)]
pub struct CaseInput {
    /// Stable widget id; survives reordering and count changes.
    pub id: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub coefficients: [f64; COEFFICIENT_COUNT],
    pub color: [u8; 4],
    pub visible: bool,
}

impl CaseInput {
    pub fn new(index: usize) -> Self {
        Self {
            id: next_case_id(),
            start: default_start_date(),
            end: default_end_date(),
            coefficients: [0.0; COEFFICIENT_COUNT],
            color: color_for_index(index),
            visible: true,
        }
    }

    /// Snapshot this case's own inputs into a validated config.
    pub fn to_config(&self) -> Result<CaseConfig, CaseError> {
        CaseConfig::from_raw(self.start, self.end, &self.coefficients)
    }

    pub fn reset_coefficients(&mut self) {
        self.coefficients = [0.0; COEFFICIENT_COUNT];
    }

    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], self.color[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_2023() {
        let input = CaseInput::new(0);
        let config = input.to_config().unwrap();
        assert_eq!(config.range.day_count(), 365);
        assert_eq!(config.coefficients.as_array(), &[0.0; COEFFICIENT_COUNT]);
    }

    #[test]
    fn default_dates_are_exact() {
        assert_eq!(default_start_date(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(default_end_date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(CaseInput::new(0).id, CaseInput::new(0).id);
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(color_for_index(0), color_for_index(COLOR_PALETTE.len()));
        assert_ne!(color_for_index(0), color_for_index(1));
    }

    #[test]
    fn invalid_dates_fail_validation() {
        let mut input = CaseInput::new(1);
        input.end = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert!(matches!(input.to_config(), Err(CaseError::InvalidRange { .. })));
    }

    #[test]
    fn config_reflects_only_this_case() {
        let mut a = CaseInput::new(0);
        let b = CaseInput::new(1);
        a.coefficients[4] = 3.3;
        assert_eq!(a.to_config().unwrap().coefficients.as_array()[4], 3.3);
        assert_eq!(b.to_config().unwrap().coefficients.as_array()[4], 0.0);
    }
}
