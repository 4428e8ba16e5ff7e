use crate::error::CaseError;
use crate::state::case_config::CaseConfig;
use crate::state::case_input::CaseInput;
use crate::state::chart_state::ChartState;
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Number of cases shown on first launch.
pub const DEFAULT_CASE_COUNT: usize = 3;
/// Upper bound for the case-count input.
pub const MAX_CASES: usize = 64;

#[derive(Debug, Clone)]
pub struct AppState {
    pub cases: Vec<CaseInput>,
    pub chart: ChartState,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            cases: Vec::new(),
            chart: ChartState::new(),
            theme: Theme::default(),
        };
        state.set_case_count(DEFAULT_CASE_COUNT);
        state
    }

    /// Grow or shrink the case list to `count`, clamped to `1..=MAX_CASES`.
    /// Existing cases keep their inputs; new ones start from defaults.
    pub fn set_case_count(&mut self, count: usize) {
        let count = count.clamp(1, MAX_CASES);
        if count < self.cases.len() {
            self.cases.truncate(count);
        } else {
            while self.cases.len() < count {
                let index = self.cases.len();
                self.cases.push(CaseInput::new(index));
            }
        }
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Validate every case independently, in sidebar order.
    pub fn case_configs(&self) -> Vec<Result<CaseConfig, CaseError>> {
        self.cases.iter().map(CaseInput::to_config).collect()
    }

    /// Put every case back to its defaults, keeping the count.
    pub fn reset_cases(&mut self) {
        let count = self.cases.len();
        self.cases.clear();
        self.set_case_count(count);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
