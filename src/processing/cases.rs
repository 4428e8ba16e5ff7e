use crate::data::time_series::TimeSeries;
use crate::error::CaseError;
use crate::processing::generator;
use crate::processing::statistics::MetricsRow;
use crate::state::case_config::CaseConfig;

/// Display label for the case at zero-based `index`.
pub fn case_label(index: usize) -> String {
    format!("Case {}", index + 1)
}

/// Generated series and metrics for one case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub label: String,
    pub series: TimeSeries,
    pub metrics: MetricsRow,
}

/// Generate and aggregate a single case.
pub fn evaluate_case(index: usize, config: &CaseConfig) -> Result<CaseOutcome, CaseError> {
    let series = generator::generate_case(config);
    let metrics = MetricsRow::compute(&series)?;
    Ok(CaseOutcome {
        label: case_label(index),
        series,
        metrics,
    })
}

/// Evaluate every case in order. A failing case yields its error in place;
/// the other cases are unaffected.
pub fn evaluate_cases(configs: &[CaseConfig]) -> Vec<Result<CaseOutcome, CaseError>> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| evaluate_case(index, config))
        .collect()
}

/// Same as [`evaluate_cases`] but validation has already happened upstream
/// and may have failed for some cases; those errors pass through untouched.
pub fn evaluate_inputs(inputs: &[Result<CaseConfig, CaseError>]) -> Vec<Result<CaseOutcome, CaseError>> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| match input {
            Ok(config) => evaluate_case(index, config),
            Err(e) => Err(e.clone()),
        })
        .collect()
}

/// Evaluate every case, rejecting the whole request on the first failure.
pub fn evaluate_all(configs: &[CaseConfig]) -> Result<Vec<CaseOutcome>, CaseError> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| evaluate_case(index, config))
        .collect()
}

/// Fan out one scoped thread per case and collect results in input order.
pub fn evaluate_cases_parallel(configs: &[CaseConfig]) -> Vec<Result<CaseOutcome, CaseError>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .enumerate()
            .map(|(index, config)| scope.spawn(move || evaluate_case(index, config)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
            .collect()
    })
}
