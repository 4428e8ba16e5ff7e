/// Evaluate a polynomial with coefficients ordered from highest to lowest degree
/// at `x`, using Horner's scheme.
///
/// An empty coefficient slice evaluates to zero. Overflow follows IEEE-754
/// semantics: infinities and NaN propagate unchanged.
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}
