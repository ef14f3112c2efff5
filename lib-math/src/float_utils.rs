
/// Approximate equality check with a given absolute tolerance.
/// 
/// NaN never compares equal to anything, including another NaN.
/// 
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    libm::fabs(a - b) <= tol
}

/// Expresses `part` as a percentage of `whole`. No guarding against a zero `whole`, the result is
/// then infinite or NaN like any other float division.
/// 
pub fn percent_of(part: f64, whole: f64) -> f64 {
    part / whole * 100.0
}
