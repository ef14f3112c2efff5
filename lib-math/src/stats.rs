use crate::*;

/// Smallest and largest value of a series.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds
{
    pub min: f64,
    pub max: f64,
}

impl Bounds
{
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Distance between the two bounds.
    /// 
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Finds the bounds of a series, or `None` when the series is empty. A single NaN anywhere in
    /// the series makes both bounds NaN.
    /// 
    pub fn of(values: &[f64]) -> Option<Bounds> {
        let first = *values.first()?;
        let mut bounds = Bounds::new(first, first);
        for &value in values {
            if value.is_nan() {
                return Some(Bounds::new(f64::NAN, f64::NAN));
            }
            bounds.min = libm::fmin(bounds.min, value);
            bounds.max = libm::fmax(bounds.max, value);
        }
        Some(bounds)
    }
}

/// Arithmetic mean of a series, `None` when the series is empty.
/// 
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Population standard deviation (i.e. divided by `n`, not `n - 1`) of a series, `None` when the
/// series is empty.
/// 
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let squared: f64 = values.iter()
        .map(|value| (value - mean) * (value - mean))
        .sum();
    Some(libm::sqrt(squared / values.len() as f64))
}

/// Coefficient of variation in percent, i.e. the standard deviation relative to the mean.
/// 
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    percent_of(std_dev, mean)
}

/// Differences between consecutive values, `values[i + 1] - values[i]`. Yields `n - 1` items, so
/// nothing at all for series shorter than two.
/// 
pub fn differences(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.windows(2).map(|pair| pair[1] - pair[0])
}
