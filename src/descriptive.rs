//! Descriptive statistics of a single sample.
//!
//! Thin wrappers over [`statrs::statistics::Statistics`] that validate sample sizes up front, so a
//! too-short sample is reported as a [`DomainError`] instead of silently becoming `NaN`. Variances
//! and standard deviations use Bessel's correction (divide by `n - 1`).

use crate::error::Result;
use crate::testing::utils::{require_len, to_f64_sample};
use single_utilities::traits::FloatOps;
use statrs::statistics::Statistics;

/// Location and spread of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    /// Bessel-corrected sample variance
    pub variance: f64,
    /// Bessel-corrected sample standard deviation
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / sqrt(n)`
    pub sem: f64,
}

pub fn mean<T>(sample: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    require_len("mean", sample.len(), 1)?;
    Ok(to_f64_sample(sample)?.mean())
}

pub fn variance<T>(sample: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    require_len("sample variance", sample.len(), 2)?;
    Ok(to_f64_sample(sample)?.variance())
}

pub fn std_dev<T>(sample: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    require_len("sample standard deviation", sample.len(), 2)?;
    Ok(to_f64_sample(sample)?.std_dev())
}

/// Standard error of the mean.
pub fn sem<T>(sample: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    Ok(summarize(sample)?.sem)
}

/// Compute every field of [`Summary`] in one pass over the converted sample.
pub fn summarize<T>(sample: &[T]) -> Result<Summary>
where
    T: FloatOps,
{
    require_len("summary", sample.len(), 2)?;
    let values = to_f64_sample(sample)?;
    let n = values.len();
    let variance = values.iter().variance();
    let std_dev = variance.sqrt();

    Ok(Summary {
        n,
        mean: values.iter().mean(),
        variance,
        std_dev,
        sem: std_dev / (n as f64).sqrt(),
    })
}
