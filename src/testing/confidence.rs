//! Student-t confidence intervals for means and differences of means.
//!
//! All intervals here have the form `estimate ± t(1 - alpha/2, dof) * standard_error`, so they are
//! symmetric about the point estimate and `lower <= upper` whenever `alpha` lies in `(0, 1)`. The
//! functions are pure: identical inputs give bit-identical intervals.

use crate::error::{DomainError, Result};
use crate::testing::utils::{paired_differences, require_len, to_f64_sample};
use single_utilities::traits::FloatOps;
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::debug;

/// Significance level of a 95% interval.
pub const DEFAULT_ALPHA: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Point estimate at the centre of the interval
    pub estimate: f64,
    /// `1 - alpha`
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Build `estimate ± t(1 - alpha/2, dof) * standard_error`.
    pub fn from_standard_error(
        estimate: f64,
        standard_error: f64,
        dof: f64,
        alpha: f64,
    ) -> Result<Self> {
        let critical_value = t_critical_value(alpha, dof)?;
        let margin = critical_value * standard_error;
        debug!(dof, standard_error, critical_value, "t interval");

        Ok(ConfidenceInterval {
            lower: estimate - margin,
            upper: estimate + margin,
            estimate,
            confidence_level: 1.0 - alpha,
        })
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Half-width of the interval
    pub fn margin(&self) -> f64 {
        self.upper - self.estimate
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        ci.bounds()
    }
}

/// Checks that `alpha` lies in the open interval `(0, 1)`. Rejects NaN.
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(DomainError::InvalidAlpha(alpha));
    }
    Ok(())
}

/// Upper `alpha/2` quantile of Student's t with `dof` degrees of freedom.
pub fn t_critical_value(alpha: f64, dof: f64) -> Result<f64> {
    validate_alpha(alpha)?;
    if !(dof > 0.0) {
        return Err(DomainError::NonPositiveDegreesOfFreedom(dof));
    }

    let dist = StudentsT::new(0.0, 1.0, dof)
        .map_err(|e| DomainError::Distribution(e.to_string()))?;
    Ok(dist.inverse_cdf(1.0 - alpha / 2.0))
}

/// Interval for `mean(x) - mean(y)` under the pooled-variance (equal variance) two-sample
/// t-procedure.
///
/// # Arguments
///
/// * `sample_x`, `sample_y` - Independent samples with at least two observations each
/// * `alpha` - Significance level in `(0, 1)`; [`DEFAULT_ALPHA`] gives a 95% interval
///
/// # Errors
///
/// [`DomainError`] when a sample has fewer than two observations or `alpha` is out of range.
pub fn independent_means_ci<T>(sample_x: &[T], sample_y: &[T], alpha: f64) -> Result<ConfidenceInterval>
where
    T: FloatOps,
{
    require_len("independent means interval", sample_x.len(), 2)?;
    require_len("independent means interval", sample_y.len(), 2)?;
    validate_alpha(alpha)?;

    let x = to_f64_sample(sample_x)?;
    let y = to_f64_sample(sample_y)?;
    let n_x = x.len() as f64;
    let n_y = y.len() as f64;

    let centre = x.iter().mean() - y.iter().mean();
    let var_x = x.iter().variance();
    let var_y = y.iter().variance();

    let dof = n_x + n_y - 2.0;
    if dof <= 0.0 {
        return Err(DomainError::NonPositiveDegreesOfFreedom(dof));
    }

    let pooled_std = (((n_x - 1.0) * var_x + (n_y - 1.0) * var_y) / dof).sqrt();
    let standard_error = pooled_std * (1.0 / n_x + 1.0 / n_y).sqrt();

    ConfidenceInterval::from_standard_error(centre, standard_error, dof, alpha)
}

/// Interval for the mean of the element-wise differences `x - y` of two matched samples.
///
/// # Errors
///
/// [`DomainError`] when the samples differ in length, hold fewer than two pairs, or `alpha` is
/// out of range.
pub fn paired_means_ci<T>(sample_x: &[T], sample_y: &[T], alpha: f64) -> Result<ConfidenceInterval>
where
    T: FloatOps,
{
    let differences = paired_differences(sample_x, sample_y)?;
    require_len("paired means interval", differences.len(), 2)?;
    validate_alpha(alpha)?;

    mean_interval(&differences, alpha)
}

/// Interval for the population mean of a single sample.
pub fn one_sample_mean_ci<T>(sample: &[T], alpha: f64) -> Result<ConfidenceInterval>
where
    T: FloatOps,
{
    require_len("one-sample mean interval", sample.len(), 2)?;
    validate_alpha(alpha)?;

    mean_interval(&to_f64_sample(sample)?, alpha)
}

fn mean_interval(values: &[f64], alpha: f64) -> Result<ConfidenceInterval> {
    let n = values.len() as f64;
    let centre = values.iter().mean();
    let standard_error = values.iter().std_dev() / n.sqrt();

    ConfidenceInterval::from_standard_error(centre, standard_error, n - 1.0, alpha)
}
