use crate::error::{DomainError, Result};
use crate::testing::confidence::{self, ConfidenceInterval};
use crate::testing::{Alternative, TTestType, TestResult};
use single_utilities::traits::FloatOps;
use statrs::distribution::{ContinuousCDF, StudentsT};

pub mod discrete;

pub mod parametric;

/// Hypothesis tests and intervals called directly on a sample.
///
/// `self` is the first sample (`x`); differences are always taken as `x - y`.
pub trait SampleStatTests<T>
where
    T: FloatOps,
{
    fn one_sample_t_test(&self, popmean: f64, alternative: Alternative) -> Result<TestResult<f64>>;

    fn t_test(
        &self,
        other: &[T],
        test_type: TTestType,
        alternative: Alternative,
    ) -> Result<TestResult<f64>>;

    fn paired_t_test(&self, other: &[T], alternative: Alternative) -> Result<TestResult<f64>>;

    fn independent_means_ci(&self, other: &[T], alpha: f64) -> Result<ConfidenceInterval>;

    fn paired_means_ci(&self, other: &[T], alpha: f64) -> Result<ConfidenceInterval>;
}

impl<T> SampleStatTests<T> for [T]
where
    T: FloatOps,
{
    fn one_sample_t_test(&self, popmean: f64, alternative: Alternative) -> Result<TestResult<f64>> {
        parametric::one_sample_t_test(self, popmean, alternative)
    }

    fn t_test(
        &self,
        other: &[T],
        test_type: TTestType,
        alternative: Alternative,
    ) -> Result<TestResult<f64>> {
        parametric::t_test(self, other, test_type, alternative)
    }

    fn paired_t_test(&self, other: &[T], alternative: Alternative) -> Result<TestResult<f64>> {
        parametric::paired_t_test(self, other, alternative)
    }

    fn independent_means_ci(&self, other: &[T], alpha: f64) -> Result<ConfidenceInterval> {
        confidence::independent_means_ci(self, other, alpha)
    }

    fn paired_means_ci(&self, other: &[T], alpha: f64) -> Result<ConfidenceInterval> {
        confidence::paired_means_ci(self, other, alpha)
    }
}

/// p-value of a t statistic with `dof` degrees of freedom.
///
/// A `NaN` statistic (zero difference over zero standard error) is treated as no evidence at all.
pub fn student_t_p_value(statistic: f64, dof: f64, alternative: Alternative) -> Result<f64> {
    if !(dof > 0.0) {
        return Err(DomainError::NonPositiveDegreesOfFreedom(dof));
    }
    let statistic = if statistic.is_nan() { 0.0 } else { statistic };

    let dist = StudentsT::new(0.0, 1.0, dof)
        .map_err(|e| DomainError::Distribution(e.to_string()))?;
    Ok(alternative.p_value(statistic, |t| dist.cdf(t)))
}
