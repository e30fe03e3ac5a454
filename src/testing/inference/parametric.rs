//! Parametric hypothesis tests: t-tests and one-way ANOVA.
//!
//! Every t-test result carries its degrees of freedom, the standard error of the tested quantity,
//! the estimated difference as `effect_size`, and a two-sided `1 - DEFAULT_ALPHA` confidence
//! interval for it.

use crate::error::{DomainError, Result};
use crate::testing::confidence::{ConfidenceInterval, DEFAULT_ALPHA};
use crate::testing::inference::student_t_p_value;
use crate::testing::utils::{paired_differences, require_len, to_f64_sample};
use crate::testing::{Alternative, TTestType, TestResult};
use single_utilities::traits::FloatOps;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use statrs::statistics::Statistics;
use tracing::debug;

/// Test whether the mean of `sample` equals `popmean`.
///
/// # Arguments
///
/// * `sample` - At least two observations
/// * `popmean` - Hypothesised population mean
/// * `alternative` - Direction of the alternative hypothesis
///
/// # Returns
///
/// `TestResult` with `t = (mean - popmean) / sem` on `n - 1` degrees of freedom. The confidence
/// interval is for the mean itself, not for `mean - popmean`.
pub fn one_sample_t_test<T>(
    sample: &[T],
    popmean: f64,
    alternative: Alternative,
) -> Result<TestResult<f64>>
where
    T: FloatOps,
{
    require_len("one-sample t-test", sample.len(), 2)?;
    let values = to_f64_sample(sample)?;
    location_t_test(&values, popmean, alternative)
}

/// Test whether the mean of the differences `x - y` of matched samples is zero.
pub fn paired_t_test<T>(x: &[T], y: &[T], alternative: Alternative) -> Result<TestResult<f64>>
where
    T: FloatOps,
{
    let differences = paired_differences(x, y)?;
    require_len("paired t-test", differences.len(), 2)?;
    location_t_test(&differences, 0.0, alternative)
}

fn location_t_test(values: &[f64], popmean: f64, alternative: Alternative) -> Result<TestResult<f64>> {
    let n = values.len() as f64;
    let mean = values.iter().mean();
    let standard_error = values.iter().std_dev() / n.sqrt();
    let dof = n - 1.0;

    let statistic = (mean - popmean) / standard_error;
    let p_value = student_t_p_value(statistic, dof, alternative)?;
    let ci = ConfidenceInterval::from_standard_error(mean, standard_error, dof, DEFAULT_ALPHA)?;
    debug!(statistic, p_value, dof, "location t-test");

    Ok(TestResult::new(statistic, p_value)
        .with_degrees_of_freedom(dof)
        .with_standard_error(standard_error)
        .with_effect_size(mean - popmean)
        .with_confidence_interval(ci.lower, ci.upper)
        .with_metadata("mean", mean))
}

/// Perform a t-test comparing two independent samples.
///
/// This function performs either Student's t-test (assuming equal variances) or
/// Welch's t-test (allowing unequal variances) on two samples.
///
/// # Arguments
///
/// * `x` - First sample
/// * `y` - Second sample
/// * `test_type` - Type of t-test to perform
/// * `alternative` - Direction of the alternative hypothesis for `mean(x) - mean(y)`
///
/// # Returns
///
/// `TestResult` containing the t-statistic and p-value.
pub fn t_test<T>(
    x: &[T],
    y: &[T],
    test_type: TTestType,
    alternative: Alternative,
) -> Result<TestResult<f64>>
where
    T: FloatOps,
{
    require_len("two-sample t-test", x.len(), 2)?;
    require_len("two-sample t-test", y.len(), 2)?;

    let x = to_f64_sample(x)?;
    let y = to_f64_sample(y)?;
    let group_x = GroupMoments::from_sample(&x);
    let group_y = GroupMoments::from_sample(&y);
    two_sample_t_test(group_x, group_y, test_type, alternative)
}

/// Per-group mean, Bessel-corrected variance and count.
#[derive(Debug, Clone, Copy)]
struct GroupMoments {
    mean: f64,
    var: f64,
    n: f64,
}

impl GroupMoments {
    fn from_sample(values: &[f64]) -> Self {
        Self {
            mean: values.iter().mean(),
            var: values.iter().variance(),
            n: values.len() as f64,
        }
    }

    /// Moments from a sum and sum of squares; the variance is clamped at zero.
    fn from_sums(sum: f64, sum_sq: f64, n: f64) -> Self {
        Self {
            mean: sum / n,
            var: ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0),
            n,
        }
    }
}

/// Perform a two-sample t-test from precomputed sums.
///
/// Useful when only aggregates are kept: sum, sum of squares and count for each group.
/// The variance is recovered as `sum_sq - sum^2 / n`, which loses precision for data far from
/// zero; prefer [`t_test`] when the samples are at hand.
///
/// # Arguments
///
/// * `sum1`, `sum_sq1`, `n1` - Sum, sum of squares, and count for group 1
/// * `sum2`, `sum_sq2`, `n2` - Sum, sum of squares, and count for group 2
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
/// * `alternative` - Direction of the alternative hypothesis
#[allow(clippy::too_many_arguments)]
pub fn t_test_from_sums(
    sum1: f64,
    sum_sq1: f64,
    n1: f64,
    sum2: f64,
    sum_sq2: f64,
    n2: f64,
    test_type: TTestType,
    alternative: Alternative,
) -> Result<TestResult<f64>> {
    if n1 < 2.0 || n2 < 2.0 {
        return Err(DomainError::InsufficientSamples {
            what: "two-sample t-test",
            required: 2,
            actual: n1.min(n2) as usize,
        });
    }

    two_sample_t_test(
        GroupMoments::from_sums(sum1, sum_sq1, n1),
        GroupMoments::from_sums(sum2, sum_sq2, n2),
        test_type,
        alternative,
    )
}

fn two_sample_t_test(
    g1: GroupMoments,
    g2: GroupMoments,
    test_type: TTestType,
    alternative: Alternative,
) -> Result<TestResult<f64>> {
    let GroupMoments { mean: mean1, var: var1, n: n1 } = g1;
    let GroupMoments { mean: mean2, var: var2, n: n2 } = g2;
    let mean_diff = mean1 - mean2;

    let (standard_error, dof) = match test_type {
        TTestType::Student => {
            let dof = n1 + n2 - 2.0;
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / dof;
            ((pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt(), dof)
        }
        TTestType::Welch => {
            let term1 = var1 / n1;
            let term2 = var2 / n2;
            let combined_var = term1 + term2;

            // Welch-Satterthwaite equation for degrees of freedom
            let dof = combined_var * combined_var
                / (term1 * term1 / (n1 - 1.0) + term2 * term2 / (n2 - 1.0));
            (combined_var.sqrt(), dof)
        }
    };

    // Welch dof is 0/0 when both groups are constant
    let dof = if dof.is_nan() { n1 + n2 - 2.0 } else { dof };

    let statistic = mean_diff / standard_error;
    let p_value = student_t_p_value(statistic, dof, alternative)?;
    let ci = ConfidenceInterval::from_standard_error(mean_diff, standard_error, dof, DEFAULT_ALPHA)?;
    debug!(?test_type, statistic, p_value, dof, "two-sample t-test");

    Ok(TestResult::new(if statistic.is_nan() { 0.0 } else { statistic }, p_value)
        .with_degrees_of_freedom(dof)
        .with_standard_error(standard_error)
        .with_effect_size(mean_diff)
        .with_confidence_interval(ci.lower, ci.upper)
        .with_metadata("mean_x", mean1)
        .with_metadata("mean_y", mean2))
}

/// One-way analysis of variance table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaTable {
    pub ss_between: f64,
    pub ss_within: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub ms_between: f64,
    pub ms_within: f64,
    pub f_statistic: f64,
    pub p_value: f64,
}

impl AnovaTable {
    pub fn test_result(&self) -> TestResult<f64> {
        TestResult::new(self.f_statistic, self.p_value)
            .with_degrees_of_freedom(self.df_between)
            .with_metadata("df_within", self.df_within)
            .with_metadata("ss_between", self.ss_between)
            .with_metadata("ss_within", self.ss_within)
    }
}

/// Test whether all groups share one mean.
///
/// `F = MS_between / MS_within` on `(k - 1, N - k)` degrees of freedom.
pub fn one_way_anova<T>(groups: &[&[T]]) -> Result<AnovaTable>
where
    T: FloatOps,
{
    require_len("one-way ANOVA groups", groups.len(), 2)?;
    let groups = groups
        .iter()
        .map(|g| {
            require_len("one-way ANOVA group", g.len(), 1)?;
            to_f64_sample(g)
        })
        .collect::<Result<Vec<_>>>()?;

    let k = groups.len() as f64;
    let total: usize = groups.iter().map(Vec::len).sum();
    let n = total as f64;
    let df_between = k - 1.0;
    let df_within = n - k;
    if df_within <= 0.0 {
        return Err(DomainError::NonPositiveDegreesOfFreedom(df_within));
    }

    let grand_mean = groups.iter().flatten().mean();
    let (ss_between, ss_within) = groups.iter().fold((0.0, 0.0), |(between, within), g| {
        let m = g.iter().mean();
        let spread: f64 = g.iter().map(|v| (v - m) * (v - m)).sum();
        (
            between + g.len() as f64 * (m - grand_mean) * (m - grand_mean),
            within + spread,
        )
    });

    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;
    let f_statistic = match ms_between / ms_within {
        f if f.is_nan() => 0.0,
        f => f,
    };

    let dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| DomainError::Distribution(e.to_string()))?;
    let p_value = if f_statistic.is_infinite() {
        0.0
    } else {
        1.0 - dist.cdf(f_statistic)
    };
    debug!(f_statistic, p_value, df_between, df_within, "one-way ANOVA");

    Ok(AnovaTable {
        ss_between,
        ss_within,
        df_between,
        df_within,
        ms_between,
        ms_within,
        f_statistic,
        p_value,
    })
}
