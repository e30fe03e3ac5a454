use crate::error::{DomainError, Result};
use crate::testing::TestResult;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// A/B test for two proportions.
///
/// Given the successes and trial sizes of groups A and B, computes the pooled two-proportion
/// z-score `|p_B - p_A| / sqrt(p(1 - p)(1/n_A + 1/n_B))` and its two-sided p-value. The
/// statistic is an absolute value, so the direction of the difference is only available through
/// `effect_size` (`p_B - p_A`).
///
/// # Errors
///
/// [`DomainError::InvalidProportion`] when a group is empty, reports more successes than trials,
/// or the pooled proportion is 0 or 1 (the variance is zero and the z-score is undefined).
pub fn two_proportions_test(
    success_a: u64,
    size_a: u64,
    success_b: u64,
    size_b: u64,
) -> Result<TestResult<f64>> {
    if size_a == 0 || size_b == 0 {
        return Err(DomainError::InvalidProportion(
            "group sizes must be positive".to_string(),
        ));
    }
    if success_a > size_a || success_b > size_b {
        return Err(DomainError::InvalidProportion(format!(
            "successes exceed trials ({success_a}/{size_a}, {success_b}/{size_b})"
        )));
    }

    let (n_a, n_b) = (size_a as f64, size_b as f64);
    let prop_a = success_a as f64 / n_a;
    let prop_b = success_b as f64 / n_b;
    let prop_pooled = (success_a + success_b) as f64 / (n_a + n_b);

    let var = prop_pooled * (1.0 - prop_pooled) * (1.0 / n_a + 1.0 / n_b);
    if var <= 0.0 {
        return Err(DomainError::InvalidProportion(format!(
            "pooled proportion {prop_pooled} leaves no variance"
        )));
    }

    let standard_error = var.sqrt();
    let zscore = (prop_b - prop_a).abs() / standard_error;

    let normal = Normal::new(0.0, 1.0).map_err(|e| DomainError::Distribution(e.to_string()))?;
    let one_side = 1.0 - normal.cdf(zscore);
    let p_value = one_side * 2.0;
    debug!(zscore, p_value, prop_pooled, "two-proportion z-test");

    Ok(TestResult::new(zscore, p_value)
        .with_standard_error(standard_error)
        .with_effect_size(prop_b - prop_a)
        .with_metadata("prop_a", prop_a)
        .with_metadata("prop_b", prop_b)
        .with_metadata("prop_pooled", prop_pooled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ab_test_matches_reference() {
        let result = two_proportions_test(486, 5000, 527, 5000).unwrap();
        assert_abs_diff_eq!(result.statistic, 1.358851, epsilon = 1e-6);
        assert_abs_diff_eq!(result.p_value, 0.174194, epsilon = 1e-6);
        assert_abs_diff_eq!(result.effect_size.unwrap(), 0.0082, epsilon = 1e-12);
    }

    #[test]
    fn statistic_ignores_direction() {
        let ab = two_proportions_test(30, 100, 45, 100).unwrap();
        let ba = two_proportions_test(45, 100, 30, 100).unwrap();
        assert_abs_diff_eq!(ab.statistic, ba.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(two_proportions_test(1, 0, 1, 10).is_err());
        assert!(two_proportions_test(11, 10, 1, 10).is_err());
        assert!(two_proportions_test(0, 10, 0, 10).is_err());
        assert!(two_proportions_test(10, 10, 20, 20).is_err());
    }
}
