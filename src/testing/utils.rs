use crate::error::{DomainError, Result};
use single_utilities::traits::FloatOps;

/// Widen a sample to `f64`, rejecting values the target type cannot hold.
pub fn to_f64_sample<T>(sample: &[T]) -> Result<Vec<f64>>
where
    T: FloatOps,
{
    sample
        .iter()
        .enumerate()
        .map(|(index, value)| value.to_f64().ok_or(DomainError::NonNumeric { index }))
        .collect()
}

/// Element-wise `x - y` of two equally long samples.
pub fn paired_differences<T>(x: &[T], y: &[T]) -> Result<Vec<f64>>
where
    T: FloatOps,
{
    if x.len() != y.len() {
        return Err(DomainError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let x = to_f64_sample(x)?;
    let y = to_f64_sample(y)?;
    Ok(x.iter().zip(y.iter()).map(|(a, b)| a - b).collect())
}

pub fn require_len(what: &'static str, len: usize, required: usize) -> Result<()> {
    if len < required {
        return Err(DomainError::InsufficientSamples {
            what,
            required,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differences_are_element_wise() {
        let d = paired_differences(&[5.0, 7.0, 9.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(d, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn differences_reject_ragged_input() {
        let err = paired_differences(&[1.0f64, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, DomainError::LengthMismatch { left: 2, right: 1 });
    }
}
