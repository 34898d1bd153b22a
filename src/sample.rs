//! The numeric-sample abstraction consumed by the effect-size computation
//!
//! A [`Sample`] is anything that can report how many observations it holds
//! and produce their mean and variance. Implementations are provided for
//! float slices and vectors; callers with custom storage (columns of a
//! frame, ring buffers, …) can implement the trait directly.

use crate::error::{Error, Result};
use num_traits::Float;

/// A finite collection of numeric observations.
///
/// The variance normalization is the implementation's choice and must be
/// applied consistently; the built-in slice and `Vec` implementations use
/// the unbiased sample variance (n − 1 denominator). Whatever convention an
/// implementation uses is what gets pooled by [`cohen_d`](crate::cohen_d()).
pub trait Sample {
    /// Number of observations in the sample.
    fn count(&self) -> usize;

    /// Arithmetic mean of the observations.
    ///
    /// Fails on an empty sample and on samples containing values that are
    /// not finite numbers.
    fn mean(&self) -> Result<f64>;

    /// Variance of the observations.
    ///
    /// Fails when the sample is too small for the implementation's
    /// normalization (fewer than 2 observations for the built-in n − 1
    /// convention) and on non-finite values.
    fn variance(&self) -> Result<f64>;
}

/// Sum the observations, rejecting NaN and infinite values.
fn checked_sum<T: Float>(values: &[T]) -> Result<f64> {
    let mut sum = 0.0;
    for &x in values {
        let v = x.to_f64().unwrap_or(f64::NAN);
        if !v.is_finite() {
            return Err(Error::non_finite("sample"));
        }
        sum += v;
    }
    Ok(sum)
}

impl<T: Float> Sample for [T] {
    fn count(&self) -> usize {
        self.len()
    }

    fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        Ok(checked_sum(self)? / self.len() as f64)
    }

    /// Unbiased sample variance (n − 1 denominator), computed in two
    /// passes so a large common offset does not cancel away precision.
    fn variance(&self) -> Result<f64> {
        if self.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: self.len(),
            });
        }

        // mean() has already rejected non-finite observations
        let mean = self.mean()?;
        let sum_sq = self.iter().fold(0.0, |acc, &x| {
            let diff = x.to_f64().unwrap_or(f64::NAN) - mean;
            acc + diff * diff
        });

        Ok(sum_sq / (self.len() - 1) as f64)
    }
}

impl<T: Float> Sample for Vec<T> {
    fn count(&self) -> usize {
        self.as_slice().count()
    }

    fn mean(&self) -> Result<f64> {
        self.as_slice().mean()
    }

    fn variance(&self) -> Result<f64> {
        self.as_slice().variance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(data.mean().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty() {
        let data: Vec<f64> = vec![];
        match data.mean() {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("Expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn test_mean_rejects_non_finite() {
        let with_nan = vec![1.0, f64::NAN, 3.0];
        assert!(matches!(with_nan.mean(), Err(Error::InvalidInput(_))));

        let with_inf = vec![1.0, f64::INFINITY, 3.0];
        assert!(matches!(with_inf.mean(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_variance_unbiased() {
        // Squared deviations from the mean 3 sum to 10; 10 / (5 - 1) = 2.5
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(data.variance().unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_needs_two_observations() {
        let single = vec![42.0];
        match single.variance() {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected InsufficientData, got {other:?}"),
        }

        let empty: Vec<f64> = vec![];
        assert!(matches!(
            empty.variance(),
            Err(Error::InsufficientData { expected: 2, actual: 0 })
        ));
    }

    #[test]
    fn test_variance_constant_sample_is_zero() {
        // Zero variance is a legal sample statistic; rejecting it is the
        // effect-size computation's job, not the sample's
        let data = vec![5.0, 5.0, 5.0];
        assert_abs_diff_eq!(data.variance().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_large_offset() {
        // Two-pass formulation keeps precision under a large common offset
        let data = vec![1.0e9 + 1.0, 1.0e9 + 2.0, 1.0e9 + 3.0];
        assert_abs_diff_eq!(data.variance().unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_variance_rejects_non_finite() {
        let data = vec![1.0, 2.0, f64::NEG_INFINITY];
        assert!(matches!(data.variance(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_f32_observations() {
        let data: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(data.mean().unwrap(), 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(data.variance().unwrap(), 2.5, epsilon = 1e-6);

        let with_nan: Vec<f32> = vec![1.0, f32::NAN];
        assert!(matches!(with_nan.mean(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_slice_and_vec_agree() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let slice: &[f64] = &data;
        assert_eq!(data.count(), slice.count());
        assert_eq!(data.mean().unwrap(), slice.mean().unwrap());
        assert_eq!(data.variance().unwrap(), slice.variance().unwrap());
    }

    #[test]
    fn test_count() {
        let data = vec![1.0f64, 2.0, 3.0];
        assert_eq!(data.count(), 3);
        let empty: Vec<f64> = vec![];
        assert_eq!(empty.count(), 0);
    }
}
