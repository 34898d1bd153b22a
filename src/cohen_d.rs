//! Cohen's d effect size
//!
//! Cohen's d expresses the difference between two group means in units of
//! a pooled standard deviation, making mean differences comparable across
//! measurements with different scales.

use crate::error::{Error, Result};
use crate::sample::Sample;
use crate::types::EffectSize;
use tracing::trace;

/// Compute Cohen's d for two samples.
///
/// The statistic is
///
/// ```text
/// d = (m₁ − m₂) / √pooled_var
/// ```
///
/// where the pooled variance is the count-weighted average of the group
/// variances:
///
/// ```text
/// pooled_var = (s₁²·n₁ + s₂²·n₂) / (n₁ + n₂)
/// ```
///
/// Each group contributes its own variance as reported by its [`Sample`]
/// implementation (n − 1 normalization for the built-in slice and `Vec`
/// implementations), weighted by element count rather than by degrees of
/// freedom. A positive `d` means group 1 has the larger mean.
///
/// # Errors
///
/// - [`Error::InsufficientData`] when either sample is empty or has fewer
///   than 2 observations (no defined variance);
/// - [`Error::InvalidInput`] when a sample contains NaN or infinite
///   values;
/// - [`Error::Domain`] when the pooled variance is not positive (for
///   example two constant samples) or the result would not be a finite
///   number. Division by zero is reported, never returned as ±∞.
///
/// # Examples
///
/// ```
/// use cohens_d::cohen_d;
///
/// let group1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let group2 = vec![2.0, 3.0, 4.0, 5.0, 6.0];
///
/// let effect = cohen_d(&group1, &group2).unwrap();
/// assert!((effect.d - (-1.0 / 2.5f64.sqrt())).abs() < 1e-12);
/// ```
///
/// Samples without any spread have no standard deviation to measure the
/// mean difference against:
///
/// ```
/// use cohens_d::cohen_d;
///
/// let flat = vec![5.0, 5.0, 5.0];
/// assert!(cohen_d(&flat, &flat).is_err());
/// ```
pub fn cohen_d<G1, G2>(group1: &G1, group2: &G2) -> Result<EffectSize>
where
    G1: Sample + ?Sized,
    G2: Sample + ?Sized,
{
    let n1 = group1.count();
    let n2 = group2.count();

    let diff = group1.mean()? - group2.mean()?;

    let pooled_var =
        (group1.variance()? * n1 as f64 + group2.variance()? * n2 as f64) / (n1 + n2) as f64;
    if pooled_var <= 0.0 {
        return Err(Error::degenerate_variance(pooled_var));
    }

    let d = diff / pooled_var.sqrt();
    // Guards custom Sample implementations that report non-finite moments
    if !d.is_finite() {
        return Err(Error::Domain(format!(
            "effect size is not finite for samples of size {n1} and {n2}"
        )));
    }

    trace!(
        "Cohen's d {:.4} from samples of size {} and {} (pooled variance {:.4})",
        d,
        n1,
        n2,
        pooled_var
    );

    Ok(EffectSize::new(d, (n1, n2)))
}
