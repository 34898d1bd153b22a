//! Cohen's d effect size for two numeric samples
//!
//! Cohen's d is a standardized effect size: the difference between two
//! group means divided by a pooled standard deviation. It answers "how far
//! apart are these two groups?" in a unit-free way, which makes it the
//! usual companion to a significance test when comparing two columns or
//! groups drawn from a larger dataset.
//!
//! # Definition
//!
//! For samples with means m₁ and m₂, variances s₁² and s₂², and counts n₁
//! and n₂:
//!
//! ```text
//! pooled_var = (s₁²·n₁ + s₂²·n₂) / (n₁ + n₂)
//! d          = (m₁ − m₂) / √pooled_var
//! ```
//!
//! The built-in [`Sample`] implementations (float slices and vectors) use
//! the unbiased sample variance (n − 1 denominator), and the pooled
//! variance weights each group's variance by its element count. A positive
//! `d` means the first group's mean is larger.
//!
//! # Magnitude descriptors
//!
//! |d| is conventionally read against the scale initially suggested by
//! Cohen and expanded by Sawilowsky, available as [`Magnitude`]:
//!
//! | Descriptor | \|d\| |
//! |------------|-------|
//! | Very small | 0.01 |
//! | Small | 0.20 |
//! | Medium | 0.50 |
//! | Large | 0.80 |
//! | Very large | 1.20 |
//! | Huge | 2.00 |
//!
//! # Examples
//!
//! ```
//! use cohens_d::{cohen_d, Magnitude};
//!
//! let treatment = vec![5.2, 4.9, 6.1, 5.5, 5.8];
//! let control = vec![4.1, 4.4, 3.9, 4.6, 4.2];
//!
//! let effect = cohen_d(&treatment, &control).unwrap();
//! assert!(effect.favors_group1());
//! assert_eq!(effect.magnitude(), Magnitude::Huge);
//! ```
//!
//! Degenerate inputs are reported as errors instead of NaN or infinity:
//!
//! ```
//! use cohens_d::cohen_d;
//!
//! let flat = vec![5.0, 5.0, 5.0];
//! assert!(cohen_d(&flat, &flat).is_err());
//! ```
//!
//! # Errors
//!
//! Samples must be non-empty with at least two observations each and hold
//! only finite values; the pooled variance must be positive. Violations
//! surface as [`Error`] values, so a caller always receives either a
//! finite `d` or an explicit error.

mod cohen_d;
mod error;
mod sample;
mod types;

// Re-exports
pub use cohen_d::cohen_d;
pub use error::{Error, Result};
pub use sample::Sample;
pub use types::{EffectSize, Magnitude};
