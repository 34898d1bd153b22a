//! Types for effect size representation

use std::fmt;

/// A computed Cohen's d effect size.
///
/// The sign of [`d`](Self::d) follows the direction of the mean difference
/// (group 1 minus group 2); the magnitude can be read against the
/// conventional descriptor scale via [`magnitude`](Self::magnitude).
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSize {
    /// The effect size value (standardized mean difference)
    pub d: f64,
    /// Sample sizes (group1, group2)
    pub sample_sizes: (usize, usize),
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(d: f64, sample_sizes: (usize, usize)) -> Self {
        Self { d, sample_sizes }
    }

    /// Descriptor for the magnitude on the Cohen/Sawilowsky scale
    pub fn magnitude(&self) -> Magnitude {
        Magnitude::from_d(self.d)
    }

    /// Get the absolute effect size
    pub fn abs(&self) -> f64 {
        self.d.abs()
    }

    /// Check if the effect is in favor of group 1 (positive d) rather than group 2
    pub fn favors_group1(&self) -> bool {
        self.d > 0.0
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d = {:.3} ({})", self.d, self.magnitude())
    }
}

/// Magnitude descriptors for |d|, as initially suggested by Cohen and
/// expanded by Sawilowsky.
///
/// | Descriptor | \|d\| at least |
/// |------------|----------------|
/// | Very small | 0.01 |
/// | Small | 0.20 |
/// | Medium | 0.50 |
/// | Large | 0.80 |
/// | Very large | 1.20 |
/// | Huge | 2.00 |
///
/// The scale is descriptive only; it never feeds back into the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// |d| below 0.20 (the scale bottoms out at the 0.01 row)
    VerySmall,
    /// |d| in [0.20, 0.50)
    Small,
    /// |d| in [0.50, 0.80)
    Medium,
    /// |d| in [0.80, 1.20)
    Large,
    /// |d| in [1.20, 2.00)
    VeryLarge,
    /// |d| of 2.00 or more
    Huge,
}

impl Magnitude {
    /// Get the descriptor for an effect size value.
    ///
    /// The sign is ignored; boundary values belong to the row they name
    /// (|d| = 0.8 is `Large`).
    pub fn from_d(d: f64) -> Self {
        let abs_d = d.abs();

        if abs_d >= 2.0 {
            Self::Huge
        } else if abs_d >= 1.2 {
            Self::VeryLarge
        } else if abs_d >= 0.8 {
            Self::Large
        } else if abs_d >= 0.5 {
            Self::Medium
        } else if abs_d >= 0.2 {
            Self::Small
        } else {
            Self::VerySmall
        }
    }

    /// The |d| value at which this descriptor starts
    pub fn threshold(&self) -> f64 {
        match self {
            Self::VerySmall => 0.01,
            Self::Small => 0.2,
            Self::Medium => 0.5,
            Self::Large => 0.8,
            Self::VeryLarge => 1.2,
            Self::Huge => 2.0,
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VerySmall => "very small",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::VeryLarge => "very large",
            Self::Huge => "huge",
        };
        write!(f, "{}", s)
    }
}
