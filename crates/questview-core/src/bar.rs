//! Bar fills for hp, rage, and collection progress.

use serde::{Deserialize, Serialize};

/// A value bar: current value against a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFill {
    /// Current value
    pub current: f64,
    /// Maximum value
    pub max: f64,
}

impl BarFill {
    /// Creates a bar fill.
    #[must_use]
    pub const fn new(current: f64, max: f64) -> Self {
        Self { current, max }
    }

    /// Creates a bar fill from item counts.
    #[must_use]
    pub fn from_counts(current: u32, max: u32) -> Self {
        Self::new(f64::from(current), f64::from(max))
    }

    /// Get normalized value (0.0 - 1.0).
    ///
    /// A non-positive maximum, or any non-finite input, yields 0.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 {
            let fraction = self.current / self.max;
            if fraction.is_finite() {
                return fraction.clamp(0.0, 1.0);
            }
        }
        0.0
    }

    /// Check if at full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max > 0.0 && self.current >= self.max
    }
}
