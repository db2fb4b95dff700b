use crate::table::{in_range, MAX, MIN, UPPER_LIMIT};
use serde::{Deserialize, Serialize};

/// Inclusive bounds a number must fall into before conversion.
/// Defaults to 1..=3999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumeralRange {
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
}

fn default_min() -> i64 {
    MIN
}

fn default_max() -> i64 {
    MAX
}

impl NumeralRange {
    #[inline]
    pub fn new(min: i64, max: i64) -> Self {
        NumeralRange { min, max }
    }

    /// lower bound actually enforced, numbers below 1 have no Roman form.
    #[inline]
    pub fn effective_min(&self) -> i64 {
        self.min.max(MIN)
    }

    /// upper bound actually enforced, never above `UPPER_LIMIT`.
    #[inline]
    pub fn effective_max(&self) -> i64 {
        self.max.min(UPPER_LIMIT)
    }

    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        in_range(n, self.effective_min(), self.effective_max())
    }
}

impl Default for NumeralRange {
    fn default() -> Self {
        NumeralRange::new(default_min(), default_max())
    }
}
