//! Attribute predicate deciding which adjacent points merge.

use serde::{Deserialize, Serialize};

/// Default threshold of the connectivity operator.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Comparison applied to attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRule {
    /// Neighbors merge iff `|a - b| <= threshold`.
    #[default]
    Tolerance,
    /// Only points with `value >= threshold` take part; any two adjacent
    /// participants merge. Points under the floor are labeled 0.
    Floor,
}

/// A merge rule bound to a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttributePredicate {
    pub rule: MergeRule,
    pub threshold: f64,
}

impl Default for AttributePredicate {
    fn default() -> Self {
        Self {
            rule: MergeRule::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AttributePredicate {
    pub fn new(rule: MergeRule, threshold: f64) -> Self {
        Self { rule, threshold }
    }

    pub fn tolerance(threshold: f64) -> Self {
        Self::new(MergeRule::Tolerance, threshold)
    }

    pub fn floor(threshold: f64) -> Self {
        Self::new(MergeRule::Floor, threshold)
    }

    /// Whether a point with `value` may be labeled at all.
    #[inline]
    pub fn admits(&self, value: f64) -> bool {
        match self.rule {
            MergeRule::Tolerance => true,
            MergeRule::Floor => value >= self.threshold,
        }
    }

    /// Whether two adjacent points with values `a` and `b` merge.
    ///
    /// NaN never merges.
    #[inline]
    pub fn merges(&self, a: f64, b: f64) -> bool {
        match self.rule {
            MergeRule::Tolerance => (a - b).abs() <= self.threshold,
            MergeRule::Floor => self.admits(a) && self.admits(b),
        }
    }
}
