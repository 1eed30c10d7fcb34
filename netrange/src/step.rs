//! Classification of the step between two adjacent measurements.

use std::cmp::Ordering;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Direction of the step from one measurement to the next.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The later measurement is strictly larger.
    Ascending,
    /// The later measurement is strictly smaller.
    Descending,
    /// Both measurements are equal.
    Equal,
}

impl StepKind {
    /// Classify the step from `a` to `b`.
    ///
    /// # Example
    /// ```rust
    /// use netrange::StepKind;
    ///
    /// assert_eq!(StepKind::classify(1, 2), StepKind::Ascending);
    /// assert_eq!(StepKind::classify(2, 1), StepKind::Descending);
    /// assert_eq!(StepKind::classify(2, 2), StepKind::Equal);
    /// ```
    #[must_use]
    pub fn classify(a: i64, b: i64) -> Self {
        match a.cmp(&b) {
            Ordering::Less => StepKind::Ascending,
            Ordering::Greater => StepKind::Descending,
            Ordering::Equal => StepKind::Equal,
        }
    }

    /// Whether this step keeps an ascending run alive.
    ///
    /// An equal step extends runs on both sides.
    #[must_use]
    pub fn extends_ascending(self) -> bool {
        matches!(self, StepKind::Ascending | StepKind::Equal)
    }

    /// Whether this step keeps a descending run alive.
    #[must_use]
    pub fn extends_descending(self) -> bool {
        matches!(self, StepKind::Descending | StepKind::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_total_over_extremes() {
        assert_eq!(StepKind::classify(i64::MIN, i64::MAX), StepKind::Ascending);
        assert_eq!(StepKind::classify(i64::MAX, i64::MIN), StepKind::Descending);
        assert_eq!(StepKind::classify(i64::MIN, i64::MIN), StepKind::Equal);
        assert_eq!(StepKind::classify(0, 0), StepKind::Equal);
    }

    #[test]
    fn equal_extends_both_sides() {
        assert!(StepKind::Equal.extends_ascending());
        assert!(StepKind::Equal.extends_descending());
        assert!(StepKind::Ascending.extends_ascending());
        assert!(!StepKind::Ascending.extends_descending());
        assert!(StepKind::Descending.extends_descending());
        assert!(!StepKind::Descending.extends_ascending());
    }
}
