//! Incremental net range counting over a sliding window.
//!
//! The scanner maintains, for the window currently in view, the number
//! of nondecreasing subranges minus the number of nonincreasing
//! subranges. The aggregate is carried from window to window: each new
//! measurement retires the contribution of the pair leaving at the
//! trailing edge and adds the contribution of the pair entering at the
//! leading edge, so each window costs amortized constant time.

use crate::ledger::RunLedger;
use crate::step::StepKind;
use crate::traits::WindowStat;
use thiserror::Error;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Errors from configuring a window scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A window must contain at least one measurement.
    #[error("window width must be at least 1")]
    ZeroWidth,
}

/// Net range counter over a sliding window of fixed width.
///
/// Feed measurements one at a time through [`WindowStat::step`]; once
/// the window has filled, every further measurement yields the net
/// range count of the window ending at it.
///
/// # Example
/// ```rust
/// use netrange::{NetRangeScanner, WindowStat};
///
/// let mut scanner = NetRangeScanner::new(2).unwrap();
/// assert_eq!(scanner.step(1), None);
/// assert_eq!(scanner.step(3), Some(1));
/// assert_eq!(scanner.step(2), Some(-1));
/// ```
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct NetRangeScanner {
    /// Window width in measurements.
    width: usize,
    /// Run lengths compatible with ascending steps, oldest first.
    ascending: RunLedger,
    /// Run lengths compatible with descending steps, oldest first.
    descending: RunLedger,
    /// Net range count of the window currently in view.
    total: i64,
    /// Most recent measurement, paired with the next one fed in.
    prev: Option<i64>,
    /// Number of adjacent pairs consumed so far.
    pairs_seen: usize,
}

impl NetRangeScanner {
    /// Create a scanner for windows of `width` measurements.
    ///
    /// # Errors
    /// Returns [`ScanError::ZeroWidth`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self, ScanError> {
        if width == 0 {
            return Err(ScanError::ZeroWidth);
        }
        Ok(Self {
            width,
            ascending: RunLedger::with_capacity(width - 1),
            descending: RunLedger::with_capacity(width - 1),
            total: 0,
            prev: None,
            pairs_seen: 0,
        })
    }
}

impl WindowStat<i64> for NetRangeScanner {
    type Output = i64;

    fn step(&mut self, value: i64) -> Option<i64> {
        // A window of width 1 contains no adjacent pairs, so every
        // window nets to zero.
        if self.width == 1 {
            return Some(0);
        }

        let Some(prev) = self.prev.replace(value) else {
            return None;
        };
        let pair = self.pairs_seen;
        self.pairs_seen += 1;

        // The pair entering now pushes the pair at the trailing edge
        // out of the window. Both tails are read before either ledger
        // is mutated.
        if pair >= self.width - 1 {
            self.total -= self.ascending.peek_tail();
            self.total += self.descending.peek_tail();
            self.ascending.retire_oldest();
            self.descending.retire_oldest();
        }

        let kind = StepKind::classify(prev, value);
        if kind.extends_ascending() {
            self.ascending.extend_or_start();
        } else {
            self.ascending.mark_broken();
        }
        if kind.extends_descending() {
            self.descending.extend_or_start();
        } else {
            self.descending.mark_broken();
        }

        // The head holds the length of the run this pair just extended,
        // which is the number of subranges the pair opens or closes.
        match kind {
            StepKind::Ascending => self.total += self.ascending.peek_head(),
            StepKind::Descending => self.total -= self.descending.peek_head(),
            StepKind::Equal => {
                self.total +=
                    self.ascending.peek_head() - self.descending.peek_head();
            }
        }

        debug_assert!(
            self.ascending.len() < self.width
                && self.descending.len() < self.width,
            "ledger entries must fit within the window"
        );

        (pair >= self.width - 2).then_some(self.total)
    }

    fn reset(&mut self) {
        self.ascending = RunLedger::with_capacity(self.width - 1);
        self.descending = RunLedger::with_capacity(self.width - 1);
        self.total = 0;
        self.prev = None;
        self.pairs_seen = 0;
    }
}

/// Net range count of every window of `width` measurements in `values`.
///
/// Returns `values.len() - width + 1` counts in scan order, or no
/// counts at all when the sequence is shorter than one window.
///
/// # Errors
/// Returns [`ScanError::ZeroWidth`] if `width` is zero.
///
/// # Example
/// ```rust
/// use netrange::net_range_counts;
///
/// assert_eq!(net_range_counts(&[1, 3, 2], 2).unwrap(), vec![1, -1]);
/// ```
pub fn net_range_counts(
    values: &[i64],
    width: usize,
) -> Result<Vec<i64>, ScanError> {
    let mut scanner = NetRangeScanner::new(width)?;
    Ok(values.iter().filter_map(|&v| scanner.step(v)).collect())
}
