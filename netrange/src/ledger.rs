//! Run-length bookkeeping for one tracked step direction.

use std::collections::VecDeque;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Ordered record of the run lengths currently live within a window,
/// for one tracked direction.
///
/// Entries are kept oldest first. The newest entry is the run being
/// built; a zero entry marks a step that broke the run. A positive
/// tail entry holds the number of steps of its run that are still
/// inside the window, so it is drained one retirement at a time before
/// it is removed.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunLedger {
    entries: VecDeque<i64>,
}

impl RunLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Create an empty ledger with room for `capacity` entries.
    ///
    /// A ledger serving a window of width `k` never holds more than
    /// `k - 1` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a step that extends this ledger's run.
    ///
    /// A positive newest entry grows by one. A zero newest entry stays
    /// in place as the broken-run marker and a fresh entry of one is
    /// started after it. An empty ledger starts its first entry at one.
    pub fn extend_or_start(&mut self) {
        match self.entries.back_mut() {
            Some(head) if *head > 0 => *head += 1,
            _ => self.entries.push_back(1),
        }
    }

    /// Record a step that breaks this ledger's run.
    ///
    /// Opens a fresh zero entry at the newest end; existing entries are
    /// never touched.
    pub fn mark_broken(&mut self) {
        self.entries.push_back(0);
    }

    /// Retire the oldest step as the window's trailing edge moves past it.
    ///
    /// A zero tail entry is removed outright. A positive tail entry is
    /// decremented and removed once it reaches zero. No-op on an empty
    /// ledger.
    pub fn retire_oldest(&mut self) {
        if let Some(tail) = self.entries.front_mut() {
            if *tail > 0 {
                *tail -= 1;
            }
            if *tail == 0 {
                self.entries.pop_front();
            }
        }
    }

    /// Length of the run currently being built, or 0 when empty.
    #[must_use]
    pub fn peek_head(&self) -> i64 {
        self.entries.back().copied().unwrap_or(0)
    }

    /// Remaining in-window length of the oldest run, or 0 when empty.
    #[must_use]
    pub fn peek_tail(&self) -> i64 {
        self.entries.front().copied().unwrap_or(0)
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
