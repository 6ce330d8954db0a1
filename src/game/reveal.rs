//! Staggered reveal timing
//!
//! Evaluation itself is atomic and immediate; this maps elapsed wall time to
//! how many cells of a submitted row should be visible, one cell per delay
//! unit from left to right. Purely presentational: the game state never
//! consults it, so dropping the animation cannot change an outcome.

use crate::core::WORD_LENGTH;
use std::time::Duration;

/// Per-cell reveal delay used by the TUI
pub const DEFAULT_REVEAL_UNIT: Duration = Duration::from_millis(300);

/// Elapsed-time to visible-cell-count mapping for one submitted row
///
/// Cell `i` becomes visible once `elapsed >= i × unit`, so the first cell
/// shows instantly and the full row is visible after
/// `(WORD_LENGTH - 1) × unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimeline {
    unit: Duration,
}

impl RevealTimeline {
    /// Timeline with the given per-cell delay
    #[must_use]
    pub const fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// Number of cells visible after `elapsed`, in `1..=WORD_LENGTH`
    #[must_use]
    pub fn visible_cells(&self, elapsed: Duration) -> usize {
        if self.unit.is_zero() {
            return WORD_LENGTH;
        }
        let steps = (elapsed.as_nanos() / self.unit.as_nanos()) as usize;
        (steps + 1).min(WORD_LENGTH)
    }

    /// Whether every cell of the row is visible
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.visible_cells(elapsed) == WORD_LENGTH
    }

    /// Time until the last cell becomes visible
    #[must_use]
    pub fn total(&self) -> Duration {
        self.unit * (WORD_LENGTH as u32 - 1)
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Duration = Duration::from_millis(300);

    #[test]
    fn first_cell_is_visible_immediately() {
        let timeline = RevealTimeline::new(UNIT);
        assert_eq!(timeline.visible_cells(Duration::ZERO), 1);
        assert!(!timeline.is_complete(Duration::ZERO));
    }

    #[test]
    fn each_cell_appears_at_its_position_times_unit() {
        let timeline = RevealTimeline::new(UNIT);
        assert_eq!(timeline.visible_cells(Duration::from_millis(299)), 1);
        assert_eq!(timeline.visible_cells(Duration::from_millis(300)), 2);
        assert_eq!(timeline.visible_cells(Duration::from_millis(899)), 3);
        assert_eq!(timeline.visible_cells(Duration::from_millis(900)), 4);
        assert_eq!(timeline.visible_cells(Duration::from_millis(1200)), 5);
    }

    #[test]
    fn visible_count_is_monotone_and_capped() {
        let timeline = RevealTimeline::new(UNIT);
        let mut last = 0;
        for ms in (0..3000).step_by(50) {
            let visible = timeline.visible_cells(Duration::from_millis(ms));
            assert!(visible >= last);
            assert!(visible <= WORD_LENGTH);
            last = visible;
        }
        assert_eq!(last, WORD_LENGTH);
    }

    #[test]
    fn completion_matches_total() {
        let timeline = RevealTimeline::new(UNIT);
        assert_eq!(timeline.total(), Duration::from_millis(1200));
        assert!(!timeline.is_complete(Duration::from_millis(1199)));
        assert!(timeline.is_complete(timeline.total()));
    }

    #[test]
    fn zero_unit_reveals_everything_at_once() {
        let timeline = RevealTimeline::new(Duration::ZERO);
        assert_eq!(timeline.visible_cells(Duration::ZERO), WORD_LENGTH);
        assert!(timeline.is_complete(Duration::ZERO));
    }
}
