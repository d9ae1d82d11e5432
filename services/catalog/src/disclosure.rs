//! Incremental disclosure controller
//!
//! Manages the visible prefix of an already filtered and sorted result list.
//! The window grows in fixed steps and is reset whenever the underlying
//! sequence changes identity.

/// Number of listings revealed initially and per step
pub const WINDOW_STEP: usize = 3;

/// A growing visible window over a result list.
///
/// Invariant: `0 <= visible <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureWindow {
    visible: usize,
    total: usize,
}

impl DisclosureWindow {
    /// Window over `total` items, initially revealing at most one step
    pub fn new(total: usize) -> Self {
        Self {
            visible: WINDOW_STEP.min(total),
            total,
        }
    }

    /// Currently revealed prefix length
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Total number of items behind the window
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether everything is already revealed
    pub fn is_exhausted(&self) -> bool {
        self.visible >= self.total
    }

    /// Reveal one more step, saturating at the total
    pub fn reveal_more(&mut self) {
        self.visible = (self.visible + WINDOW_STEP).min(self.total);
    }

    /// Restart the window over a new sequence. Must be called whenever the
    /// underlying result list changes identity, so a window position is
    /// never carried over to a stale sequence.
    pub fn reset(&mut self, total: usize) {
        *self = Self::new(total);
    }
}

impl Default for DisclosureWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_more_grows_in_steps_and_saturates() {
        let n = 10;
        let mut window = DisclosureWindow::new(n);

        for k in 1..=5 {
            window.reveal_more();
            assert_eq!(window.visible(), (WINDOW_STEP + WINDOW_STEP * k).min(n));
        }
        assert_eq!(window.visible(), n);
        assert!(window.is_exhausted());
    }

    #[test]
    fn window_never_exceeds_a_short_list() {
        let mut window = DisclosureWindow::new(2);
        assert_eq!(window.visible(), 2);
        window.reveal_more();
        assert_eq!(window.visible(), 2);
    }

    #[test]
    fn empty_list_stays_empty() {
        let mut window = DisclosureWindow::new(0);
        assert_eq!(window.visible(), 0);
        window.reveal_more();
        assert_eq!(window.visible(), 0);
        assert!(window.is_exhausted());
    }

    #[test]
    fn reset_discards_previous_position() {
        let mut window = DisclosureWindow::new(12);
        window.reveal_more();
        window.reveal_more();
        assert_eq!(window.visible(), 9);

        window.reset(5);
        assert_eq!(window.visible(), WINDOW_STEP);
        assert_eq!(window.total(), 5);
    }
}
