//! Scroll-triggered entrance animation bookkeeping.
//!
//! Elements are tagged with [`FADE_IN_CLASS`] up front and receive
//! [`VISIBLE_CLASS`] the first time they intersect the viewport. Nothing is
//! un-marked on exit.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

/// Tracks which observed elements (by registration index) have been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Record an intersection report. Returns `true` exactly once per
    /// element: on its first intersecting entry.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if !is_intersecting || *slot {
            return false;
        }
        *slot = true;
        true
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
