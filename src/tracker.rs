//! Scroll-spy state for the navigation bar.
//!
//! Two independent signals live here: the active section, driven by
//! intersection events, and the scrolled flag, driven by the window scroll
//! position. Neither reads the other.

use thiserror::Error;

/// Scroll offset past which the navigation bar switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Fraction of a section that must be visible before it becomes active.
pub const VISIBILITY_THRESHOLD: f64 = 0.15;
/// Shrinks the observed viewport by 40% at the bottom, so sections entering
/// from below are picked up before they fill the screen.
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -40% 0px";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("observed section has no id")]
    MissingId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    active: String,
    scrolled: bool,
}

impl SectionTracker {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            active: initial.into(),
            scrolled: false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, anchor: &str) -> bool {
        self.active == anchor
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Applies one intersection entry. Entries that are not intersecting are
    /// ignored; the last intersecting entry wins.
    ///
    /// Returns whether the active section changed.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> Result<bool, TrackerError> {
        if !is_intersecting {
            return Ok(false);
        }
        if id.is_empty() {
            return Err(TrackerError::MissingId);
        }
        if self.active == id {
            return Ok(false);
        }
        self.active = id.to_string();
        Ok(true)
    }

    /// Returns whether the scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(crate::site::NAV_ITEMS[0].anchor)
    }
}
