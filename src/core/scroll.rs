//! Scroll-state tracking for the navigation bar and header
//!
//! Every scroll notification is folded into a [`ScrollFrame`] describing the three
//! derived effects of a vertical offset:
//! - **scrolled** variant of the nav bar once the page moves past 100px
//! - **hide/show** of the nav bar depending on scroll direction
//! - **parallax** translation of the newspaper header
//!
//! # Usage Example
//!
//! ```rust
//! use vlog_vintage::core::scroll::{NavVisibility, ScrollTracker};
//!
//! let mut tracker = ScrollTracker::new();
//!
//! let frame = tracker.observe(250.0);
//! assert!(frame.scrolled);
//! assert_eq!(frame.nav, NavVisibility::Hidden);
//!
//! let frame = tracker.observe(240.0);
//! assert_eq!(frame.nav, NavVisibility::Shown);
//! ```

/// Offset (px) past which the nav bar switches to its `scrolled` variant
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Offset (px) past which scrolling down hides the nav bar
pub const HIDE_NAV_THRESHOLD_PX: f64 = 200.0;

/// Header moves at this fraction of the scroll speed
pub const PARALLAX_FACTOR: f64 = 0.2;

/// Quiet period before the debounced scroll logger fires (~60fps)
pub const SCROLL_LOG_DEBOUNCE_MS: u32 = 16;

/// Whether the navigation bar is translated off-screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Shown,
    Hidden,
}

impl NavVisibility {
    /// CSS `transform` value for this state
    pub fn transform(&self) -> &'static str {
        match self {
            NavVisibility::Shown => "translateY(0)",
            NavVisibility::Hidden => "translateY(-100%)",
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, NavVisibility::Hidden)
    }
}

/// Everything derived from a single scroll notification
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollFrame {
    /// Current vertical offset in pixels
    pub offset: f64,
    /// Nav bar carries the `scrolled` class
    pub scrolled: bool,
    /// Nav bar hide/show state
    pub nav: NavVisibility,
    /// Header translation in pixels
    pub parallax_px: f64,
}

impl ScrollFrame {
    /// CSS `transform` value for the header
    pub fn header_transform(&self) -> String {
        format!("translateY({}px)", self.parallax_px)
    }
}

/// `true` when the nav bar should use its `scrolled` styling.
///
/// Pure threshold predicate without hysteresis.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

/// Header parallax translation for an offset
pub fn parallax_offset(offset: f64) -> f64 {
    offset * PARALLAX_FACTOR
}

/// Decide nav visibility from the previous and current offsets
pub fn nav_visibility(previous: f64, current: f64) -> NavVisibility {
    if current > previous && current > HIDE_NAV_THRESHOLD_PX {
        NavVisibility::Hidden
    } else {
        NavVisibility::Shown
    }
}

/// Tracks the last observed scroll offset between notifications
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    /// Create a tracker positioned at the top of the page
    pub fn new() -> Self {
        Self { last_offset: 0.0 }
    }

    /// Fold a new offset into the tracker and return the derived frame.
    ///
    /// The previous offset is replaced unconditionally.
    pub fn observe(&mut self, offset: f64) -> ScrollFrame {
        let frame = ScrollFrame {
            offset,
            scrolled: is_scrolled(offset),
            nav: nav_visibility(self.last_offset, offset),
            parallax_px: parallax_offset(offset),
        };
        self.last_offset = offset;
        frame
    }

    /// Last offset seen by [`ScrollTracker::observe`]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Threshold predicate
    // ========================================================================

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(99.5));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(5000.0));
    }

    #[test]
    fn test_scrolled_matches_predicate_for_all_offsets() {
        let mut tracker = ScrollTracker::new();
        for offset in (0..=400).map(|o| o as f64) {
            let frame = tracker.observe(offset);
            assert_eq!(frame.scrolled, offset > 100.0, "offset {}", offset);
        }
        // Going back up: no hysteresis
        for offset in (0..=400).rev().map(|o| o as f64) {
            let frame = tracker.observe(offset);
            assert_eq!(frame.scrolled, offset > 100.0, "offset {}", offset);
        }
    }

    // ========================================================================
    // Direction-based visibility
    // ========================================================================

    #[test]
    fn test_scrolling_down_past_threshold_hides_nav() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(190.0);
        assert_eq!(tracker.observe(210.0).nav, NavVisibility::Hidden);
        assert_eq!(tracker.observe(300.0).nav, NavVisibility::Hidden);
    }

    #[test]
    fn test_scrolling_down_below_threshold_keeps_nav() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(50.0).nav, NavVisibility::Shown);
        assert_eq!(tracker.observe(200.0).nav, NavVisibility::Shown);
    }

    #[test]
    fn test_scrolling_up_shows_nav() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(500.0);
        assert_eq!(tracker.observe(480.0).nav, NavVisibility::Shown);
    }

    #[test]
    fn test_same_offset_shows_nav() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(500.0);
        assert_eq!(tracker.observe(500.0).nav, NavVisibility::Shown);
    }

    #[test]
    fn test_hidden_iff_increasing_and_past_threshold() {
        let offsets = [0.0, 150.0, 250.0, 260.0, 240.0, 900.0, 100.0, 201.0, 201.0, 199.0];
        let mut tracker = ScrollTracker::new();
        let mut previous = 0.0;
        for offset in offsets {
            let frame = tracker.observe(offset);
            let expected = offset > previous && offset > 200.0;
            assert_eq!(frame.nav.is_hidden(), expected, "offset {}", offset);
            previous = offset;
        }
    }

    #[test]
    fn test_last_offset_updated_unconditionally() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(42.0);
        assert_eq!(tracker.last_offset(), 42.0);
        tracker.observe(10.0);
        assert_eq!(tracker.last_offset(), 10.0);
    }

    // ========================================================================
    // Parallax and CSS output
    // ========================================================================

    #[test]
    fn test_parallax_is_proportional() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(100.0), 20.0);
        assert_eq!(parallax_offset(250.0), 50.0);
    }

    #[test]
    fn test_css_transforms() {
        assert_eq!(NavVisibility::Shown.transform(), "translateY(0)");
        assert_eq!(NavVisibility::Hidden.transform(), "translateY(-100%)");

        let frame = ScrollTracker::new().observe(50.0);
        assert_eq!(frame.header_transform(), "translateY(10px)");
    }
}
