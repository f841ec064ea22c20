//! Click feedback for the social buttons: press pulse and ripple overlay

/// Scale applied while the button is "pressed"
pub const PRESS_TRANSFORM: &str = "scale(0.95)";

/// Resting scale restored after [`PRESS_DURATION_MS`]
pub const RELEASE_TRANSFORM: &str = "scale(1)";

pub const PRESS_DURATION_MS: u32 = 150;

/// Lifetime of a ripple span; matches the `ripple 0.6s` animation
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Bounding box of the clicked button in client coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and position of a ripple inside its button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter: the button's larger dimension
    pub size: f64,
    /// Offset from the button's left edge
    pub left: f64,
    /// Offset from the button's top edge
    pub top: f64,
}

impl RippleGeometry {
    /// Center a ripple on the click point `(client_x, client_y)`
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style for the ripple span
    pub fn css_text(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.5); \
             transform: scale(0); animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// Live ripples on one button, each holding a handle `H` to its overlay
///
/// Each click spawns an independent ripple that expires [`RIPPLE_DURATION_MS`] after
/// it was created; nothing is deduplicated. Removing or expiring a ripple hands its
/// handle back so the caller can take the overlay off the page.
#[derive(Debug, Clone)]
pub struct RippleSet<H> {
    next_id: u64,
    live: Vec<(u64, f64, H)>,
}

impl<H> Default for RippleSet<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: Vec::new(),
        }
    }
}

impl<H> RippleSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ripple spawned at `now_ms`; returns its id
    pub fn spawn(&mut self, now_ms: f64, handle: H) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push((id, now_ms, handle));
        id
    }

    /// Take out the ripple whose timer fired
    pub fn remove(&mut self, id: u64) -> Option<H> {
        let index = self.live.iter().position(|(live_id, _, _)| *live_id == id)?;
        Some(self.live.remove(index).2)
    }

    /// Take out every ripple older than its lifetime at `now_ms`
    pub fn expire(&mut self, now_ms: f64) -> Vec<H> {
        let lifetime = RIPPLE_DURATION_MS as f64;
        let (expired, live): (Vec<_>, Vec<_>) = self
            .live
            .drain(..)
            .partition(|(_, spawned, _)| now_ms - spawned >= lifetime);
        self.live = live;
        expired.into_iter().map(|(_, _, handle)| handle).collect()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 60.0,
    };

    // ========================================================================
    // Geometry
    // ========================================================================

    #[test]
    fn test_size_is_larger_dimension() {
        let g = RippleGeometry::from_click(BUTTON, 150.0, 70.0);
        assert_eq!(g.size, 200.0);

        let tall = Rect {
            width: 40.0,
            height: 90.0,
            ..BUTTON
        };
        assert_eq!(RippleGeometry::from_click(tall, 0.0, 0.0).size, 90.0);
    }

    #[test]
    fn test_centered_on_click_point() {
        let g = RippleGeometry::from_click(BUTTON, 200.0, 80.0);
        // Click is 100px into the button horizontally, 30px vertically
        assert_eq!(g.left, 100.0 - 100.0);
        assert_eq!(g.top, 30.0 - 100.0);
        assert_eq!(g.left + g.size / 2.0, 100.0);
        assert_eq!(g.top + g.size / 2.0, 30.0);
    }

    #[test]
    fn test_css_text() {
        let g = RippleGeometry {
            size: 120.0,
            left: -10.0,
            top: 5.5,
        };
        let css = g.css_text();
        assert!(css.contains("width: 120px;"));
        assert!(css.contains("height: 120px;"));
        assert!(css.contains("left: -10px;"));
        assert!(css.contains("top: 5.5px;"));
        assert!(css.contains("animation: ripple 0.6s linear;"));
        assert!(css.contains("pointer-events: none;"));
    }

    // ========================================================================
    // Lifetime accounting
    // ========================================================================

    #[test]
    fn test_rapid_clicks_produce_independent_ripples() {
        let mut set = RippleSet::new();
        let mut ids: Vec<u64> = (0..5).map(|i| set.spawn(i as f64 * 20.0, i)).collect();
        assert_eq!(set.len(), 5);

        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_ripples_expire_individually() {
        let mut set = RippleSet::new();
        set.spawn(0.0, "first");
        set.spawn(100.0, "second");

        assert!(set.expire(599.0).is_empty());
        assert_eq!(set.expire(600.0), vec!["first"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.expire(700.0), vec!["second"]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_no_ripples_left_after_window() {
        // Ten clicks, each removed by its own timer
        let mut set = RippleSet::new();
        let ids: Vec<u64> = (0..10).map(|i| set.spawn(i as f64 * 10.0, i)).collect();

        let removed: Vec<i32> = ids.iter().filter_map(|id| set.remove(*id)).collect();
        assert_eq!(removed, (0..10).collect::<Vec<_>>());
        assert!(set.is_empty());
    }

    #[test]
    fn test_stale_ripples_swept_on_next_click() {
        // A timer that never fired leaves its ripple behind until the next click
        let mut set = RippleSet::new();
        let kept = set.spawn(0.0, "stale");
        set.spawn(500.0, "fresh");

        let swept = set.expire(650.0);
        assert_eq!(swept, vec!["stale"]);
        assert_eq!(set.remove(kept), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_hands_back_handle_once() {
        let mut set = RippleSet::new();
        let id = set.spawn(0.0, "span");
        assert_eq!(set.remove(id), Some("span"));
        assert_eq!(set.remove(id), None);
        assert!(set.is_empty());
    }
}
