//! Entrance animations triggered by viewport intersection
//!
//! Elements start `pending` and become `animated` the first time at least 10% of
//! them is visible. The transition is one-way: repeated crossings are ignored.

use std::collections::HashSet;
use std::hash::Hash;

/// Selector for elements that animate when they scroll into view
pub const ANIMATED_SELECTOR: &str = ".fade-in, .slide-up";

/// Class added once the element has entered the viewport
pub const ANIMATED_CLASS: &str = "animated";

/// Fraction of the element that must be visible
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Viewport shrink used for triggering (50px off the bottom edge)
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// CSS `animation-delay` for an element at `index` among its siblings (0.1s steps)
pub fn stagger_delay(index: usize) -> String {
    // Formatted from integer tenths so 0.3 never prints as 0.30000000000000004
    match (index / 10, index % 10) {
        (whole, 0) => format!("{}s", whole),
        (whole, tenths) => format!("{}.{}s", whole, tenths),
    }
}

/// Remembers which elements already played their entrance animation
#[derive(Debug, Clone)]
pub struct AnimationTracker<K> {
    animated: HashSet<K>,
}

impl<K: Eq + Hash> AnimationTracker<K> {
    pub fn new() -> Self {
        Self {
            animated: HashSet::new(),
        }
    }

    /// Report an intersection change for `key`.
    ///
    /// Returns `true` only for the first visible crossing of that element.
    pub fn on_intersection(&mut self, key: K, is_intersecting: bool) -> bool {
        is_intersecting && self.animated.insert(key)
    }

    pub fn is_animated(&self, key: &K) -> bool {
        self.animated.contains(key)
    }

    /// Number of elements that have animated so far
    pub fn len(&self) -> usize {
        self.animated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animated.is_empty()
    }
}

impl<K: Eq + Hash> Default for AnimationTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
