//! Inline style values for hover, focus and page-wide effects

/// Cards that lift on hover
pub const HOVER_CARD_SELECTOR: &str = ".course-info-card, .sidebar-box, .photo-caption, .creator-card";

/// Elements reachable with the keyboard
pub const FOCUSABLE_SELECTOR: &str =
    "a, button, input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// A set of inline style properties applied together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePatch {
    pub properties: &'static [(&'static str, &'static str)],
}

impl StylePatch {
    pub const fn new(properties: &'static [(&'static str, &'static str)]) -> Self {
        Self { properties }
    }

    /// Value set for `property`, if any
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.properties
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| *value)
    }
}

/// Card raised under the pointer
pub const CARD_LIFTED: StylePatch = StylePatch::new(&[
    ("transform", "translateY(-5px) scale(1.02)"),
    ("box-shadow", "0 15px 30px var(--shadow-color)"),
]);

/// Card at rest
pub const CARD_RESTING: StylePatch = StylePatch::new(&[
    ("transform", "translateY(0) scale(1)"),
    ("box-shadow", "0 6px 15px var(--shadow-color)"),
]);

/// Keyboard focus ring
pub const FOCUS_RING: StylePatch = StylePatch::new(&[
    ("outline", "3px solid var(--accent-color)"),
    ("outline-offset", "2px"),
]);

/// Focus ring removed
pub const FOCUS_CLEARED: StylePatch = StylePatch::new(&[("outline", ""), ("outline-offset", "")]);

/// Pointer state of a hover card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Resting,
    Lifted,
}

impl HoverState {
    pub fn style(&self) -> StylePatch {
        match self {
            HoverState::Resting => CARD_RESTING,
            HoverState::Lifted => CARD_LIFTED,
        }
    }
}

/// Focus ring for a focus change
pub fn focus_style(focused: bool) -> StylePatch {
    if focused { FOCUS_RING } else { FOCUS_CLEARED }
}
