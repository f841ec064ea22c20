//! Responsive navigation menu state

/// Class carried by `nav-menu` while the menu is open
pub const ACTIVE_CLASS: &str = "active";

/// Icon shown on the toggle while the menu is closed
pub const ICON_CLOSED: &str = "fas fa-bars";

/// Icon shown on the toggle while the menu is open
pub const ICON_OPEN: &str = "fas fa-times";

/// Open/closed state of the mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon class for the toggle button
    pub fn icon_class(&self) -> &'static str {
        if self.open { ICON_OPEN } else { ICON_CLOSED }
    }

    /// Apply a document click.
    ///
    /// Clicks inside the toggle or the menu are handled by their own listeners;
    /// anything else closes the menu.
    pub fn on_document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }
}

/// Element id targeted by an in-page link, if any.
///
/// `"#sobre"` yields `Some("sobre")`; external links and a bare `"#"` yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
