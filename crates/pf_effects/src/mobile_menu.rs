use tracing::debug;

/// Collapsible navigation menu for narrow layouts. Page scrolling is locked
/// while the menu is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "Mobile menu toggled");

        self.open
    }

    pub fn close_on_link(&mut self) {
        self.open = false;
    }

    /// Closes the menu unless the click landed on the menu or its toggle
    pub fn close_on_outside_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.open = false;
        }
    }
}
