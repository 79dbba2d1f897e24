use crate::config::MENU_BREAKPOINT_PX;

/// Open/closed state of the collapsible header menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn navigation_completed(&mut self) {
        self.close();
    }

    /// Returns `true` when the resize closed an open menu.
    pub fn viewport_resized(&mut self, width: f64) -> bool {
        if self.open && width >= MENU_BREAKPOINT_PX {
            self.open = false;
            return true;
        }
        false
    }
}
