/// Open/closed state of the mobile navigation menu.
///
/// The icon glyph, CSS class and `aria-expanded` value are all derived from
/// the single `open` flag, so they always agree with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape belongs to an open dialog first; the menu behind it stays put.
    /// Returns `true` if the menu closed.
    pub fn dismiss_on_escape(&mut self, dialog_open: bool) -> bool {
        !dialog_open && self.close()
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
