//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::CLASS_OPEN;
use crate::engine::{Effect, Target};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Seed from the toggle button's `aria-expanded` attribute.
    #[must_use]
    pub fn from_aria_expanded(value: Option<&str>) -> Self {
        Self { open: value == Some("true") }
    }

    /// Flip the menu.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.set_open(!self.open)
    }

    /// Close the menu, e.g. after a navigation link was followed.
    pub fn close(&mut self) -> Vec<Effect> {
        self.set_open(false)
    }

    fn set_open(&mut self, open: bool) -> Vec<Effect> {
        self.open = open;
        vec![
            Effect::SetAttribute { target: Target::MenuToggle, name: "aria-expanded", value: open.to_string() },
            Effect::ToggleClass { target: Target::SiteNav, class: CLASS_OPEN, on: open },
        ]
    }
}
