//! Fire-once reveal of `[data-reveal]` nodes as they scroll into view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::CLASS_REVEALED;
use crate::engine::{Effect, Target};

/// Attribute marking nodes that animate in on first sight.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Tracks which reveal nodes have already been shown.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Handle one intersection entry for node `index`.
    ///
    /// The first intersecting entry reveals the node and stops observing it.
    /// Non-intersecting entries, repeats, and unknown indices do nothing.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        if !is_intersecting {
            return Vec::new();
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                vec![
                    Effect::ToggleClass { target: Target::Reveal(index), class: CLASS_REVEALED, on: true },
                    Effect::StopObserving(Target::Reveal(index)),
                ]
            }
            _ => Vec::new(),
        }
    }

    /// Reveal every pending node at once, for hosts without
    /// `IntersectionObserver`.
    pub fn reveal_all(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (index, seen) in self.revealed.iter_mut().enumerate() {
            if !*seen {
                *seen = true;
                effects.push(Effect::ToggleClass { target: Target::Reveal(index), class: CLASS_REVEALED, on: true });
            }
        }
        effects
    }
}
