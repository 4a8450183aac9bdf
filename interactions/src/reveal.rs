//! One-shot scroll reveal bookkeeping.
//!
//! Each registered element moves from pending to revealed exactly once, the
//! first time the observer reports it intersecting, and is unobserved in the
//! same step. Later reports for it are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEALED_CLASS;
use crate::effect::{Effect, Target};

/// Observer entry as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub intersecting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    pending: Vec<bool>,
}

impl RevealSet {
    /// Register `count` elements, all pending.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { pending: vec![true; count] }
    }

    #[must_use]
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|p| **p).count()
    }

    /// Handle one observer callback batch.
    pub fn observe(&mut self, entries: &[Intersection]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for entry in entries {
            if !entry.intersecting {
                continue;
            }
            let Some(pending) = self.pending.get_mut(entry.index) else {
                continue;
            };
            if !*pending {
                continue;
            }
            *pending = false;
            effects.push(Effect::AddClass { target: Target::Reveal(entry.index), class: REVEALED_CLASS });
            effects.push(Effect::Unobserve(entry.index));
        }
        effects
    }
}
