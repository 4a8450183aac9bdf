//! Typing/deleting animation for the hero heading.
//!
//! STATE MACHINE
//! =============
//! `Typing` appends one character per tick until the phrase is complete, then
//! `PausedAfterTyping`. Waking from that pause performs the first deletion.
//! `Deleting` removes one character per tick until the text is empty, advances
//! the phrase index, then `PausedAfterDeleting`. Waking from that pause types
//! the first character of the next phrase. The cycle never ends.
//!
//! [`step`] is the single driver: it takes the current state and returns the
//! next state, the text to display, and how long to wait before the next tick.
//! No real timers are involved, so tests drive it with a logical clock.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{
    DELETE_TICK_MS, PAUSE_AFTER_DELETING_MS, PAUSE_AFTER_TYPING_MS, TYPE_START_DELAY_MS, TYPE_TICK_MS,
    TYPING_CURSOR_CLASS,
};
use crate::effect::{Effect, Target, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    PausedAfterTyping,
    Deleting,
    PausedAfterDeleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Number of characters of the current phrase on screen.
    pub char_index: usize,
    pub phase: Phase,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: TypingState,
    pub text: String,
    pub delay_ms: u32,
}

/// Advance the machine by one tick. Returns `None` for an empty phrase list.
#[must_use]
pub fn step(phrases: &[String], state: TypingState) -> Option<Step> {
    if phrases.is_empty() {
        return None;
    }
    let mut next = state;
    next.phrase_index %= phrases.len();
    next.phase = match state.phase {
        Phase::PausedAfterTyping => Phase::Deleting,
        Phase::PausedAfterDeleting => Phase::Typing,
        phase => phase,
    };

    let phrase = &phrases[next.phrase_index];
    let len = phrase.chars().count();

    let delay_ms = if next.phase == Phase::Deleting {
        next.char_index = next.char_index.min(len).saturating_sub(1);
        if next.char_index == 0 {
            next.phase = Phase::PausedAfterDeleting;
            next.phrase_index = (next.phrase_index + 1) % phrases.len();
            PAUSE_AFTER_DELETING_MS
        } else {
            DELETE_TICK_MS
        }
    } else {
        next.char_index = (next.char_index + 1).min(len);
        if next.char_index == len {
            next.phase = Phase::PausedAfterTyping;
            PAUSE_AFTER_TYPING_MS
        } else {
            TYPE_TICK_MS
        }
    };

    let shown = if next.phase == Phase::PausedAfterDeleting { 0 } else { next.char_index };
    let text = phrase.chars().take(shown).collect();
    Some(Step { state: next, text, delay_ms })
}

/// Owns the phrase list and the machine state for the host.
#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    phrases: Vec<String>,
    state: TypingState,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases, state: TypingState::default() }
    }

    #[must_use]
    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Startup effects: cursor class plus the first delayed tick. Nothing for
    /// an empty phrase list.
    #[must_use]
    pub fn start(&self) -> Vec<Effect> {
        if self.phrases.is_empty() {
            return Vec::new();
        }
        vec![
            Effect::AddClass { target: Target::HeroRole, class: TYPING_CURSOR_CLASS },
            Effect::Schedule { delay_ms: TYPE_START_DELAY_MS, timer: Timer::TypeTick },
        ]
    }

    /// Run one tick and return the text update plus the next scheduled tick.
    pub fn tick(&mut self) -> Vec<Effect> {
        let Some(step) = step(&self.phrases, self.state) else {
            return Vec::new();
        };
        self.state = step.state;
        vec![
            Effect::SetText { target: Target::HeroRole, text: step.text },
            Effect::Schedule { delay_ms: step.delay_ms, timer: Timer::TypeTick },
        ]
    }
}
