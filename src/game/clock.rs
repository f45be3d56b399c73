//! Countdown tick source.
//!
//! The controller owns a [`Countdown`]; the page keeps at most one repeating timer alive,
//! keyed on [`Countdown::token`]. Every start hands out a fresh token, so a tick fired by a
//! timer from an earlier round is recognised and dropped.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    generation: u64,
    running: bool,
}

impl Countdown {
    /// Starts a new tick source, replacing any previous one.
    pub fn start(&mut self) -> TickToken {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        TickToken(self.generation)
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Token the page should currently be ticking with, if any.
    pub fn token(&self) -> Option<TickToken> {
        self.running.then_some(TickToken(self.generation))
    }

    pub fn accepts(&self, token: TickToken) -> bool {
        self.running && token.0 == self.generation
    }
}
