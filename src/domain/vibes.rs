//! The fixed set of vibe messages and uniform selection over it

use rand::{seq::SliceRandom, Rng};

pub const VIBES: [&str; 4] = [
    "AI says: You are crushing it! ",
    "AI says: Don't forget to hydrate! ",
    "AI says: Deployments are looking green! ",
    "AI says: Sleep is for the weak (just kidding, sleep is important) ",
];

/// Immutable view over a list of vibe messages, shared by every request.
#[derive(Debug, Clone, Copy)]
pub struct VibeSet {
    messages: &'static [&'static str],
}

impl VibeSet {
    pub fn standard() -> Self {
        Self::from_static(&VIBES)
    }

    pub const fn from_static(messages: &'static [&'static str]) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        self.messages
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|candidate| *candidate == message)
    }

    /// Draws one message uniformly at random. `None` only for an empty set.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        self.messages.choose(rng).copied()
    }
}
