//! Lifelines and the set of lifelines a player has spent.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One-time-use aid available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lifeline {
    /// Ask the audience ("Survey Says").
    AudiencePoll,
    /// Hide two incorrect options.
    FiftyFifty,
    /// Call a friend for a hint.
    PhoneAFriend,
}

impl Lifeline {
    /// All lifelines in display order.
    pub const ALL: [Lifeline; 3] = [Lifeline::AudiencePoll, Lifeline::FiftyFifty, Lifeline::PhoneAFriend];

    /// Button label shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Lifeline::AudiencePoll => "Survey Says",
            Lifeline::FiftyFifty => "50/50",
            Lifeline::PhoneAFriend => "Phone A Friend",
        }
    }
}

impl std::fmt::Display for Lifeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Grow-only set of spent lifelines.
///
/// Lifelines are only ever added; nothing removes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedLifelines {
    used: FxHashSet<Lifeline>,
}

impl UsedLifelines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `kind` as used. Returns false if it already was.
    pub fn spend(&mut self, kind: Lifeline) -> bool {
        self.used.insert(kind)
    }

    #[must_use]
    pub fn contains(&self, kind: Lifeline) -> bool {
        self.used.contains(&kind)
    }

    #[must_use]
    pub fn is_available(&self, kind: Lifeline) -> bool {
        !self.contains(kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Spent lifelines in display order.
    #[must_use]
    pub fn to_vec(&self) -> SmallVec<[Lifeline; 3]> {
        Lifeline::ALL.into_iter().filter(|&l| self.contains(l)).collect()
    }
}
