//! Character identification and per-character state.
//!
//! Every roster member has a `CharacterId`: a stable index into the roster
//! arena, assigned once at build time. Actions carry resolved `CharacterId`
//! targets, so nothing ever re-parses a name string during resolution.

use serde::{Deserialize, Serialize};

/// Fatigue ceiling. A character at this value cannot be chosen as an actor
/// and cannot be a training partner.
pub const FATIGUE_MAX: u8 = 6;

/// Fatigue shed at round reset, in addition to whatever Rest recovered.
pub const ROUND_FATIGUE_DECAY: u8 = 2;

/// Index of a character in the roster arena.
///
/// Ids are assigned in insertion order by `RosterBuilder` and stay valid for
/// the lifetime of the roster (characters are never destroyed mid-session).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the arena index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// Character race. Carried for reporting; the planner itself never branches
/// on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Dwarf,
    Giant,
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Race::Dwarf => write!(f, "dwarf"),
            Race::Giant => write!(f, "giant"),
        }
    }
}

/// One roster member.
///
/// `action_budget` is the per-round constant; `actions_remaining` counts down
/// as actions resolve and is restored by round reset. `fatigue` is clamped to
/// `[0, FATIGUE_MAX]` by every mutation path, and `xp` only ever increases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique display name (identity key at build time).
    pub name: String,

    /// Race, for reporting.
    pub race: Race,

    /// Per-round action cap, restored at round reset.
    pub action_budget: u8,

    /// Actions left this round.
    pub actions_remaining: u8,

    /// Current fatigue in `[0, FATIGUE_MAX]`.
    pub fatigue: u8,

    /// Accumulated experience. Never decreases during resolution.
    pub xp: i64,
}

impl Character {
    /// Create a character with a full action budget.
    #[must_use]
    pub fn new(name: impl Into<String>, race: Race, action_budget: u8, xp: i64, fatigue: u8) -> Self {
        Self {
            name: name.into(),
            race,
            action_budget,
            actions_remaining: action_budget,
            fatigue: fatigue.min(FATIGUE_MAX),
            xp,
        }
    }

    /// Whether this character may be chosen as an actor right now.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.actions_remaining > 0 && self.fatigue < FATIGUE_MAX
    }

    /// Spend one action. Saturates at zero; preconditions are checked by the
    /// catalog before this is reached.
    pub fn spend_action(&mut self) {
        self.actions_remaining = self.actions_remaining.saturating_sub(1);
    }

    /// Raise fatigue, clamped at `FATIGUE_MAX`.
    pub fn add_fatigue(&mut self, amount: u8) {
        self.fatigue = (self.fatigue + amount).min(FATIGUE_MAX);
    }

    /// Lower fatigue, never below zero.
    pub fn recover_fatigue(&mut self, amount: u8) {
        self.fatigue = self.fatigue.saturating_sub(amount);
    }

    /// Round reset: restore the action budget and shed some fatigue.
    pub fn reset_round(&mut self) {
        self.actions_remaining = self.action_budget;
        self.recover_fatigue(ROUND_FATIGUE_DECAY);
    }
}
