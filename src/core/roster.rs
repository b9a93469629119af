//! The character state store: a fixed arena of characters.
//!
//! ## Roster
//!
//! Characters are created once through `RosterBuilder` and addressed by
//! `CharacterId` (their arena index) for the rest of the session. All
//! mutation goes through action effects or round reset.
//!
//! ## Snapshot / restore
//!
//! `snapshot()` captures the three mutable fields of every character
//! (`actions_remaining`, `xp`, `fatigue`); `restore()` writes them back
//! verbatim, discarding any intermediate mutation. This is the backbone of
//! the resolver's guaranteed-rollback contract.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::character::{Character, CharacterId, Race};
use crate::error::PlanError;

/// Fixed arena of characters.
///
/// `Clone` is cheap enough for parallel trials: each clone copies a handful
/// of small records and the name strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Get a character by id.
    ///
    /// Panics on an id that was not produced by this roster's builder.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    /// Get a mutable character by id.
    pub fn get_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }

    /// Iterate all ids in arena order.
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> {
        (0..self.characters.len() as u32).map(CharacterId::new)
    }

    /// Iterate `(id, character)` pairs in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (CharacterId::new(i as u32), c))
    }

    /// Ids of characters currently eligible to act
    /// (`actions_remaining > 0` and fatigue below the ceiling).
    #[must_use]
    pub fn eligible(&self) -> Vec<CharacterId> {
        self.iter()
            .filter(|(_, c)| c.can_act())
            .map(|(id, _)| id)
            .collect()
    }

    /// Capture the mutable fields of every character.
    #[must_use]
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            entries: self
                .characters
                .iter()
                .map(|c| VitalsEntry {
                    actions_remaining: c.actions_remaining,
                    xp: c.xp,
                    fatigue: c.fatigue,
                })
                .collect(),
        }
    }

    /// Write a snapshot back verbatim.
    ///
    /// Panics if the snapshot was taken from a differently sized roster;
    /// rosters never change size during a session.
    pub fn restore(&mut self, snapshot: &RosterSnapshot) {
        assert_eq!(
            snapshot.entries.len(),
            self.characters.len(),
            "snapshot does not match roster size"
        );
        for (c, entry) in self.characters.iter_mut().zip(&snapshot.entries) {
            c.actions_remaining = entry.actions_remaining;
            c.xp = entry.xp;
            c.fatigue = entry.fatigue;
        }
    }

    /// Round reset for every character: budgets restored, fatigue decayed.
    pub fn reset_round(&mut self) {
        for c in &mut self.characters {
            c.reset_round();
        }
    }
}

/// Saved `(actions_remaining, xp, fatigue)` for one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct VitalsEntry {
    actions_remaining: u8,
    xp: i64,
    fatigue: u8,
}

/// Value-copy of every character's mutable fields.
///
/// An explicit object rather than an in-place singleton rewrite: the
/// resolver holds it for the span of a trial and hands it back to `restore`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    entries: Vec<VitalsEntry>,
}

/// Builder assembling a roster from named characters.
///
/// Names are the identity key at build time only; the ids handed back here
/// are what menus, rivalries, and reports use afterwards.
#[derive(Debug, Default)]
pub struct RosterBuilder {
    characters: Vec<Character>,
    by_name: FxHashMap<String, CharacterId>,
}

impl RosterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character and get its id.
    ///
    /// Returns `PlanError::DuplicateCharacter` if the name is already taken.
    pub fn character(
        &mut self,
        name: impl Into<String>,
        race: Race,
        action_budget: u8,
        xp: i64,
        fatigue: u8,
    ) -> Result<CharacterId, PlanError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(PlanError::DuplicateCharacter(name));
        }
        let id = CharacterId::new(self.characters.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.characters
            .push(Character::new(name, race, action_budget, xp, fatigue));
        Ok(id)
    }

    /// Look up an id by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<CharacterId> {
        self.by_name.get(name).copied()
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Roster {
        Roster {
            characters: self.characters,
        }
    }
}
