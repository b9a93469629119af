//! Action representation: tagged variants with pre-resolved targets.
//!
//! An `Action` is the "verb" a character performs; targeted variants carry
//! the `CharacterId` of the partner, resolved once when the menu is built.
//! A `PlanStep` binds an action to its actor, and a `Candidate` is one fully
//! ordered trial assignment of steps for a round. Order matters: validity is
//! checked sequentially, so fatigue from an early step can disqualify a
//! later one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::character::CharacterId;

/// One action a character can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Spar with a partner. Both sides tire; XP grant depends on the
    /// configured training policy.
    Train { target: CharacterId },

    /// Strike a declared rival.
    Attack { target: CharacterId },

    /// Recover fatigue.
    Rest,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Train { target } => write!(f, "train #{}", target.raw()),
            Action::Attack { target } => write!(f, "attack #{}", target.raw()),
            Action::Rest => write!(f, "rest"),
        }
    }
}

/// Fixed action menu for one character.
///
/// Menu order is part of the enumeration order: earlier menu entries produce
/// earlier candidates, and ties between equal-scoring candidates keep the
/// earliest one.
pub type ActionMenu = SmallVec<[Action; 4]>;

/// An action bound to its actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanStep {
    pub actor: CharacterId,
    pub action: Action,
}

impl PlanStep {
    #[must_use]
    pub const fn new(actor: CharacterId, action: Action) -> Self {
        Self { actor, action }
    }
}

/// One ordered candidate assignment of steps for a round.
///
/// SmallVec covers the common case (a four-character party has at most 14
/// steps) without heap allocation for small rosters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub steps: SmallVec<[PlanStep; 8]>,
}

impl Candidate {
    /// Create an empty candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a candidate from a step sequence.
    #[must_use]
    pub fn from_steps(steps: impl IntoIterator<Item = PlanStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Append a step.
    pub fn push(&mut self, step: PlanStep) {
        self.steps.push(step);
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the candidate has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate the steps in application order.
    pub fn iter(&self) -> impl Iterator<Item = &PlanStep> {
        self.steps.iter()
    }

    /// The actions one character performs in this candidate, in order.
    pub fn actions_for(&self, actor: CharacterId) -> impl Iterator<Item = Action> + '_ {
        self.steps
            .iter()
            .filter(move |s| s.actor == actor)
            .map(|s| s.action)
    }
}
