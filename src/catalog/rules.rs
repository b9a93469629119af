//! Rule semantics for the three action kinds.
//!
//! Every action is atomic: `check` runs against immutable state first, and
//! `apply` mutates only after the check passes. A failing step therefore
//! never partially mutates the roster; the resolver discards the whole
//! candidate instead.
//!
//! Two behaviors exist in two legitimate variants each, kept as named
//! policies rather than unified:
//!
//! - `TrainXpPolicy`: does Train grant XP to the actor only, or to both
//!   actor and target?
//! - `RestPolicy`: may a character always rest, or only with fatigue to
//!   shed (in which case resting also grants 1 XP)?

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Action, CharacterId, PlanStep, Roster, FATIGUE_MAX};
use crate::error::PlanError;

/// XP granted to a trainer (and, under `Mutual`, the partner).
pub const TRAIN_XP: i64 = 2;

/// XP granted for striking a rival.
pub const ATTACK_XP: i64 = 5;

/// XP granted for resting under `RestPolicy::WhenFatigued`.
pub const REST_XP: i64 = 1;

/// Fatigue recovered by one Rest.
pub const REST_RECOVERY: u8 = 4;

/// Who gains XP from a training session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainXpPolicy {
    /// Only the actor gains XP.
    #[default]
    ActorOnly,
    /// Actor and target each gain XP.
    Mutual,
}

/// When a character may rest, and whether it earns XP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestPolicy {
    /// Rest is always allowed and grants no XP.
    #[default]
    Always,
    /// Rest requires fatigue to shed and grants 1 XP.
    WhenFatigued,
}

/// A step's precondition failed.
///
/// Non-fatal: the containing candidate is discarded and the search moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("actor has no actions remaining")]
    NoActionsRemaining,
    #[error("actor is at maximum fatigue")]
    ActorExhausted,
    #[error("target is at maximum fatigue")]
    TargetExhausted,
    #[error("a character cannot train itself")]
    SelfTarget,
    #[error("attack requires a declared rivalry between actor and target")]
    NotRivals,
    #[error("rest requires fatigue to recover")]
    NothingToRecover,
}

/// The configured rule variants plus the rivalry relation.
///
/// Rivalries are a declared table of id pairs, checked symmetrically; the
/// catalog never special-cases names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub train_xp: TrainXpPolicy,
    pub rest: RestPolicy,
    rivalries: Vec<(CharacterId, CharacterId)>,
}

impl Ruleset {
    /// Create a ruleset with the given policy variants and no rivalries.
    #[must_use]
    pub fn new(train_xp: TrainXpPolicy, rest: RestPolicy) -> Self {
        Self {
            train_xp,
            rest,
            rivalries: Vec::new(),
        }
    }

    /// Declare a pair eligible to attack each other.
    pub fn add_rivalry(&mut self, a: CharacterId, b: CharacterId) -> Result<(), PlanError> {
        if a == b {
            return Err(PlanError::SelfRivalry(a));
        }
        if !self.are_rivals(a, b) {
            self.rivalries.push((a, b));
        }
        Ok(())
    }

    /// Chaining form of `add_rivalry`.
    pub fn with_rivalry(mut self, a: CharacterId, b: CharacterId) -> Result<Self, PlanError> {
        self.add_rivalry(a, b)?;
        Ok(self)
    }

    /// Whether two characters are declared rivals (order-insensitive).
    #[must_use]
    pub fn are_rivals(&self, a: CharacterId, b: CharacterId) -> bool {
        self.rivalries
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// The declared rivalry pairs.
    #[must_use]
    pub fn rivalries(&self) -> &[(CharacterId, CharacterId)] {
        &self.rivalries
    }

    /// Check a step's precondition against current state without mutating.
    pub fn check(&self, roster: &Roster, step: PlanStep) -> Result<(), ActionError> {
        let actor = roster.get(step.actor);
        if actor.actions_remaining == 0 {
            return Err(ActionError::NoActionsRemaining);
        }

        match step.action {
            Action::Train { target } => {
                if step.actor == target {
                    return Err(ActionError::SelfTarget);
                }
                if actor.fatigue >= FATIGUE_MAX {
                    return Err(ActionError::ActorExhausted);
                }
                if roster.get(target).fatigue >= FATIGUE_MAX {
                    return Err(ActionError::TargetExhausted);
                }
            }
            Action::Attack { target } => {
                if !self.are_rivals(step.actor, target) {
                    return Err(ActionError::NotRivals);
                }
            }
            Action::Rest => {
                if self.rest == RestPolicy::WhenFatigued && actor.fatigue == 0 {
                    return Err(ActionError::NothingToRecover);
                }
            }
        }

        Ok(())
    }

    /// Apply one step: check, then mutate.
    ///
    /// On `Err` the roster is untouched.
    pub fn apply(&self, roster: &mut Roster, step: PlanStep) -> Result<(), ActionError> {
        self.check(roster, step)?;

        match step.action {
            Action::Train { target } => {
                {
                    let actor = roster.get_mut(step.actor);
                    actor.spend_action();
                    actor.add_fatigue(1);
                    actor.xp += TRAIN_XP;
                }
                let partner = roster.get_mut(target);
                partner.add_fatigue(1);
                if self.train_xp == TrainXpPolicy::Mutual {
                    partner.xp += TRAIN_XP;
                }
            }
            Action::Attack { target } => {
                {
                    let actor = roster.get_mut(step.actor);
                    actor.spend_action();
                    actor.add_fatigue(1);
                    actor.xp += ATTACK_XP;
                }
                roster.get_mut(target).add_fatigue(1);
            }
            Action::Rest => {
                let actor = roster.get_mut(step.actor);
                actor.spend_action();
                actor.recover_fatigue(REST_RECOVERY);
                if self.rest == RestPolicy::WhenFatigued {
                    actor.xp += REST_XP;
                }
            }
        }

        Ok(())
    }
}
