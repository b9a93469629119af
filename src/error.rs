//! Crate error taxonomy.
//!
//! Candidate-level failures are not errors: a precondition failing
//! mid-candidate just invalidates that candidate, and an empty search space
//! is a normal round outcome. `PlanError` covers the conditions a caller
//! must actually handle.

use thiserror::Error;

use crate::catalog::ActionError;
use crate::core::CharacterId;

/// Errors surfaced by roster construction and round planning.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The roster is smaller than the objective's required count.
    #[error("roster has {found} characters but the objective needs {required}")]
    DegenerateRoster { required: usize, found: usize },

    /// A step failed its precondition while committing a winning plan.
    /// Unreachable for plans that scored valid in a trial, since trials
    /// restore state exactly.
    #[error("invalid action while committing a plan: {0}")]
    InvalidAction(#[from] ActionError),

    /// Two roster entries share a name.
    #[error("duplicate character name: {0}")]
    DuplicateCharacter(String),

    /// A rivalry pair referenced the same character twice.
    #[error("character cannot be its own rival: {0}")]
    SelfRivalry(CharacterId),

    /// The menu list does not line up with the roster.
    #[error("expected {expected} action menus, found {found}")]
    MenuMismatch { expected: usize, found: usize },
}
