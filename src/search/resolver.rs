//! Turn resolution: guarded trials and the permanent commit path.
//!
//! A trial applies a candidate's steps in order against live state, scores
//! the result, and always restores the pre-trial snapshot before returning.
//! The rollback runs from a guard's `Drop`, so it is unconditionally
//! reachable on every exit path: success, invalid candidate, or panic.

use crate::catalog::Ruleset;
use crate::core::{Candidate, Roster, RosterSnapshot};
use crate::error::PlanError;
use crate::search::objective::Objective;

/// Restores the wrapped roster to its construction-time snapshot on drop.
struct RollbackGuard<'a> {
    roster: &'a mut Roster,
    snapshot: RosterSnapshot,
}

impl<'a> RollbackGuard<'a> {
    fn new(roster: &'a mut Roster) -> Self {
        let snapshot = roster.snapshot();
        Self { roster, snapshot }
    }
}

impl Drop for RollbackGuard<'_> {
    fn drop(&mut self) {
        self.roster.restore(&self.snapshot);
    }
}

/// Trial one candidate non-destructively.
///
/// Returns `Ok(Some(score))` for a valid candidate, `Ok(None)` when any
/// step's precondition fails mid-sequence (remaining steps are skipped).
/// The roster is back in its pre-trial state either way.
pub fn run_trial(
    roster: &mut Roster,
    rules: &Ruleset,
    candidate: &Candidate,
    objective: Objective,
) -> Result<Option<i64>, PlanError> {
    let mut guard = RollbackGuard::new(roster);

    for step in candidate.iter() {
        if rules.apply(&mut *guard.roster, *step).is_err() {
            return Ok(None);
        }
    }

    // Post-trial, pre-rollback state; the guard rolls back on return.
    let score = objective.score(&*guard.roster)?;
    Ok(Some(score))
}

/// Apply a candidate permanently, with no rollback; the path for the winner.
///
/// If a step fails its precondition the pre-commit state is restored and
/// the error surfaces. This cannot happen for a candidate that scored valid
/// in a trial, since trials restore state exactly.
pub fn commit(roster: &mut Roster, rules: &Ruleset, candidate: &Candidate) -> Result<(), PlanError> {
    let snapshot = roster.snapshot();

    for step in candidate.iter() {
        if let Err(err) = rules.apply(roster, *step) {
            roster.restore(&snapshot);
            return Err(PlanError::InvalidAction(err));
        }
    }

    Ok(())
}
