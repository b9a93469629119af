//! Maximin fairness scoring.
//!
//! The objective is the summed XP of the k weakest party members: k = 1 is
//! the single-weakest rule (the independent-policy reference), k = 2 the
//! two-weakest sum (the interleaved-policy reference). Scores are read off
//! the post-trial, pre-rollback state.

use serde::{Deserialize, Serialize};

use crate::core::Roster;
use crate::error::PlanError;

/// Sum-of-k-weakest XP objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    k: usize,
}

impl Objective {
    /// XP of the single weakest character.
    #[must_use]
    pub fn weakest() -> Self {
        Self { k: 1 }
    }

    /// Summed XP of the two weakest characters.
    #[must_use]
    pub fn two_weakest() -> Self {
        Self { k: 2 }
    }

    /// Summed XP of the k weakest characters.
    #[must_use]
    pub fn k_weakest(k: usize) -> Self {
        assert!(k >= 1, "objective needs at least one character");
        Self { k }
    }

    /// Minimum roster size this objective can score.
    #[must_use]
    pub fn required(&self) -> usize {
        self.k
    }

    /// Score a roster state.
    ///
    /// Returns `DegenerateRoster` when the roster is smaller than k; the
    /// driver validates this once per round before the candidate loop.
    pub fn score(&self, roster: &Roster) -> Result<i64, PlanError> {
        if roster.len() < self.k {
            return Err(PlanError::DegenerateRoster {
                required: self.k,
                found: roster.len(),
            });
        }

        let mut xp: Vec<i64> = roster.iter().map(|(_, c)| c.xp).collect();
        xp.sort_unstable();
        Ok(xp[..self.k].iter().sum())
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::weakest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Race, RosterBuilder};

    fn roster(xps: &[i64]) -> Roster {
        let mut b = RosterBuilder::new();
        for (i, &xp) in xps.iter().enumerate() {
            b.character(format!("c{i}"), Race::Dwarf, 3, xp, 0).unwrap();
        }
        b.build()
    }

    #[test]
    fn test_weakest() {
        let r = roster(&[2170, 2265, 2287, 2095]);
        assert_eq!(Objective::weakest().score(&r).unwrap(), 2095);
    }

    #[test]
    fn test_two_weakest_sum() {
        let r = roster(&[2170, 2265, 2287, 2095]);
        assert_eq!(Objective::two_weakest().score(&r).unwrap(), 2095 + 2170);
    }

    #[test]
    fn test_k_weakest() {
        let r = roster(&[5, 1, 3]);
        assert_eq!(Objective::k_weakest(3).score(&r).unwrap(), 9);
    }

    #[test]
    fn test_degenerate_roster() {
        let r = roster(&[10]);
        let err = Objective::two_weakest().score(&r).unwrap_err();
        assert!(matches!(
            err,
            PlanError::DegenerateRoster {
                required: 2,
                found: 1
            }
        ));
    }

    #[test]
    #[should_panic(expected = "objective needs at least one character")]
    fn test_zero_k_rejected() {
        let _ = Objective::k_weakest(0);
    }
}
