//! Round reports: what the driver committed and where the roster ended up.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Candidate, Race};

/// How a round concluded. All three are normal outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A candidate beat the do-nothing baseline and was applied.
    Committed,
    /// Valid candidates existed but none improved on the baseline.
    NoImprovement,
    /// No character was eligible to act; the round was a no-op.
    EmptySearchSpace,
}

/// One character's line in the round report: the actions it performed in
/// the committed plan (empty when nothing was committed) and its resulting
/// totals, captured after the commit and before round reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReport {
    pub name: String,
    pub race: Race,
    pub actions: Vec<Action>,
    pub xp: i64,
    pub fatigue: u8,
}

/// Result of one planned round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,

    /// The committed candidate, in application order.
    pub plan: Option<Candidate>,

    /// Per-character lines, in arena order (covers the whole roster).
    pub characters: Vec<CharacterReport>,

    /// Objective score of the untouched state.
    pub baseline_score: i64,

    /// Best valid score seen, committed or not.
    pub best_score: Option<i64>,

    /// Candidates trialed this round.
    pub candidates_evaluated: usize,

    /// Candidates that passed every precondition.
    pub valid_candidates: usize,
}

impl RoundReport {
    /// Render an action with character names instead of raw ids.
    fn describe(&self, action: Action) -> String {
        match action {
            Action::Train { target } => {
                format!("train {}", self.characters[target.index()].name)
            }
            Action::Attack { target } => {
                format!("attack {}", self.characters[target.index()].name)
            }
            Action::Rest => "rest".to_string(),
        }
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            RoundOutcome::Committed => writeln!(
                f,
                "committed plan: baseline {} -> {} ({} of {} candidates valid)",
                self.baseline_score,
                self.best_score.unwrap_or(self.baseline_score),
                self.valid_candidates,
                self.candidates_evaluated,
            )?,
            RoundOutcome::NoImprovement => writeln!(
                f,
                "no improving action found ({} of {} candidates valid, baseline {})",
                self.valid_candidates, self.candidates_evaluated, self.baseline_score,
            )?,
            RoundOutcome::EmptySearchSpace => {
                writeln!(f, "no character is eligible to act; round skipped")?;
            }
        }

        for line in &self.characters {
            let actions = if line.actions.is_empty() {
                "-".to_string()
            } else {
                line.actions
                    .iter()
                    .map(|&a| self.describe(a))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                f,
                "  {} ({}): {} | XP = {}, fatigue = {}",
                line.name, line.race, actions, line.xp, line.fatigue
            )?;
        }
        Ok(())
    }
}
