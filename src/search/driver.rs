//! The search driver: exhaustive evaluation, commit, round reset.
//!
//! One call to `plan_round` walks the whole round state machine:
//!
//! `Idle -> Generating -> Evaluating -> Committing -> Reset -> Idle`
//!
//! Every candidate the generator produces (under the configured limit) is
//! trialed through the resolver; the best valid score is tracked with
//! strict improvement only, so ties keep the earliest candidate in
//! enumeration order. A winner must also strictly beat the do-nothing
//! baseline before it is committed. An empty result is a normal outcome:
//! the driver reports it and the round still resets.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Ruleset;
use crate::core::{ActionMenu, Candidate, PlannerRng, Roster};
use crate::error::PlanError;

use super::combos::{IndependentCombos, InterleavedCombos};
use super::config::{CandidateLimit, EnumerationPolicy, SearchConfig};
use super::objective::Objective;
use super::report::{CharacterReport, RoundOutcome, RoundReport};
use super::resolver;

/// Where the driver is in the current round.
///
/// Terminal state per round is `Idle`; there is no failed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Idle,
    Generating,
    Evaluating,
    Committing,
    Reset,
}

/// Drives one planning round at a time over a roster.
pub struct SearchDriver {
    rules: Ruleset,
    config: SearchConfig,
    phase: RoundPhase,
}

impl SearchDriver {
    /// Create a driver with the given rules and configuration.
    #[must_use]
    pub fn new(rules: Ruleset, config: SearchConfig) -> Self {
        Self {
            rules,
            config,
            phase: RoundPhase::Idle,
        }
    }

    /// Current phase of the round state machine.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The rules this driver resolves actions with.
    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.rules
    }

    /// The driver configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plan, commit, and reset one round.
    ///
    /// `menus` is the fixed action menu per character, indexed in arena
    /// order. On return the roster holds the committed effects plus the
    /// round reset, and the report describes what happened.
    pub fn plan_round(
        &mut self,
        roster: &mut Roster,
        menus: &[ActionMenu],
    ) -> Result<RoundReport, PlanError> {
        if menus.len() != roster.len() {
            return Err(PlanError::MenuMismatch {
                expected: roster.len(),
                found: menus.len(),
            });
        }

        let objective = self.config.objective;
        // Scores the untouched state and validates the roster size up front.
        let baseline = objective.score(roster)?;

        self.phase = RoundPhase::Generating;
        let search_space_empty = roster.eligible().is_empty();
        let candidates = if search_space_empty {
            Vec::new()
        } else {
            self.collect_candidates(roster, menus)
        };
        debug!(
            candidates = candidates.len(),
            policy = ?self.config.policy,
            baseline,
            "candidate generation finished"
        );

        self.phase = RoundPhase::Evaluating;
        let (best, valid_candidates) = if self.config.parallel {
            self.evaluate_parallel(roster, &candidates, objective)?
        } else {
            self.evaluate_serial(roster, &candidates, objective)?
        };

        self.phase = RoundPhase::Committing;
        let winner = best.filter(|&(_, score)| score > baseline);
        let plan = winner.map(|(idx, _)| candidates[idx].clone());
        if let Some(p) = &plan {
            resolver::commit(roster, &self.rules, p)?;
            let (_, score) = winner.unwrap_or_default();
            info!(baseline, score, steps = p.len(), "committed winning plan");
        }

        let outcome = if plan.is_some() {
            RoundOutcome::Committed
        } else if search_space_empty {
            RoundOutcome::EmptySearchSpace
        } else {
            RoundOutcome::NoImprovement
        };

        // Per-character lines reflect the committed state, pre-reset.
        let characters = roster
            .iter()
            .map(|(id, c)| CharacterReport {
                name: c.name.clone(),
                race: c.race,
                actions: plan
                    .as_ref()
                    .map(|p| p.actions_for(id).collect())
                    .unwrap_or_default(),
                xp: c.xp,
                fatigue: c.fatigue,
            })
            .collect();

        self.phase = RoundPhase::Reset;
        roster.reset_round();
        self.phase = RoundPhase::Idle;

        Ok(RoundReport {
            outcome,
            plan,
            characters,
            baseline_score: baseline,
            best_score: best.map(|(_, score)| score),
            candidates_evaluated: candidates.len(),
            valid_candidates,
        })
    }

    fn collect_candidates(&self, roster: &Roster, menus: &[ActionMenu]) -> Vec<Candidate> {
        match self.config.policy {
            EnumerationPolicy::Independent => {
                self.apply_limit(IndependentCombos::new(roster, menus))
            }
            EnumerationPolicy::Interleaved => {
                self.apply_limit(InterleavedCombos::new(roster, menus))
            }
        }
    }

    fn apply_limit<I: Iterator<Item = Candidate>>(&self, iter: I) -> Vec<Candidate> {
        match self.config.limit {
            CandidateLimit::None => iter.collect(),
            CandidateLimit::Cap(n) => iter.take(n).collect(),
            CandidateLimit::Sample { size, seed } => {
                reservoir_sample(iter, size, PlannerRng::new(seed))
            }
        }
    }

    fn evaluate_serial(
        &self,
        roster: &mut Roster,
        candidates: &[Candidate],
        objective: Objective,
    ) -> Result<(Option<(usize, i64)>, usize), PlanError> {
        let mut best: Option<(usize, i64)> = None;
        let mut valid = 0usize;

        for (idx, cand) in candidates.iter().enumerate() {
            if let Some(score) = resolver::run_trial(roster, &self.rules, cand, objective)? {
                valid += 1;
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((idx, score));
                }
            }

            let done = idx + 1;
            if self.config.progress_interval > 0 && done % self.config.progress_interval == 0 {
                debug!(evaluated = done, total = candidates.len(), "search progress");
            }
        }

        Ok((best, valid))
    }

    /// Parallel trials, each against an isolated roster copy. The reduction
    /// over the collected scores is serial, so the winner (max score,
    /// earliest index on ties) matches the serial loop exactly.
    fn evaluate_parallel(
        &self,
        roster: &Roster,
        candidates: &[Candidate],
        objective: Objective,
    ) -> Result<(Option<(usize, i64)>, usize), PlanError> {
        let progress = AtomicUsize::new(0);
        let interval = self.config.progress_interval;
        let total = candidates.len();
        let rules = &self.rules;

        let scores: Vec<Option<i64>> = candidates
            .par_iter()
            .map(|cand| {
                let mut local = roster.clone();
                let result = resolver::run_trial(&mut local, rules, cand, objective);
                if interval > 0 {
                    let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % interval == 0 {
                        debug!(evaluated = done, total, "search progress");
                    }
                }
                result
            })
            .collect::<Result<Vec<_>, PlanError>>()?;

        let mut best: Option<(usize, i64)> = None;
        let mut valid = 0usize;
        for (idx, score) in scores.into_iter().enumerate() {
            if let Some(score) = score {
                valid += 1;
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((idx, score));
                }
            }
        }

        Ok((best, valid))
    }
}

/// Uniform reservoir sample of an enumeration, re-sorted into enumeration
/// order so tie-breaking stays stable.
fn reservoir_sample<I: Iterator<Item = Candidate>>(
    iter: I,
    size: usize,
    mut rng: PlannerRng,
) -> Vec<Candidate> {
    if size == 0 {
        return Vec::new();
    }

    let mut tagged: Vec<(usize, Candidate)> = Vec::with_capacity(size);
    for (i, cand) in iter.enumerate() {
        if tagged.len() < size {
            tagged.push((i, cand));
        } else {
            let j = rng.gen_range_usize(0..i + 1);
            if j < size {
                tagged[j] = (i, cand);
            }
        }
    }

    tagged.sort_unstable_by_key(|&(i, _)| i);
    tagged.into_iter().map(|(_, c)| c).collect()
}
