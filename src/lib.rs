//! # fairturn
//!
//! A maximin turn planner for small turn-based parties.
//!
//! Each round the planner enumerates every way the party could spend its
//! action budgets, trials each candidate against live state with full
//! rollback, and commits the plan that maximizes the XP of the weakest
//! party members. Only strict improvements over doing nothing are applied.
//!
//! ## Design Principles
//!
//! 1. **Simulate, then roll back**: Trials mutate the real roster behind a
//!    drop guard, so validity always reflects the actual sequential state.
//!
//! 2. **Deterministic**: Enumeration order is fixed, ties keep the earliest
//!    candidate, and the parallel evaluator picks the same winner as the
//!    serial loop.
//!
//! 3. **Policies over branches**: Rule variants (who gains training XP,
//!    when rest is legal) are explicit `Ruleset` policies, not forks.
//!
//! ## Modules
//!
//! - `core`: Character ids, roster arena, actions, snapshots, RNG
//! - `catalog`: Action rules, XP and fatigue constants, policy variants
//! - `search`: Candidate enumeration, trial resolver, objective, driver
//! - `scenarios`: Ready-made parties for demos and tests

pub mod catalog;
pub mod core;
pub mod error;
pub mod scenarios;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMenu, Candidate, Character, CharacterId, PlanStep, PlannerRng, Race, Roster,
    RosterBuilder, RosterSnapshot, FATIGUE_MAX, ROUND_FATIGUE_DECAY,
};

pub use crate::catalog::{
    ActionError, RestPolicy, Ruleset, TrainXpPolicy, ATTACK_XP, REST_RECOVERY, REST_XP, TRAIN_XP,
};

pub use crate::error::PlanError;

pub use crate::search::{
    CandidateLimit, CharacterReport, EnumerationPolicy, Objective, RoundOutcome, RoundPhase,
    RoundReport, SearchConfig, SearchDriver,
};

pub use crate::scenarios::{Skirmish, SkirmishBuilder};
