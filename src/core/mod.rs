//! Core planner types: characters, the roster arena, actions, RNG.
//!
//! These are the building blocks everything else composes: the catalog
//! interprets actions, the search enumerates and trials candidates, and the
//! roster is the single mutable store all of them operate on.

pub mod action;
pub mod character;
pub mod rng;
pub mod roster;

pub use action::{Action, ActionMenu, Candidate, PlanStep};
pub use character::{Character, CharacterId, Race, FATIGUE_MAX, ROUND_FATIGUE_DECAY};
pub use rng::PlannerRng;
pub use roster::{Roster, RosterBuilder, RosterSnapshot};
