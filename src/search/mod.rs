//! Candidate enumeration, trial evaluation, and the round driver.

pub mod combos;
pub mod config;
pub mod driver;
pub mod objective;
pub mod report;
pub mod resolver;

pub use combos::{distinct_orderings, IndependentCombos, InterleavedCombos};
pub use config::{CandidateLimit, EnumerationPolicy, SearchConfig};
pub use driver::{RoundPhase, SearchDriver};
pub use objective::Objective;
pub use report::{CharacterReport, RoundOutcome, RoundReport};
pub use resolver::{commit, run_trial};
