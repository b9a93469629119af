//! Action catalog: preconditions, effects, and the configurable rule
//! policy variants.

pub mod rules;

pub use rules::{
    ActionError, RestPolicy, Ruleset, TrainXpPolicy, ATTACK_XP, REST_RECOVERY, REST_XP, TRAIN_XP,
};
