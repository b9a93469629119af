//! Ready-made scenarios for demos and tests.

pub mod skirmish;

pub use skirmish::{Skirmish, SkirmishBuilder};
