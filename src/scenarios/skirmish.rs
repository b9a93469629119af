//! The four-member skirmish party: three dwarves and a giant, one rivalry.
//!
//! This is the canonical planner workload. Every character can train any
//! other party member or rest; the rival pair can also attack each other.

use crate::catalog::{RestPolicy, Ruleset, TrainXpPolicy};
use crate::core::{Action, ActionMenu, CharacterId, Race, Roster, RosterBuilder};
use crate::error::PlanError;

/// A built skirmish scenario, ready to hand to the driver.
pub struct Skirmish {
    pub roster: Roster,
    pub rules: Ruleset,
    pub menus: Vec<ActionMenu>,
    pub glenefal: CharacterId,
    pub katorz: CharacterId,
    pub cradek: CharacterId,
    pub tiroloin: CharacterId,
}

/// Builder for the skirmish scenario.
pub struct SkirmishBuilder {
    starting_fatigue: u8,
    train_xp: TrainXpPolicy,
    rest: RestPolicy,
}

impl Default for SkirmishBuilder {
    fn default() -> Self {
        Self {
            starting_fatigue: 0,
            train_xp: TrainXpPolicy::default(),
            rest: RestPolicy::default(),
        }
    }
}

impl SkirmishBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fatigue every character starts the first round with.
    #[must_use]
    pub fn starting_fatigue(mut self, fatigue: u8) -> Self {
        self.starting_fatigue = fatigue;
        self
    }

    /// Who gains XP from a training session.
    #[must_use]
    pub fn train_xp(mut self, policy: TrainXpPolicy) -> Self {
        self.train_xp = policy;
        self
    }

    /// When resting is allowed.
    #[must_use]
    pub fn rest(mut self, policy: RestPolicy) -> Self {
        self.rest = policy;
        self
    }

    /// Build the roster, rules, and per-character menus.
    pub fn build(self) -> Result<Skirmish, PlanError> {
        let f = self.starting_fatigue;

        let mut b = RosterBuilder::new();
        let glenefal = b.character("Glenefal", Race::Dwarf, 4, 2170, f)?;
        let katorz = b.character("Katorz", Race::Dwarf, 4, 2265, f)?;
        let cradek = b.character("Cradek", Race::Dwarf, 3, 2287, f)?;
        let tiroloin = b.character("Tiroloin", Race::Giant, 3, 2095, f)?;
        let roster = b.build();

        let mut rules = Ruleset::new(self.train_xp, self.rest);
        rules.add_rivalry(glenefal, tiroloin)?;

        // Menu order per character: train each other member in arena order,
        // then attack the rival if one exists, then rest.
        let menus = roster
            .ids()
            .map(|actor| {
                let mut menu = ActionMenu::new();
                for target in roster.ids() {
                    if target != actor {
                        menu.push(Action::Train { target });
                    }
                }
                for target in roster.ids() {
                    if rules.are_rivals(actor, target) {
                        menu.push(Action::Attack { target });
                    }
                }
                menu.push(Action::Rest);
                menu
            })
            .collect();

        Ok(Skirmish {
            roster,
            rules,
            menus,
            glenefal,
            katorz,
            cradek,
            tiroloin,
        })
    }
}
