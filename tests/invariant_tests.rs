//! Property tests for the state invariants every action must preserve.

use fairturn::catalog::{RestPolicy, Ruleset, TrainXpPolicy};
use fairturn::core::{
    Action, CharacterId, PlanStep, Race, Roster, RosterBuilder, FATIGUE_MAX,
};
use proptest::prelude::*;

fn party(fatigues: &[u8], budgets: &[u8]) -> Roster {
    let mut b = RosterBuilder::new();
    for (i, (&f, &budget)) in fatigues.iter().zip(budgets).enumerate() {
        b.character(format!("c{i}"), Race::Dwarf, budget, 100 + i as i64, f)
            .unwrap();
    }
    b.build()
}

/// Any action index into a small fixed repertoire for a 3-member party.
fn arbitrary_step() -> impl Strategy<Value = PlanStep> {
    (0_u32..3, 0_u32..3, 0_usize..3).prop_map(|(actor, target, kind)| {
        let actor = CharacterId::new(actor);
        let target = CharacterId::new(target);
        let action = match kind {
            0 => Action::Train { target },
            1 => Action::Attack { target },
            _ => Action::Rest,
        };
        PlanStep::new(actor, action)
    })
}

proptest! {
    #[test]
    fn applied_actions_preserve_the_state_bounds(
        fatigues in proptest::collection::vec(0_u8..=6, 3),
        budgets in proptest::collection::vec(1_u8..=4, 3),
        steps in proptest::collection::vec(arbitrary_step(), 0..12),
    ) {
        let mut roster = party(&fatigues, &budgets);
        let mut rules = Ruleset::default();
        rules.add_rivalry(CharacterId::new(0), CharacterId::new(2)).unwrap();

        let xp_before: Vec<i64> = roster.iter().map(|(_, c)| c.xp).collect();

        for step in steps {
            // Rejected steps must leave state untouched; accepted ones must
            // keep every bound
            let _ = rules.apply(&mut roster, step);
            for (_, c) in roster.iter() {
                prop_assert!(c.fatigue <= FATIGUE_MAX);
                prop_assert!(c.actions_remaining <= c.action_budget);
            }
        }

        let xp_after: Vec<i64> = roster.iter().map(|(_, c)| c.xp).collect();
        prop_assert!(xp_after.iter().zip(&xp_before).all(|(now, then)| now >= then));
    }

    #[test]
    fn rest_never_increases_fatigue(fatigue in 0_u8..=6, budget in 1_u8..=4) {
        let mut roster = party(&[fatigue], &[budget]);
        let rules = Ruleset::default();

        let id = CharacterId::new(0);
        rules.apply(&mut roster, PlanStep::new(id, Action::Rest)).unwrap();

        prop_assert_eq!(roster.get(id).fatigue, fatigue.saturating_sub(4));
    }

    #[test]
    fn strict_rest_demands_fatigue_and_pays_xp(fatigue in 0_u8..=6) {
        let mut roster = party(&[fatigue], &[2]);
        let rules = Ruleset::new(TrainXpPolicy::ActorOnly, RestPolicy::WhenFatigued);

        let id = CharacterId::new(0);
        let result = rules.apply(&mut roster, PlanStep::new(id, Action::Rest));

        if fatigue == 0 {
            prop_assert!(result.is_err());
            prop_assert_eq!(roster.get(id).xp, 100);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(roster.get(id).xp, 101);
            prop_assert_eq!(roster.get(id).fatigue, fatigue.saturating_sub(4));
        }
    }

    #[test]
    fn snapshot_restore_round_trips_through_any_trial(
        fatigues in proptest::collection::vec(0_u8..=5, 3),
        steps in proptest::collection::vec(arbitrary_step(), 0..12),
    ) {
        let mut roster = party(&fatigues, &[3, 3, 3]);
        let mut rules = Ruleset::new(TrainXpPolicy::Mutual, RestPolicy::Always);
        rules.add_rivalry(CharacterId::new(1), CharacterId::new(2)).unwrap();

        let before = roster.clone();
        let snapshot = roster.snapshot();
        for step in steps {
            let _ = rules.apply(&mut roster, step);
        }
        roster.restore(&snapshot);

        prop_assert_eq!(roster, before);
    }
}
