//! Enumeration counts and ordering guarantees for the candidate generators.

use fairturn::core::{Action, ActionMenu, PlanStep, Roster, RosterBuilder};
use fairturn::core::{CharacterId, Race};
use fairturn::search::combos::{distinct_orderings, IndependentCombos, InterleavedCombos};
use rustc_hash::FxHashMap;
use smallvec::smallvec;

fn pair_with_budget(budget: u8) -> (Roster, Vec<ActionMenu>, CharacterId, CharacterId) {
    let mut b = RosterBuilder::new();
    let a = b.character("Alda", Race::Dwarf, budget, 10, 0).unwrap();
    let t = b.character("Brok", Race::Giant, budget, 5, 0).unwrap();
    let roster = b.build();
    let menus = vec![
        smallvec![Action::Rest, Action::Train { target: t }] as ActionMenu,
        smallvec![Action::Rest, Action::Train { target: a }] as ActionMenu,
    ];
    (roster, menus, a, t)
}

#[test]
fn test_independent_two_by_two_is_four_candidates() {
    let (roster, menus, _, _) = pair_with_budget(1);

    let combos = IndependentCombos::new(&roster, &menus);
    assert_eq!(combos.total(), 4);
    assert_eq!(combos.count(), 4);
}

#[test]
fn test_two_symbol_multiset_has_two_orderings() {
    let (_, _, a, t) = pair_with_budget(1);

    let symbols = [
        PlanStep::new(a, Action::Rest),
        PlanStep::new(t, Action::Rest),
    ];
    let mut budgets = FxHashMap::default();
    budgets.insert(a, 1u8);
    budgets.insert(t, 1u8);

    let orderings = distinct_orderings(&symbols, &budgets);
    assert_eq!(orderings.len(), 2);
    assert_ne!(orderings[0], orderings[1]);
}

#[test]
fn test_independent_budget_two_is_sixteen_candidates() {
    let (roster, menus, _, _) = pair_with_budget(2);

    let all: Vec<_> = IndependentCombos::new(&roster, &menus).collect();
    assert_eq!(all.len(), 16);

    // Deterministic and stable across runs
    let again: Vec<_> = IndependentCombos::new(&roster, &menus).collect();
    assert_eq!(all, again);

    // Every candidate spends both full budgets
    assert!(all.iter().all(|c| c.len() == 4));
}

#[test]
fn test_independent_candidates_group_by_actor() {
    let (roster, menus, a, t) = pair_with_budget(2);

    // One character's whole sequence precedes the next character's
    for cand in IndependentCombos::new(&roster, &menus) {
        let actors: Vec<_> = cand.iter().map(|s| s.actor).collect();
        assert_eq!(actors, vec![a, a, t, t]);
    }
}

#[test]
fn test_interleaved_respects_budgets() {
    let (roster, menus, a, t) = pair_with_budget(2);

    for cand in InterleavedCombos::new(&roster, &menus) {
        assert_eq!(cand.len(), 4);
        assert_eq!(cand.actions_for(a).count(), 2);
        assert_eq!(cand.actions_for(t).count(), 2);
    }
}

#[test]
fn test_exhausted_character_is_skipped() {
    let (mut roster, menus, a, t) = pair_with_budget(1);
    roster.get_mut(a).actions_remaining = 0;

    let all: Vec<_> = IndependentCombos::new(&roster, &menus).collect();
    assert_eq!(all.len(), 2);
    assert!(all
        .iter()
        .all(|c| c.iter().all(|s| s.actor == t)));
}

#[test]
fn test_fatigued_out_character_is_skipped() {
    let (mut roster, menus, a, _) = pair_with_budget(1);
    roster.get_mut(a).fatigue = 6;

    let all: Vec<_> = InterleavedCombos::new(&roster, &menus).collect();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|c| c.len() == 1));
}
