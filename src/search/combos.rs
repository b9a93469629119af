//! Candidate enumeration under the two policies.
//!
//! Only characters with `actions_remaining > 0` and fatigue below the
//! ceiling participate. Both policies enumerate in a deterministic, stable
//! order; tie-breaking between equal-scoring candidates depends on it.
//!
//! ## Independent policy
//!
//! For each eligible character, all fixed-length sequences over its menu
//! (length = `actions_remaining`, with repetition), then the Cartesian
//! product across characters in arena order. Models each character's
//! actions executing as a block, before cross-character interleaving is
//! considered. Cost: `Π menu^budget`.
//!
//! ## Interleaved policy
//!
//! For each eligible character, all multisets of menu entries of size
//! `actions_remaining`; the Cartesian product across characters; and for
//! each product, every distinct ordering of the flattened (actor, action)
//! symbol multiset. Captures cross-character fatigue interactions but is
//! factorial in total action count, feasible only for small parties
//! (roughly 4 characters with 4 actions each). Larger inputs should use the
//! independent policy or a sampled candidate limit.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Action, ActionMenu, Candidate, CharacterId, PlanStep, Roster};

/// One eligible character's slice of the enumeration.
#[derive(Clone, Debug)]
struct Lane {
    actor: CharacterId,
    menu: Vec<Action>,
    /// Sequence length: the character's current `actions_remaining`.
    len: usize,
}

fn lanes_for(roster: &Roster, menus: &[ActionMenu]) -> Vec<Lane> {
    roster
        .iter()
        .filter(|(_, c)| c.can_act())
        .map(|(id, c)| Lane {
            actor: id,
            menu: menus[id.index()].to_vec(),
            len: c.actions_remaining as usize,
        })
        .collect()
}

/// Exhaustive independent-policy enumeration.
///
/// Digits form a mixed-radix odometer over all lanes; the last character's
/// last action varies fastest.
pub struct IndependentCombos {
    lanes: Vec<Lane>,
    digits: Vec<Vec<usize>>,
    done: bool,
}

impl IndependentCombos {
    /// Build the enumeration for the roster's current state.
    ///
    /// `menus` is indexed by arena order and must cover the whole roster;
    /// the driver validates that before construction.
    #[must_use]
    pub fn new(roster: &Roster, menus: &[ActionMenu]) -> Self {
        let lanes = lanes_for(roster, menus);
        let digits = lanes.iter().map(|l| vec![0; l.len]).collect();
        // A lane with an empty menu has no sequences, so the product is empty.
        let done = lanes.is_empty() || lanes.iter().any(|l| l.menu.is_empty());
        Self { lanes, digits, done }
    }

    /// Exact number of candidates this enumeration will produce.
    #[must_use]
    pub fn total(&self) -> u128 {
        if self.lanes.is_empty() || self.lanes.iter().any(|l| l.menu.is_empty()) {
            return 0;
        }
        self.lanes
            .iter()
            .map(|l| (l.menu.len() as u128).pow(l.len as u32))
            .product()
    }

    fn advance(&mut self) -> bool {
        for lane_idx in (0..self.lanes.len()).rev() {
            let menu_len = self.lanes[lane_idx].menu.len();
            for pos in (0..self.digits[lane_idx].len()).rev() {
                let d = &mut self.digits[lane_idx][pos];
                *d += 1;
                if *d < menu_len {
                    return true;
                }
                *d = 0;
            }
        }
        false
    }
}

impl Iterator for IndependentCombos {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.done {
            return None;
        }

        let mut steps = SmallVec::new();
        for (lane, digits) in self.lanes.iter().zip(&self.digits) {
            for &d in digits {
                steps.push(PlanStep::new(lane.actor, lane.menu[d]));
            }
        }

        if !self.advance() {
            self.done = true;
        }
        Some(Candidate { steps })
    }
}

/// All distinct orderings of a (actor, action) symbol multiset, filtered so
/// no actor appears more often than its budget allows.
///
/// Lexicographic next-permutation over the sorted symbols, so duplicates in
/// the multiset never produce duplicate orderings and output order is
/// stable. The per-actor count is permutation-invariant, so the budget
/// filter is decided once for the whole multiset.
#[must_use]
pub fn distinct_orderings(
    symbols: &[PlanStep],
    budgets: &FxHashMap<CharacterId, u8>,
) -> Vec<Candidate> {
    if symbols.is_empty() {
        return Vec::new();
    }

    let mut counts: FxHashMap<CharacterId, u8> = FxHashMap::default();
    for s in symbols {
        *counts.entry(s.actor).or_default() += 1;
    }
    for (actor, count) in &counts {
        if *count > budgets.get(actor).copied().unwrap_or(0) {
            return Vec::new();
        }
    }

    let mut current = symbols.to_vec();
    current.sort_unstable();

    let mut out = Vec::new();
    loop {
        out.push(Candidate::from_steps(current.iter().copied()));
        if !next_permutation(&mut current) {
            break;
        }
    }
    out
}

/// Rearrange into the lexicographically next permutation.
/// Returns false when `arr` was already the last one.
fn next_permutation<T: Ord>(arr: &mut [T]) -> bool {
    if arr.len() < 2 {
        return false;
    }
    let mut i = arr.len() - 1;
    while i > 0 && arr[i - 1] >= arr[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = arr.len() - 1;
    while arr[j] <= arr[i - 1] {
        j -= 1;
    }
    arr.swap(i - 1, j);
    arr[i..].reverse();
    true
}

/// Exhaustive interleaved-policy enumeration.
///
/// `picks` holds, per lane, a non-decreasing index vector into the menu: one
/// multiset choice of actions filling that character's budget. For every
/// combination of picks, `distinct_orderings` expands the global orderings.
pub struct InterleavedCombos {
    lanes: Vec<Lane>,
    picks: Vec<Vec<usize>>,
    budgets: FxHashMap<CharacterId, u8>,
    pending: std::vec::IntoIter<Candidate>,
    exhausted: bool,
}

impl InterleavedCombos {
    /// Build the enumeration for the roster's current state.
    #[must_use]
    pub fn new(roster: &Roster, menus: &[ActionMenu]) -> Self {
        let lanes = lanes_for(roster, menus);
        let picks = lanes.iter().map(|l| vec![0; l.len]).collect();
        let budgets = lanes.iter().map(|l| (l.actor, l.len as u8)).collect();
        let exhausted = lanes.is_empty() || lanes.iter().any(|l| l.menu.is_empty());
        Self {
            lanes,
            picks,
            budgets,
            pending: Vec::new().into_iter(),
            exhausted,
        }
    }

    fn flatten(&self) -> Vec<PlanStep> {
        let mut symbols = Vec::new();
        for (lane, picks) in self.lanes.iter().zip(&self.picks) {
            for &p in picks {
                symbols.push(PlanStep::new(lane.actor, lane.menu[p]));
            }
        }
        symbols
    }

    /// Advance to the next combination of per-lane multisets
    /// (combinations-with-repetition successor, last lane fastest).
    fn advance_picks(&mut self) -> bool {
        for lane_idx in (0..self.lanes.len()).rev() {
            let menu_len = self.lanes[lane_idx].menu.len();
            let picks = &mut self.picks[lane_idx];

            if let Some(pos) = (0..picks.len()).rev().find(|&p| picks[p] + 1 < menu_len) {
                let v = picks[pos] + 1;
                for p in pos..picks.len() {
                    picks[p] = v;
                }
                return true;
            }
            for p in picks.iter_mut() {
                *p = 0;
            }
        }
        false
    }
}

impl Iterator for InterleavedCombos {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }
            if self.exhausted {
                return None;
            }
            let symbols = Self::flatten(self);
            self.pending = distinct_orderings(&symbols, &self.budgets).into_iter();
            if !self.advance_picks() {
                self.exhausted = true;
            }
        }
    }
}
