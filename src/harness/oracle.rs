//! Expected-outcome oracles for the card tests.
//!
//! Cards drawn after a reshuffle are unpredictable, so most oracles work on
//! pile counts. Each one classifies the precondition into a named scenario,
//! derives the expected deltas for that scenario, compares them against the
//! after-state, and finishes with a side-effect scan.

use std::fmt;

use super::diff::{card_tally, identical, Field, SideEffects};
use super::pile::{count_card, count_treasure, same_multiset};
use super::report::Report;
use crate::cards::Card;
use crate::core::{GameState, PlayerId};
use crate::effects::{as_card, as_hand_pos, Choices};
use crate::error::Result;

/// Cards Smithy draws.
const SMITHY_DRAW: usize = 3;

/// `(drawn from deck, drawn after reshuffle)` in scenario order.
const SMITHY_SCENARIOS: [(usize, usize); 10] = [
    (3, 0),
    (2, 1),
    (2, 0),
    (1, 2),
    (1, 1),
    (1, 0),
    (0, 3),
    (0, 2),
    (0, 1),
    (0, 0),
];

fn hand_without(state: &GameState, player: PlayerId, positions: &[usize]) -> Vec<Card> {
    state
        .hand(player)
        .iter()
        .enumerate()
        .filter(|(i, _)| !positions.contains(i))
        .map(|(_, &c)| c)
        .collect()
}

fn expect_rejected(
    report: &mut Report,
    before: &GameState,
    after: &GameState,
    result: &Result<()>,
) {
    report.expect_eq("card effect result", "Err", outcome(result));
    report.expect("game state unchanged", identical(before, after));
}

fn outcome(result: &Result<()>) -> &'static str {
    if result.is_ok() {
        "Ok"
    } else {
        "Err"
    }
}

// =============================================================================
// Smithy
// =============================================================================

/// Where Smithy's three cards come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmithyScenario {
    pub from_deck: usize,
    pub after_shuffle: usize,
}

impl SmithyScenario {
    #[must_use]
    pub fn classify(deck: usize, discard: usize) -> Self {
        let from_deck = deck.min(SMITHY_DRAW);
        let after_shuffle = (SMITHY_DRAW - from_deck).min(discard);
        Self {
            from_deck,
            after_shuffle,
        }
    }

    /// Scenario number, 1 through 10.
    #[must_use]
    pub fn number(self) -> usize {
        SMITHY_SCENARIOS
            .iter()
            .position(|&s| s == (self.from_deck, self.after_shuffle))
            .map_or(0, |i| i + 1)
    }

    #[must_use]
    pub fn drawn(self) -> usize {
        self.from_deck + self.after_shuffle
    }

    /// The deck ran out before three cards were drawn.
    #[must_use]
    pub fn reshuffled(self) -> bool {
        self.from_deck < SMITHY_DRAW
    }
}

impl fmt::Display for SmithyScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scenario {} ({} drawn from deck, {} drawn after shuffle)",
            self.number(),
            self.from_deck,
            self.after_shuffle
        )
    }
}

/// Check a Smithy play by `player`.
pub fn check_smithy(
    before: &GameState,
    after: &GameState,
    player: PlayerId,
    result: &Result<()>,
) -> Report {
    let mut report = Report::new();
    let scenario =
        SmithyScenario::classify(before.deck(player).len(), before.discard(player).len());
    report.note(format!("Results from {scenario}"));

    report.expect_eq("card effect result", "Ok", outcome(result));
    report.expect_eq(
        "hand count",
        before.hand(player).len() + scenario.drawn() - 1,
        after.hand(player).len(),
    );
    if scenario.reshuffled() {
        report.expect_eq("discard count", 1, after.discard(player).len());
        report.expect_eq(
            "deck count",
            before.discard(player).len() - scenario.after_shuffle,
            after.deck(player).len(),
        );
    } else {
        report.expect_eq(
            "discard count",
            before.discard(player).len() + 1,
            after.discard(player).len(),
        );
        report.expect_eq(
            "deck count",
            before.deck(player).len() - SMITHY_DRAW,
            after.deck(player).len(),
        );
    }
    report.expect_eq(
        "top of discard",
        Some(&Card::Smithy),
        after.discard(player).back(),
    );
    report.expect(
        "player's cards conserved",
        card_tally(before, player) == card_tally(after, player),
    );

    SideEffects::scan(before, after, player).record(&mut report);
    report
}

// =============================================================================
// Adventurer
// =============================================================================

/// Treasures Adventurer can find in deck and discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdventurerScenario {
    OneTreasure,
    TwoTreasures,
    NoTreasure,
}

impl AdventurerScenario {
    #[must_use]
    pub fn classify(available: usize) -> Self {
        match available {
            0 => AdventurerScenario::NoTreasure,
            1 => AdventurerScenario::OneTreasure,
            _ => AdventurerScenario::TwoTreasures,
        }
    }

    #[must_use]
    pub const fn treasures(self) -> usize {
        match self {
            AdventurerScenario::NoTreasure => 0,
            AdventurerScenario::OneTreasure => 1,
            AdventurerScenario::TwoTreasures => 2,
        }
    }

    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            AdventurerScenario::OneTreasure => 1,
            AdventurerScenario::TwoTreasures => 2,
            AdventurerScenario::NoTreasure => 3,
        }
    }
}

impl fmt::Display for AdventurerScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scenario {} ({} treasure moved into hand)",
            self.number(),
            self.treasures()
        )
    }
}

/// Check an Adventurer play by `player`.
pub fn check_adventurer(
    before: &GameState,
    after: &GameState,
    player: PlayerId,
    result: &Result<()>,
) -> Report {
    let mut report = Report::new();
    let rest = |state: &GameState| -> Vec<Card> {
        state
            .deck(player)
            .iter()
            .chain(state.discard(player).iter())
            .copied()
            .collect()
    };
    let rest_before = rest(before);
    let rest_after = rest(after);
    let scenario = AdventurerScenario::classify(count_treasure(&rest_before));
    let found = scenario.treasures() as i64;
    report.note(format!("Results from {scenario}"));

    report.expect_eq("card effect result", "Ok", outcome(result));
    report.expect_eq(
        "adventurers in hand",
        count_card(before.hand(player), Card::Adventurer) as i64 - 1,
        count_card(after.hand(player), Card::Adventurer) as i64,
    );
    report.expect_eq(
        "adventurers in deck and discard",
        count_card(&rest_before, Card::Adventurer) + 1,
        count_card(&rest_after, Card::Adventurer),
    );
    report.expect_eq(
        "treasures in hand",
        count_treasure(before.hand(player)) as i64 + found,
        count_treasure(after.hand(player)) as i64,
    );
    report.expect_eq(
        "treasures in deck and discard",
        count_treasure(&rest_before) as i64 - found,
        count_treasure(&rest_after) as i64,
    );
    report.expect_eq(
        "hand count",
        before.hand(player).len() as i64 + found - 1,
        after.hand(player).len() as i64,
    );
    report.expect_eq(
        "deck and discard count",
        rest_before.len() as i64 + 1 - found,
        rest_after.len() as i64,
    );

    SideEffects::scan(before, after, player).record(&mut report);
    report
}

// =============================================================================
// Remodel
// =============================================================================

/// How a Remodel play resolves, checked in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemodelScenario {
    /// Remodel is the only card in hand.
    OnlyCard,
    /// choice1 points at Remodel itself.
    TrashSelf,
    /// The wanted card costs more than the trashed card plus two.
    TooExpensive,
    /// The wanted card is not in the game or its pile is empty.
    Unavailable,
    /// Trash the card at `trashed_pos` and gain `wanted`.
    Success { trashed_pos: usize, wanted: Card },
}

impl RemodelScenario {
    /// `None` when the choices do not name a hand position and a card.
    #[must_use]
    pub fn classify(
        state: &GameState,
        player: PlayerId,
        hand_pos: usize,
        choices: Choices,
    ) -> Option<Self> {
        let hand = state.hand(player);
        if hand.len() == 1 {
            return Some(RemodelScenario::OnlyCard);
        }
        let pos = as_hand_pos(choices.choice1).ok().filter(|&p| p < hand.len())?;
        if pos == hand_pos {
            return Some(RemodelScenario::TrashSelf);
        }
        let wanted = as_card(choices.choice2).ok()?;
        if state.get_cost(wanted) > state.get_cost(hand[pos]) + 2 {
            return Some(RemodelScenario::TooExpensive);
        }
        if state.supply_count(wanted) == 0 {
            return Some(RemodelScenario::Unavailable);
        }
        Some(RemodelScenario::Success {
            trashed_pos: pos,
            wanted,
        })
    }
}

/// Check a Remodel play at `hand_pos` with `choices`.
pub fn check_remodel(
    before: &GameState,
    after: &GameState,
    player: PlayerId,
    hand_pos: usize,
    choices: Choices,
    result: &Result<()>,
) -> Report {
    let mut report = Report::new();
    let scenario = RemodelScenario::classify(before, player, hand_pos, choices);
    report.note(match scenario {
        Some(s) => format!("Results from {s:?}"),
        None => "Results from invalid choices".to_string(),
    });

    match scenario {
        Some(RemodelScenario::OnlyCard) => {
            report.expect_eq("card effect result", "Ok", outcome(result));
            report.expect("hand is empty", after.hand(player).is_empty());
            report.expect_eq(
                "discard count",
                before.discard(player).len() + 1,
                after.discard(player).len(),
            );
            report.expect_eq("top of discard", Some(&Card::Remodel), after.discard(player).back());
            report.expect_eq("deck", before.deck(player), after.deck(player));
            SideEffects::scan(before, after, player).record(&mut report);
        }
        Some(RemodelScenario::Success {
            trashed_pos,
            wanted,
        }) => {
            let trashed = before.hand(player)[trashed_pos];
            report.note(format!("trashing {trashed} for {wanted}"));

            report.expect_eq("card effect result", "Ok", outcome(result));
            report.expect(
                "hand lost the trashed card and Remodel",
                same_multiset(
                    &hand_without(before, player, &[trashed_pos, hand_pos]),
                    after.hand(player),
                ),
            );
            let top_two: Vec<Card> = after.discard(player).iter().rev().take(2).copied().collect();
            report.expect_eq("top of discard", vec![Card::Remodel, wanted], top_two);
            report.expect_eq(
                "discard count",
                before.discard(player).len() + 2,
                after.discard(player).len(),
            );
            report.expect_eq("trash count", before.trash.len() + 1, after.trash.len());
            report.expect_eq("top of trash", Some(&trashed), after.trash.back());
            report.expect_eq(
                &format!("{wanted} supply"),
                before.supply[wanted].map(|n| n - 1),
                after.supply[wanted],
            );
            report.expect_eq("deck", before.deck(player), after.deck(player));
            SideEffects::scan(before, after, player)
                .allow(Field::Supply(wanted))
                .allow(Field::Trash)
                .record(&mut report);
        }
        _ => expect_rejected(&mut report, before, after, result),
    }
    report
}

// =============================================================================
// Embargo
// =============================================================================

/// What an Embargo play with a given choice1 should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbargoOutcome {
    Embargoed(Card),
    NotInGame(Card),
    NotACard,
}

impl EmbargoOutcome {
    #[must_use]
    pub fn classify(state: &GameState, choice1: i32) -> Self {
        match as_card(choice1) {
            Ok(card) if state.in_game(card) => EmbargoOutcome::Embargoed(card),
            Ok(card) => EmbargoOutcome::NotInGame(card),
            Err(_) => EmbargoOutcome::NotACard,
        }
    }
}

/// Check an Embargo play at `hand_pos` targeting `choice1`.
pub fn check_embargo(
    before: &GameState,
    after: &GameState,
    player: PlayerId,
    hand_pos: usize,
    choice1: i32,
    result: &Result<()>,
) -> Report {
    let mut report = Report::new();
    let expected = EmbargoOutcome::classify(before, choice1);
    report.note(format!("Embargo expecting {expected:?}"));

    let EmbargoOutcome::Embargoed(target) = expected else {
        expect_rejected(&mut report, before, after, result);
        return report;
    };

    report.expect_eq("card effect result", "Ok", outcome(result));
    report.expect_eq("coins", before.coins + 2, after.coins);
    report.expect_eq(
        &format!("embargo tokens on {target}"),
        before.embargo_tokens[target] + 1,
        after.embargo_tokens[target],
    );
    report.expect(
        "hand lost only the Embargo",
        same_multiset(&hand_without(before, player, &[hand_pos]), after.hand(player)),
    );
    report.expect_eq(
        "embargoes in hand",
        count_card(before.hand(player), Card::Embargo).saturating_sub(1),
        count_card(after.hand(player), Card::Embargo),
    );
    report.expect_eq("discard", before.discard(player), after.discard(player));
    report.expect_eq("deck", before.deck(player), after.deck(player));
    report.expect_eq("trash count", before.trash.len() + 1, after.trash.len());
    report.expect_eq("top of trash", Some(&Card::Embargo), after.trash.back());

    SideEffects::scan(before, after, player)
        .allow(Field::Coins)
        .allow(Field::Embargo(target))
        .allow(Field::Trash)
        .record(&mut report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    #[test]
    fn test_smithy_scenarios_cover_all_ten() {
        let mut seen: Vec<usize> = Vec::new();
        for deck in 0..=4 {
            for discard in 0..=4 {
                seen.push(SmithyScenario::classify(deck, discard).number());
            }
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
        assert_eq!(SmithyScenario::classify(7, 0).number(), 1);
        assert_eq!(SmithyScenario::classify(1, 1).number(), 5);
        assert!(!SmithyScenario::classify(3, 9).reshuffled());
    }

    #[test]
    fn test_smithy_oracle_accepts_engine() {
        let mut before = GameState::empty(2, 11);
        before.set_hand(p0(), &[Card::Smithy, Card::Copper]);
        before.set_deck(p0(), &[Card::Estate]);
        before.set_discard(p0(), &[Card::Gold, Card::Silver, Card::Duchy]);
        let mut after = before.clone();
        let result = after.card_effect(Card::Smithy, Choices::default(), 0);

        let report = check_smithy(&before, &after, p0(), &result);
        assert!(report.all_passed(), "{report}");
        assert_eq!(
            report.notes[0],
            "Results from scenario 4 (1 drawn from deck, 2 drawn after shuffle)"
        );
    }

    #[test]
    fn test_smithy_oracle_flags_wrong_counts() {
        let mut before = GameState::empty(2, 11);
        before.set_hand(p0(), &[Card::Smithy]);
        before.set_deck(p0(), &[Card::Estate; 4]);
        let mut after = before.clone();
        // only two cards drawn
        after.draw_cards(p0(), 2).unwrap();
        after.discard_card(0, p0(), false).unwrap();

        let report = check_smithy(&before, &after, p0(), &Ok(()));
        assert!(!report.all_passed());
    }

    #[test]
    fn test_adventurer_classify() {
        assert_eq!(
            AdventurerScenario::classify(0),
            AdventurerScenario::NoTreasure
        );
        assert_eq!(
            AdventurerScenario::classify(1),
            AdventurerScenario::OneTreasure
        );
        assert_eq!(
            AdventurerScenario::classify(9),
            AdventurerScenario::TwoTreasures
        );
    }

    #[test]
    fn test_adventurer_oracle_accepts_engine() {
        let mut before = GameState::empty(3, 5);
        before.set_hand(p0(), &[Card::Estate, Card::Adventurer]);
        before.set_deck(p0(), &[Card::Gold, Card::Estate]);
        before.set_discard(p0(), &[Card::Copper, Card::Adventurer, Card::Silver]);
        let mut after = before.clone();
        let result = after.card_effect(Card::Adventurer, Choices::default(), 1);

        let report = check_adventurer(&before, &after, p0(), &result);
        assert!(report.all_passed(), "{report}");
    }

    #[test]
    fn test_remodel_classify_order() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Gold] = Some(0);
        state.supply[Card::Silver] = Some(10);
        state.set_hand(p0(), &[Card::Remodel]);
        assert_eq!(
            RemodelScenario::classify(&state, p0(), 0, Choices::default()),
            Some(RemodelScenario::OnlyCard)
        );

        state.set_hand(p0(), &[Card::Remodel, Card::Copper, Card::Gold]);
        let classify = |c: Choices| RemodelScenario::classify(&state, p0(), 0, c);
        assert_eq!(
            classify(Choices::trash_and_gain(0, Card::Silver)),
            Some(RemodelScenario::TrashSelf)
        );
        assert_eq!(
            classify(Choices::trash_and_gain(1, Card::Gold)),
            Some(RemodelScenario::TooExpensive)
        );
        assert_eq!(
            classify(Choices::trash_and_gain(2, Card::Gold)),
            Some(RemodelScenario::Unavailable)
        );
        assert_eq!(
            classify(Choices::trash_and_gain(2, Card::Minion)),
            Some(RemodelScenario::Unavailable)
        );
        assert_eq!(
            classify(Choices::trash_and_gain(2, Card::Silver)),
            Some(RemodelScenario::Success {
                trashed_pos: 2,
                wanted: Card::Silver
            })
        );
        assert_eq!(classify(Choices::new(7, 5, 0)), None);
    }

    #[test]
    fn test_remodel_oracle_accepts_engine() {
        let mut before = GameState::empty(2, 1);
        before.supply[Card::Silver] = Some(10);
        before.set_hand(p0(), &[Card::Estate, Card::Remodel, Card::Copper]);
        for choices in [
            Choices::trash_and_gain(0, Card::Silver),
            Choices::trash_and_gain(1, Card::Silver),
            Choices::trash_and_gain(2, Card::Silver),
            Choices::trash_and_gain(0, Card::Gold),
        ] {
            let mut after = before.clone();
            let result = after.card_effect(Card::Remodel, choices, 1);
            let report = check_remodel(&before, &after, p0(), 1, choices, &result);
            assert!(report.all_passed(), "{report}");
        }
    }

    #[test]
    fn test_embargo_oracle_accepts_engine() {
        let mut before = GameState::empty(2, 1);
        before.supply[Card::Province] = Some(8);
        before.set_hand(p0(), &[Card::Copper, Card::Embargo]);
        for choice1 in [Card::Province as i32, Card::SeaHag as i32, -3] {
            let mut after = before.clone();
            let result = after.card_effect(Card::Embargo, Choices::new(choice1, 0, 0), 1);
            let report = check_embargo(&before, &after, p0(), 1, choice1, &result);
            assert!(report.all_passed(), "{report}");
        }
    }

    #[test]
    fn test_embargo_oracle_flags_extra_coins() {
        let mut before = GameState::empty(2, 1);
        before.supply[Card::Province] = Some(8);
        before.set_hand(p0(), &[Card::Embargo]);
        let mut after = before.clone();
        after
            .card_effect(Card::Embargo, Choices::card(Card::Province), 0)
            .unwrap();
        after.num_buys += 1;
        let report = check_embargo(&before, &after, p0(), 0, Card::Province as i32, &Ok(()));
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }
}
