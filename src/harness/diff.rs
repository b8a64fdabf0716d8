//! Before/after state comparison.
//!
//! ## Side effects
//!
//! `SideEffects::scan` lists every field that differs between two
//! snapshots, except the acting player's own piles and the RNG. Oracles
//! then `allow` the fields the operation is supposed to touch and record
//! whatever is left as failures.
//!
//! ## Identity
//!
//! `identical` compares the bincode encoding of two states, so it also
//! covers the RNG position. A failed operation must pass it.

use std::fmt;

use im::Vector;
use rustc_hash::FxHashMap;

use super::pile::{render_pile, same_multiset};
use super::report::{Check, Report};
use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// Which of a player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Hand,
    Deck,
    Discard,
}

impl PileKind {
    pub const ALL: [PileKind; 3] = [PileKind::Hand, PileKind::Deck, PileKind::Discard];

    #[must_use]
    pub fn of(self, state: &GameState, player: PlayerId) -> &Vector<Card> {
        match self {
            PileKind::Hand => state.hand(player),
            PileKind::Deck => state.deck(player),
            PileKind::Discard => state.discard(player),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PileKind::Hand => "hand",
            PileKind::Deck => "deck",
            PileKind::Discard => "discard",
        }
    }
}

/// A state field outside the acting player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    NumPlayers,
    Supply(Card),
    Embargo(Card),
    Outpost,
    WhoseTurn,
    Phase,
    Actions,
    Buys,
    Coins,
    BonusCoins,
    TurnNumber,
    Played,
    Trash,
    Pile(PlayerId, PileKind),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::NumPlayers => write!(f, "number of players"),
            Field::Supply(card) => write!(f, "{card} supply"),
            Field::Embargo(card) => write!(f, "embargo tokens on {card}"),
            Field::Outpost => write!(f, "outpost flags"),
            Field::WhoseTurn => write!(f, "whose turn"),
            Field::Phase => write!(f, "phase"),
            Field::Actions => write!(f, "number of actions"),
            Field::Buys => write!(f, "number of buys"),
            Field::Coins => write!(f, "coins"),
            Field::BonusCoins => write!(f, "bonus coins"),
            Field::TurnNumber => write!(f, "turn number"),
            Field::Played => write!(f, "played cards"),
            Field::Trash => write!(f, "trash"),
            Field::Pile(player, pile) => write!(f, "{player}'s {}", pile.label()),
        }
    }
}

/// One changed field with its before and after values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    pub field: Field,
    pub before: String,
    pub after: String,
}

/// Fields that changed between two snapshots.
#[derive(Clone, Debug, Default)]
pub struct SideEffects {
    changes: Vec<Change>,
}

impl SideEffects {
    /// Compare everything except `acting`'s hand, deck and discard.
    #[must_use]
    pub fn scan(before: &GameState, after: &GameState, acting: PlayerId) -> Self {
        let mut scan = Self::default();

        scan.compare(Field::NumPlayers, before.num_players(), after.num_players());
        for card in Card::ALL {
            scan.compare(Field::Supply(card), before.supply[card], after.supply[card]);
            scan.compare(
                Field::Embargo(card),
                before.embargo_tokens[card],
                after.embargo_tokens[card],
            );
        }
        scan.compare(
            Field::Outpost,
            (before.outpost_played, before.outpost_turn),
            (after.outpost_played, after.outpost_turn),
        );
        scan.compare(Field::WhoseTurn, before.whose_turn, after.whose_turn);
        scan.compare(Field::Phase, before.phase, after.phase);
        scan.compare(Field::Actions, before.num_actions, after.num_actions);
        scan.compare(Field::Buys, before.num_buys, after.num_buys);
        scan.compare(Field::Coins, before.coins, after.coins);
        scan.compare(Field::BonusCoins, before.bonus_coins, after.bonus_coins);
        scan.compare(Field::TurnNumber, before.turn_number, after.turn_number);
        scan.compare_pile(Field::Played, &before.played, &after.played);
        scan.compare_pile(Field::Trash, &before.trash, &after.trash);

        if before.num_players() == after.num_players() {
            for player in before.player_ids().filter(|&p| p != acting) {
                for pile in PileKind::ALL {
                    scan.compare_pile(
                        Field::Pile(player, pile),
                        pile.of(before, player),
                        pile.of(after, player),
                    );
                }
            }
        }
        scan
    }

    fn compare<T: PartialEq + fmt::Debug>(&mut self, field: Field, before: T, after: T) {
        if before != after {
            self.changes.push(Change {
                field,
                before: format!("{before:?}"),
                after: format!("{after:?}"),
            });
        }
    }

    fn compare_pile(&mut self, field: Field, before: &Vector<Card>, after: &Vector<Card>) {
        if before != after {
            self.changes.push(Change {
                field,
                before: render_pile(before),
                after: render_pile(after),
            });
        }
    }

    /// Drop `field` from the list of unexpected changes.
    #[must_use]
    pub fn allow(mut self, field: Field) -> Self {
        self.changes.retain(|c| c.field != field);
        self
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// One FAIL per remaining change, or a single PASS if none remain.
    pub fn record(&self, report: &mut Report) {
        if self.changes.is_empty() {
            report.expect("no other state changed", true);
            return;
        }
        for change in &self.changes {
            report.push(Check::new(
                false,
                format!("no change to {}", change.field),
                format!("before = {}, after = {}", change.before, change.after),
            ));
        }
    }
}

/// A player's hand, deck or discard differ as multisets.
#[must_use]
pub fn player_piles_changed(before: &GameState, after: &GameState, player: PlayerId) -> bool {
    PileKind::ALL
        .iter()
        .any(|pile| !same_multiset(pile.of(before, player), pile.of(after, player)))
}

/// Cards whose supply changed, other than those in `except`.
#[must_use]
pub fn supplies_changed_except(
    before: &GameState,
    after: &GameState,
    except: &[Card],
) -> Vec<Card> {
    Card::ALL
        .into_iter()
        .filter(|card| !except.contains(card) && before.supply[*card] != after.supply[*card])
        .collect()
}

/// Cards whose embargo token count changed, other than those in `except`.
#[must_use]
pub fn embargo_changed_except(before: &GameState, after: &GameState, except: &[Card]) -> Vec<Card> {
    Card::ALL
        .into_iter()
        .filter(|card| {
            !except.contains(card) && before.embargo_tokens[*card] != after.embargo_tokens[*card]
        })
        .collect()
}

/// Byte-for-byte equality of the encoded states.
#[must_use]
pub fn identical(before: &GameState, after: &GameState) -> bool {
    match (bincode::serialize(before), bincode::serialize(after)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Count every card across a player's hand, deck and discard.
#[must_use]
pub fn card_tally(state: &GameState, player: PlayerId) -> FxHashMap<Card, usize> {
    let mut tally = FxHashMap::default();
    for pile in PileKind::ALL {
        for &card in pile.of(state, player) {
            *tally.entry(card).or_insert(0) += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_scan_ignores_acting_piles_and_rng() {
        let before = GameState::empty(2, 3);
        let mut after = before.clone();
        after.set_hand(p(0), &[Card::Gold]);
        after.rng.shuffle(&mut [1, 2, 3]);
        assert!(SideEffects::scan(&before, &after, p(0)).is_clean());
    }

    #[test]
    fn test_scan_reports_and_allows() {
        let mut before = GameState::empty(3, 3);
        before.supply[Card::Gold] = Some(30);
        let mut after = before.clone();
        after.supply[Card::Gold] = Some(29);
        after.coins = 4;
        after.set_discard(p(2), &[Card::Curse]);

        let scan = SideEffects::scan(&before, &after, p(0));
        let fields: Vec<Field> = scan.changes().iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Supply(Card::Gold),
                Field::Coins,
                Field::Pile(p(2), PileKind::Discard)
            ]
        );

        let scan = scan.allow(Field::Coins).allow(Field::Supply(Card::Gold));
        let mut report = Report::new();
        scan.record(&mut report);
        assert!(!report.all_passed());
        assert_eq!(
            report.checks[0].to_string(),
            "FAIL when checking no change to player 2's discard (before = [], after = [Curse])"
        );
    }

    #[test]
    fn test_identical_includes_rng() {
        let before = GameState::empty(2, 3);
        let mut after = before.clone();
        assert!(identical(&before, &after));
        let _ = after.rng.gen_range(0..10u32);
        assert!(!identical(&before, &after));
    }

    #[test]
    fn test_player_piles_changed_is_unordered() {
        let mut before = GameState::empty(2, 3);
        before.set_deck(p(1), &[Card::Copper, Card::Estate]);
        let mut after = before.clone();
        after.set_deck(p(1), &[Card::Estate, Card::Copper]);
        assert!(!player_piles_changed(&before, &after, p(1)));
        after.set_hand(p(1), &[Card::Copper]);
        assert!(player_piles_changed(&before, &after, p(1)));
    }

    #[test]
    fn test_supply_and_embargo_filters() {
        let before = GameState::empty(2, 3);
        let mut after = before.clone();
        after.supply[Card::Silver] = Some(1);
        after.embargo_tokens[Card::Duchy] = 2;
        assert_eq!(
            supplies_changed_except(&before, &after, &[]),
            vec![Card::Silver]
        );
        assert!(supplies_changed_except(&before, &after, &[Card::Silver]).is_empty());
        assert_eq!(
            embargo_changed_except(&before, &after, &[Card::Gold]),
            vec![Card::Duchy]
        );
    }

    #[test]
    fn test_card_tally() {
        let mut state = GameState::empty(2, 3);
        state.set_hand(p(0), &[Card::Copper]);
        state.set_deck(p(0), &[Card::Copper, Card::Estate]);
        let tally = card_tally(&state, p(0));
        assert_eq!(tally.get(&Card::Copper), Some(&2));
        assert_eq!(tally.get(&Card::Estate), Some(&1));
        assert_eq!(tally.get(&Card::Gold), None);
    }
}
