//! `unittest4`: coin totals from the hand.
//!
//! Apart from the first case, every case starts from a two-player table with
//! all piles emptied and zero coins, then builds hands, decks and discards
//! from fixed counts. Only `coins` may change.

use crate::cards::{Card, Kingdom};
use crate::core::{GameState, PlayerId};
use crate::harness::{identical, render_pile, Report};

use super::start_game;

const PLAYERS: usize = 2;

/// Most cards of one kind a case puts in a hand.
const MAX_COPIES: usize = 5;

/// A large pile of treasure and non-treasure that must not be counted.
const DECOY: [(Card, usize); 4] = [
    (Card::Copper, 10),
    (Card::Silver, 20),
    (Card::Gold, 30),
    (Card::Adventurer, 40),
];

const TREASURES: [(Card, u32); 3] = [(Card::Copper, 1), (Card::Silver, 2), (Card::Gold, 3)];

fn build(counts: &[(Card, usize)]) -> Vec<Card> {
    counts
        .iter()
        .flat_map(|&(card, n)| std::iter::repeat(card).take(n))
        .collect()
}

fn clear_table(state: &mut GameState) {
    for player in PlayerId::all(PLAYERS) {
        state.set_hand(player, &[]);
        state.set_deck(player, &[]);
        state.set_discard(player, &[]);
    }
    state.coins = 0;
}

/// Set up case `index`. Returns the player to count, the bonus and the
/// expected coins.
fn arrange(state: &mut GameState, index: usize, report: &mut Report) -> (PlayerId, u32, u32) {
    const SPREAD: usize = MAX_COPIES + 1;

    if index == 0 {
        report.note("new game");
        let coppers = state
            .hand(PlayerId::new(0))
            .iter()
            .filter(|&&c| c == Card::Copper)
            .count() as u32;
        return (PlayerId::new(0), 0, coppers);
    }
    clear_table(state);

    match index {
        1..=4 => {
            let j = index - 1;
            let player = PlayerId::new((j / 2) as u8);
            let in_deck = j % 2 == 1;
            for p in PlayerId::all(PLAYERS) {
                if in_deck {
                    state.set_deck(p, &build(&DECOY));
                } else {
                    state.set_discard(p, &build(&DECOY));
                }
            }
            report.note(format!(
                "empty hands, treasure in every {}",
                if in_deck { "deck" } else { "discard" }
            ));
            (player, 0, 0)
        }
        5..=16 => {
            let j = index - 5;
            let player = PlayerId::new((j / SPREAD) as u8);
            let n = j % SPREAD;
            state.set_hand(player, &build(&[(Card::Estate, n)]));
            state.set_hand(player.next(PLAYERS), &build(&DECOY));
            report.note(format!("{n} Estates in hand, treasure in the other hand"));
            (player, 0, 0)
        }
        17..=64 => {
            let j = index - 17;
            let player = PlayerId::new((j / (4 * SPREAD)) as u8);
            let kind = (j % (4 * SPREAD)) / SPREAD;
            let n = j % SPREAD;
            match TREASURES.get(kind) {
                Some(&(card, value)) => {
                    state.set_hand(player, &build(&[(card, n)]));
                    report.note(format!("{n} {card} in hand"));
                    (player, 0, value * n as u32)
                }
                None => {
                    report.note(format!("empty hand, bonus {n}"));
                    (player, n as u32, n as u32)
                }
            }
        }
        _ => {
            let j = index - 65;
            let player = PlayerId::new((j / SPREAD) as u8);
            let n = j % SPREAD;
            let hand: Vec<(Card, usize)> = TREASURES.iter().map(|&(card, _)| (card, n)).collect();
            state.set_hand(player, &build(&hand));
            report.note(format!("{n} of each treasure in hand, bonus {n}"));
            let per_set: u32 = TREASURES.iter().map(|&(_, value)| value).sum();
            (player, n as u32, per_set * n as u32 + n as u32)
        }
    }
}

pub(super) fn run(index: usize) -> Report {
    let mut state = match start_game(PLAYERS, Kingdom::first_set()) {
        Ok(state) => state,
        Err(report) => return report,
    };
    let mut report = Report::new();
    let (player, bonus, expected) = arrange(&mut state, index, &mut report);
    report.note(format!("{player} hand {}", render_pile(state.hand(player))));

    let before = state.clone();
    let result = state.update_coins(player, bonus);
    report.expect_eq("update_coins result", Ok(()), result);
    report.expect_eq("coins", expected, state.coins);

    let mut only_coins = before;
    only_coins.coins = expected;
    report.expect("nothing but coins changed", identical(&only_coins, &state));
    report
}
