//! `unittest1`: end-of-game detection on a four-player table.
//!
//! 24 cases per kingdom (first set, then second set):
//! - 0: a fresh game is not over
//! - 1, 2: one Province left, then none
//! - 3..=7: zero to four empty base piles
//! - 8..=23: every rotating triple of the sixteen non-Province piles emptied

use crate::cards::{Card, Kingdom};
use crate::harness::{identical, Report};
use crate::rules::EMPTY_PILES_TO_END;

use super::start_game;

const PLAYERS: usize = 4;

const CASES_PER_KINGDOM: usize = 24;

/// Base piles emptied, in order, by cases 3 to 7.
const BASE_EMPTYING_ORDER: [Card; 6] = [
    Card::Curse,
    Card::Estate,
    Card::Duchy,
    Card::Copper,
    Card::Silver,
    Card::Gold,
];

pub(super) fn run(index: usize) -> Report {
    let kingdom = if index < CASES_PER_KINGDOM {
        Kingdom::first_set()
    } else {
        Kingdom::second_set()
    };
    let mut state = match start_game(PLAYERS, kingdom.clone()) {
        Ok(state) => state,
        Err(report) => return report,
    };
    let mut report = Report::new();

    let case = index % CASES_PER_KINGDOM;
    let expected = match case {
        0 => {
            report.note("new game");
            false
        }
        1 | 2 => {
            let left = 2 - case as u32;
            state.supply[Card::Province] = Some(left);
            report.note(format!("{left} Province left"));
            left == 0
        }
        3..=7 => {
            let empty = case - 3;
            for &card in &BASE_EMPTYING_ORDER[..empty] {
                state.supply[card] = Some(0);
            }
            report.note(format!("{empty} empty base piles"));
            empty >= EMPTY_PILES_TO_END
        }
        _ => {
            let piles: Vec<Card> = BASE_EMPTYING_ORDER
                .iter()
                .chain(kingdom.cards())
                .copied()
                .collect();
            let start = case - 8;
            let emptied: Vec<Card> = (0..EMPTY_PILES_TO_END)
                .map(|k| piles[(start + k) % piles.len()])
                .collect();
            for &card in &emptied {
                state.supply[card] = Some(0);
            }
            report.note(format!(
                "empty piles: {}",
                emptied.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
            ));
            true
        }
    };

    let before = state.clone();
    report.expect_eq("is_game_over", expected, state.is_game_over());
    report.expect("game state unchanged", identical(&before, &state));
    report
}
