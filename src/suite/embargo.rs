//! `cardtest4`: playing Embargo.
//!
//! Two players on a fixed kingdom that includes Embargo. Each case puts
//! Embargo at a hand position and targets one pile, possibly one that already
//! carries tokens or one that is not in the game.

use crate::cards::{Card, Kingdom};
use crate::effects::Choices;
use crate::harness::{check_embargo, render_pile, Report};

use super::start_game;

const PLAYERS: usize = 2;

const KINGDOM: [Card; 10] = [
    Card::Adventurer,
    Card::CouncilRoom,
    Card::Feast,
    Card::Gardens,
    Card::Mine,
    Card::Remodel,
    Card::Smithy,
    Card::Village,
    Card::Baron,
    Card::Embargo,
];

struct Case {
    hand_pos: usize,
    target: Card,
    tokens: u32,
    coins: u32,
}

const CASES: [Case; 4] = [
    Case {
        hand_pos: 0,
        target: Card::Province,
        tokens: 0,
        coins: 0,
    },
    Case {
        hand_pos: 3,
        target: Card::Gardens,
        tokens: 3,
        coins: 0,
    },
    Case {
        hand_pos: 1,
        target: Card::Gold,
        tokens: 0,
        coins: 5,
    },
    Case {
        hand_pos: 2,
        target: Card::SeaHag,
        tokens: 0,
        coins: 0,
    },
];

pub(super) fn run(index: usize) -> Report {
    let kingdom = match Kingdom::new(&KINGDOM) {
        Ok(kingdom) => kingdom,
        Err(err) => {
            let mut report = Report::new();
            report.expect(&format!("kingdom accepted ({err})"), false);
            return report;
        }
    };
    let mut state = match start_game(PLAYERS, kingdom) {
        Ok(state) => state,
        Err(report) => return report,
    };
    let case = &CASES[index];
    let player = state.whose_turn;

    state.hands[player][case.hand_pos] = Card::Embargo;
    state.embargo_tokens[case.target] = case.tokens;
    state.coins = case.coins;

    let mut report = Report::new();
    report.note(format!(
        "Embargo at position {} targeting {} ({} tokens, {} coins)",
        case.hand_pos, case.target, case.tokens, case.coins
    ));
    report.note(format!("{player} hand {}", render_pile(state.hand(player))));

    let before = state.clone();
    let choice1 = case.target as i32;
    let result = state.card_effect(Card::Embargo, Choices::card(case.target), case.hand_pos);
    report.merge(check_embargo(&before, &state, player, case.hand_pos, choice1, &result));
    report
}
