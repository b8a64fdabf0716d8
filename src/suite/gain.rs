//! `unittest2`: gaining cards into each pile.
//!
//! Two players, first kingdom set, Remodel pile emptied. Cases run through
//! player, then card (available Adventurer, empty Remodel, Minion not in
//! the game), then destination pile.

use crate::cards::{Card, Kingdom};
use crate::core::{GainTarget, PlayerId};
use crate::error::EngineError;
use crate::harness::{identical, render_pile, Field, PileKind, Report, SideEffects};

use super::start_game;

const PLAYERS: usize = 2;

const CARDS: [Card; 3] = [Card::Adventurer, Card::Remodel, Card::Minion];

fn pile_for(to: GainTarget) -> PileKind {
    match to {
        GainTarget::Discard => PileKind::Discard,
        GainTarget::Deck => PileKind::Deck,
        GainTarget::Hand => PileKind::Hand,
    }
}

pub(super) fn run(index: usize) -> Report {
    let mut state = match start_game(PLAYERS, Kingdom::first_set()) {
        Ok(state) => state,
        Err(report) => return report,
    };
    state.supply[Card::Remodel] = Some(0);

    let player = PlayerId::new((index / 9) as u8);
    let card = CARDS[(index / 3) % 3];
    let to = GainTarget::ALL[index % 3];
    let mut report = Report::new();
    report.note(format!("{player} gains {card} to {}", to.label()));

    let before = state.clone();
    let result = state.gain_card(card, player, to);

    match before.supply[card] {
        Some(left) if left > 0 => {
            report.expect_eq("gain_card result", Ok(()), result);
            report.expect_eq(&format!("{card} supply"), Some(left - 1), state.supply[card]);
            for pile in PileKind::ALL {
                let was = pile.of(&before, player);
                let now = pile.of(&state, player);
                if pile == pile_for(to) {
                    report.expect_eq(&format!("{} count", pile.label()), was.len() + 1, now.len());
                    report.expect_eq(&format!("top of {}", pile.label()), Some(&card), now.back());
                    report.expect(
                        &format!("rest of {} unchanged", pile.label()),
                        now.iter().take(was.len()).eq(was.iter()),
                    );
                } else {
                    report.expect_eq(
                        &format!("{} unchanged", pile.label()),
                        render_pile(was),
                        render_pile(now),
                    );
                }
            }
            SideEffects::scan(&before, &state, player)
                .allow(Field::Supply(card))
                .record(&mut report);
        }
        Some(_) => {
            report.expect_eq("gain_card result", Err(EngineError::SupplyEmpty(card)), result);
            report.expect("game state unchanged", identical(&before, &state));
        }
        None => {
            report.expect_eq("gain_card result", Err(EngineError::NotInGame(card)), result);
            report.expect("game state unchanged", identical(&before, &state));
        }
    }
    report
}
