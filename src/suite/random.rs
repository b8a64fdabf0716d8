//! Randomized card tests: `randomtestadventurer`, `randomtestcard1` (Smithy)
//! and `randomtestcard2` (Remodel).
//!
//! Case `n` seeds the generator with `n`, builds one random game state around
//! the card and checks the play against its oracle. Each program draws from
//! its own context stream, so case `n` of one program does not mirror case
//! `n` of another.

use crate::cards::Card;
use crate::core::{GameRng, GameState};
use crate::effects::Choices;
use crate::error::Result;
use crate::harness::fuzz::{fuzz_adventurer, fuzz_remodel, fuzz_smithy};
use crate::harness::{check_adventurer, check_remodel, check_smithy, render_pile, Report};

/// Play `card` on a copy of `state`. Returns the state after the play.
fn play(
    state: &GameState,
    card: Card,
    choices: Choices,
    hand_pos: usize,
) -> (GameState, Result<()>) {
    let mut after = state.clone();
    let result = after.card_effect(card, choices, hand_pos);
    (after, result)
}

fn case_rng(program: &str, case: usize) -> GameRng {
    GameRng::new(case as u64).for_context(program)
}

fn describe(case: usize, state: &GameState, hand_pos: usize) -> String {
    let player = state.whose_turn;
    format!(
        "case {case}: {player} hand {} (position {hand_pos}), deck {}, discard {}",
        render_pile(state.hand(player)),
        state.deck(player).len(),
        state.discard(player).len()
    )
}

pub(super) fn adventurer(case: usize) -> Report {
    let mut rng = case_rng("randomtestadventurer", case);
    let (before, hand_pos) = fuzz_adventurer(&mut rng);
    let (after, result) = play(&before, Card::Adventurer, Choices::default(), hand_pos);

    let mut report = Report::new();
    report.note(describe(case, &before, hand_pos));
    report.merge(check_adventurer(&before, &after, before.whose_turn, &result));
    report
}

pub(super) fn smithy(case: usize) -> Report {
    let mut rng = case_rng("randomtestcard1", case);
    let (before, hand_pos) = fuzz_smithy(&mut rng);
    let (after, result) = play(&before, Card::Smithy, Choices::default(), hand_pos);

    let mut report = Report::new();
    report.note(describe(case, &before, hand_pos));
    report.merge(check_smithy(&before, &after, before.whose_turn, &result));
    report
}

pub(super) fn remodel(case: usize) -> Report {
    let mut rng = case_rng("randomtestcard2", case);
    let (before, hand_pos, choices) = fuzz_remodel(&mut rng);
    let (after, result) = play(&before, Card::Remodel, choices, hand_pos);

    let mut report = Report::new();
    report.note(describe(case, &before, hand_pos));
    report.note(format!(
        "trash position {}, gain card {}",
        choices.choice1, choices.choice2
    ));
    report.merge(check_remodel(
        &before,
        &after,
        before.whose_turn,
        hand_pos,
        choices,
        &result,
    ));
    report
}
