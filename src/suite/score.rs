//! `unittest3`: victory point totals.
//!
//! Player 0's hand, discard and deck are replaced with a fixed layout of
//! victory cards, then scored. The expected total comes from a local point
//! table, not from the card definitions.

use crate::cards::{Card, Kingdom};
use crate::core::PlayerId;
use crate::harness::{identical, render_pile, Report};

use super::start_game;

const PLAYERS: usize = 2;

const VICTORY: [Card; 6] = [
    Card::Curse,
    Card::Estate,
    Card::Duchy,
    Card::Province,
    Card::GreatHall,
    Card::Gardens,
];

/// Hand, discard, deck.
const LOCATIONS: [&str; 3] = ["hand", "discard", "deck"];

/// Coppers added to hand, discard and deck next to a lone Gardens.
const GARDENS_FILLER: [[usize; 3]; 3] = [[3, 3, 2], [3, 3, 3], [4, 3, 3]];

type Layout = [Vec<Card>; 3];

fn copies(card: Card, n: usize) -> Vec<Card> {
    vec![card; n]
}

/// Build the layout for case `index` and describe it.
fn layout(index: usize) -> (String, Layout) {
    let mut piles: Layout = Default::default();
    let description = match index {
        0..=17 => {
            let (card, loc) = (VICTORY[index / 3], index % 3);
            piles[loc] = vec![card];
            format!("one {card} in {}", LOCATIONS[loc])
        }
        18..=23 => {
            let card = VICTORY[index - 18];
            for pile in &mut piles {
                pile.push(card);
            }
            format!("one {card} in every location")
        }
        24..=29 => {
            let card = VICTORY[index - 24];
            for (loc, pile) in piles.iter_mut().enumerate() {
                *pile = copies(card, loc + 1);
            }
            format!("{card} one in hand, two in discard, three in deck")
        }
        30..=32 => {
            let loc = index - 30;
            piles[loc] = VICTORY.to_vec();
            format!("one of every victory card in {}", LOCATIONS[loc])
        }
        33..=35 => {
            let loc = index - 33;
            piles[loc] = VICTORY
                .iter()
                .enumerate()
                .flat_map(|(k, &card)| copies(card, k + 1))
                .collect();
            format!("one to six copies of the victory cards in {}", LOCATIONS[loc])
        }
        36..=39 => {
            let n = index - 36;
            for pile in &mut piles {
                *pile = VICTORY.iter().flat_map(|&card| copies(card, n)).collect();
            }
            format!("{n} of every victory card in every location")
        }
        _ => {
            let j = index - 40;
            let loc = j / 3;
            let filler = GARDENS_FILLER[j % 3];
            for (pile, &n) in piles.iter_mut().zip(&filler) {
                *pile = copies(Card::Copper, n);
            }
            piles[loc].push(Card::Gardens);
            format!(
                "Gardens in {} with {} other cards",
                LOCATIONS[loc],
                filler.iter().sum::<usize>()
            )
        }
    };
    (description, piles)
}

fn expected_score(piles: &Layout) -> i32 {
    let total = piles.iter().map(Vec::len).sum::<usize>() as i32;
    piles
        .iter()
        .flatten()
        .map(|card| match card {
            Card::Curse => -1,
            Card::Estate | Card::GreatHall => 1,
            Card::Duchy => 3,
            Card::Province => 6,
            Card::Gardens => total / 10,
            _ => 0,
        })
        .sum()
}

pub(super) fn run(index: usize) -> Report {
    let mut state = match start_game(PLAYERS, Kingdom::first_set()) {
        Ok(state) => state,
        Err(report) => return report,
    };
    let player = PlayerId::new(0);
    let (description, piles) = layout(index);
    let [hand, discard, deck] = &piles;
    state.set_hand(player, hand);
    state.set_discard(player, discard);
    state.set_deck(player, deck);

    let mut report = Report::new();
    report.note(description);
    report.note(format!(
        "hand {} discard {} deck {}",
        render_pile(hand),
        render_pile(discard),
        render_pile(deck)
    ));

    let before = state.clone();
    report.expect_eq("score", Ok(expected_score(&piles)), state.score_for(player));
    report.expect("game state unchanged", identical(&before, &state));
    report
}
