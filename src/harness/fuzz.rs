//! Random game states for the randomized card tests.
//!
//! `random_state` fills every field with an arbitrary well-formed value.
//! The `fuzz_*` helpers then overwrite only what the card under test needs:
//! the acting player, the played card's position, and bounded pile sizes.
//! Everything else stays random so the side-effect scan has something to
//! notice.

use std::ops::RangeInclusive;

use im::Vector;

use crate::cards::{Card, CARD_COUNT};
use crate::core::{GameRng, GameState, Phase, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use crate::effects::Choices;

/// Largest pile `random_state` builds.
const MAX_RANDOM_PILE: usize = 20;

/// Largest supply pile `random_state` builds.
const MAX_RANDOM_SUPPLY: u32 = 40;

/// Size bounds for the acting player's piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileLimits {
    pub hand: RangeInclusive<usize>,
    pub deck: RangeInclusive<usize>,
    pub discard: RangeInclusive<usize>,
}

impl PileLimits {
    #[must_use]
    pub fn adventurer() -> Self {
        Self {
            hand: 1..=20,
            deck: 0..=20,
            discard: 0..=20,
        }
    }

    /// Small piles: every Smithy scenario shows up with a handful of cards.
    #[must_use]
    pub fn smithy() -> Self {
        Self {
            hand: 1..=5,
            deck: 0..=5,
            discard: 0..=5,
        }
    }

    #[must_use]
    pub fn remodel() -> Self {
        Self {
            hand: 1..=20,
            deck: 0..=20,
            discard: 0..=20,
        }
    }
}

pub fn random_card(rng: &mut GameRng) -> Card {
    Card::ALL[rng.gen_range(0..CARD_COUNT)]
}

fn random_pile(rng: &mut GameRng, len: RangeInclusive<usize>) -> Vector<Card> {
    let len = rng.gen_range(len);
    (0..len).map(|_| random_card(rng)).collect()
}

/// A state with every field random.
pub fn random_state(rng: &mut GameRng) -> GameState {
    let players = rng.gen_range(MIN_PLAYERS..=MAX_PLAYERS);
    let mut state = GameState::empty(players, 0);
    state.rng = rng.fork();

    for card in Card::ALL {
        state.supply[card] = if rng.gen_bool(0.2) {
            None
        } else {
            Some(rng.gen_range(0..=MAX_RANDOM_SUPPLY))
        };
        state.embargo_tokens[card] = rng.gen_range(0..=3);
    }
    for player in PlayerId::all(players) {
        state.hands[player] = random_pile(rng, 0..=MAX_RANDOM_PILE);
        state.decks[player] = random_pile(rng, 0..=MAX_RANDOM_PILE);
        state.discards[player] = random_pile(rng, 0..=MAX_RANDOM_PILE);
    }
    state.whose_turn = PlayerId::new(rng.gen_range(0..players as u8));
    state.phase = match rng.gen_range(0..3) {
        0 => Phase::Action,
        1 => Phase::Buy,
        _ => Phase::Cleanup,
    };
    state.num_actions = rng.gen_range(0..=5);
    state.num_buys = rng.gen_range(0..=5);
    state.coins = rng.gen_range(0..=20);
    state.bonus_coins = rng.gen_range(0..=state.coins);
    state.outpost_played = rng.gen_bool(0.5);
    state.outpost_turn = rng.gen_bool(0.5);
    state.turn_number = rng.gen_range(1..=50);
    state.played = random_pile(rng, 0..=10);
    state.trash = random_pile(rng, 0..=10);
    state
}

/// Hand player 0 a random hand containing `card`, with pile sizes bounded by
/// `limits`, and make it player 0's turn. Returns `card`'s hand position.
pub fn prepare_for(
    state: &mut GameState,
    card: Card,
    rng: &mut GameRng,
    limits: &PileLimits,
) -> usize {
    let player = PlayerId::new(0);
    state.whose_turn = player;

    let mut hand = random_pile(rng, limits.hand.clone());
    if hand.is_empty() {
        hand.push_back(card);
    }
    let pos = rng.gen_range(0..hand.len());
    hand[pos] = card;
    state.hands[player] = hand;
    state.decks[player] = random_pile(rng, limits.deck.clone());
    state.discards[player] = random_pile(rng, limits.discard.clone());
    pos
}

/// A random Adventurer play. Returns the state and Adventurer's position.
pub fn fuzz_adventurer(rng: &mut GameRng) -> (GameState, usize) {
    let mut state = random_state(rng);
    let pos = prepare_for(&mut state, Card::Adventurer, rng, &PileLimits::adventurer());
    (state, pos)
}

/// A random Smithy play. Returns the state and Smithy's position.
pub fn fuzz_smithy(rng: &mut GameRng) -> (GameState, usize) {
    let mut state = random_state(rng);
    let pos = prepare_for(&mut state, Card::Smithy, rng, &PileLimits::smithy());
    (state, pos)
}

/// A random Remodel play.
///
/// The kingdom is ten random kingdom cards including Remodel, with the
/// other kingdom cards out of the game. Every supply pile holds 0 to 4
/// cards so empty piles come up often. choice1 is any hand position and
/// choice2 any card.
pub fn fuzz_remodel(rng: &mut GameRng) -> (GameState, usize, Choices) {
    let mut state = random_state(rng);

    let others: Vec<Card> = Card::ALL
        .into_iter()
        .filter(|&c| c.is_kingdom() && c != Card::Remodel)
        .collect();
    let mut kingdom = rng.choose_multiple(&others, 9);
    kingdom.push(Card::Remodel);
    for card in Card::ALL {
        state.supply[card] = if !card.is_kingdom() || kingdom.contains(&card) {
            Some(rng.gen_range(0..=4))
        } else {
            None
        };
    }

    let pos = prepare_for(&mut state, Card::Remodel, rng, &PileLimits::remodel());
    let hand_len = state.hands[PlayerId::new(0)].len();
    let choices = Choices::new(
        rng.gen_range(0..hand_len as i32),
        rng.gen_range(0..CARD_COUNT as i32),
        0,
    );
    (state, pos, choices)
}
