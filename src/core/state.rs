//! Game state record.
//!
//! ## GameState
//!
//! Everything a turn can read or change:
//! - Supply counts and embargo tokens per card kind
//! - Turn owner, phase, and the action/buy/coin counters (with the
//!   effect bonus that `play_card` keeps across recounts)
//! - Per-player hand, deck and discard piles
//! - The played pile and the trash
//! - The shuffle RNG
//!
//! Piles are `im::Vector`s, so cloning a state for a before/after
//! comparison is O(1). Pile counts are always the pile lengths.
//! The top of a deck is the end of its vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardMap};
use crate::error::{EngineError, Result};

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Action,
    Buy,
    Cleanup,
}

/// Pile selector for gains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GainTarget {
    Discard,
    Deck,
    Hand,
}

impl GainTarget {
    pub const ALL: [GainTarget; 3] = [GainTarget::Discard, GainTarget::Deck, GainTarget::Hand];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GainTarget::Discard => "discard pile",
            GainTarget::Deck => "deck",
            GainTarget::Hand => "hand",
        }
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Shared piles ===
    /// Remaining copies per card. `None` means the card is not in this game.
    pub supply: CardMap<Option<u32>>,

    /// Embargo tokens per supply pile.
    pub embargo_tokens: CardMap<u32>,

    // === Turn ===
    pub whose_turn: PlayerId,
    pub phase: Phase,
    pub num_actions: u32,
    pub num_buys: u32,
    pub coins: u32,

    /// Coins granted by action effects this turn.
    pub bonus_coins: u32,

    /// Outpost was played this turn.
    pub outpost_played: bool,

    /// The current turn is an Outpost extra turn.
    pub outpost_turn: bool,

    /// Turns started so far, including the first.
    pub turn_number: u32,

    // === Player piles ===
    pub hands: PlayerMap<Vector<Card>>,

    /// Top of deck is the back.
    pub decks: PlayerMap<Vector<Card>>,

    pub discards: PlayerMap<Vector<Card>>,

    /// Cards in play for the current turn.
    pub played: Vector<Card>,

    pub trash: Vector<Card>,

    pub rng: GameRng,
}

impl GameState {
    /// An empty table: no supply, no cards anywhere, player 0 to act.
    ///
    /// Use `GameState::initialize` for a real game. This is
    /// the starting point for hand-built fixtures.
    #[must_use]
    pub fn empty(player_count: usize, seed: u64) -> Self {
        Self {
            supply: CardMap::default(),
            embargo_tokens: CardMap::default(),
            whose_turn: PlayerId::new(0),
            phase: Phase::Action,
            num_actions: 1,
            num_buys: 1,
            coins: 0,
            bonus_coins: 0,
            outpost_played: false,
            outpost_turn: false,
            turn_number: 1,
            hands: PlayerMap::with_default(player_count),
            decks: PlayerMap::with_default(player_count),
            discards: PlayerMap::with_default(player_count),
            played: Vector::new(),
            trash: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.hands.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.num_players())
    }

    /// Fail with `InvalidPlayer` for seats outside this table.
    pub fn check_player(&self, player: PlayerId) -> Result<()> {
        self.hands
            .try_get(player)
            .map(|_| ())
            .ok_or(EngineError::InvalidPlayer(player))
    }

    // === Pile access ===

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<Card> {
        &self.hands[player]
    }

    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Vector<Card> {
        &self.decks[player]
    }

    #[must_use]
    pub fn discard(&self, player: PlayerId) -> &Vector<Card> {
        &self.discards[player]
    }

    /// Hand size of the player whose turn it is.
    #[must_use]
    pub fn num_hand_cards(&self) -> usize {
        self.hands[self.whose_turn].len()
    }

    /// Card at `pos` in the current player's hand.
    #[must_use]
    pub fn hand_card(&self, pos: usize) -> Option<Card> {
        self.hands[self.whose_turn].get(pos).copied()
    }

    /// Remaining supply, treating cards not in the game as 0.
    #[must_use]
    pub fn supply_count(&self, card: Card) -> u32 {
        self.supply[card].unwrap_or(0)
    }

    #[must_use]
    pub fn get_cost(&self, card: Card) -> u32 {
        card.cost()
    }

    #[must_use]
    pub fn in_game(&self, card: Card) -> bool {
        self.supply[card].is_some()
    }

    /// Copies of `card` across a player's hand, deck and discard.
    #[must_use]
    pub fn full_deck_count(&self, player: PlayerId, card: Card) -> usize {
        [&self.hands[player], &self.decks[player], &self.discards[player]]
            .iter()
            .map(|pile| pile.iter().filter(|&&c| c == card).count())
            .sum()
    }

    /// Size of a player's hand, deck and discard combined.
    #[must_use]
    pub fn total_cards(&self, player: PlayerId) -> usize {
        self.hands[player].len() + self.decks[player].len() + self.discards[player].len()
    }

    /// Replace a player's pile contents, e.g. for fixtures.
    pub fn set_hand(&mut self, player: PlayerId, cards: &[Card]) {
        self.hands[player] = cards.iter().copied().collect();
    }

    /// Replace a player's deck. The last card is the top.
    pub fn set_deck(&mut self, player: PlayerId, cards: &[Card]) {
        self.decks[player] = cards.iter().copied().collect();
    }

    pub fn set_discard(&mut self, player: PlayerId, cards: &[Card]) {
        self.discards[player] = cards.iter().copied().collect();
    }
}
