//! New game setup.

use tracing::debug;

use crate::cards::Card;
use crate::core::{GameConfig, GameState, PlayerId, HAND_SIZE};
use crate::error::Result;

/// Starting deck: seven Coppers and three Estates.
pub const STARTING_DECK: [(Card, usize); 2] = [(Card::Copper, 7), (Card::Estate, 3)];

impl GameState {
    /// Set up a new game.
    ///
    /// Fills the supply for the table size and kingdom, deals every player
    /// a shuffled starting deck, and starts player 0's turn with a five card
    /// hand.
    pub fn initialize(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut state = GameState::empty(config.player_count, config.seed);
        for card in Card::ALL {
            state.supply[card] = config.starting_supply(card);
        }

        for player in PlayerId::all(config.player_count) {
            let deck: Vec<Card> = STARTING_DECK
                .iter()
                .flat_map(|&(card, count)| std::iter::repeat(card).take(count))
                .collect();
            state.set_deck(player, &deck);
            state.shuffle(player)?;
        }

        let first = PlayerId::new(0);
        state.draw_cards(first, HAND_SIZE)?;
        state.update_coins(first, 0)?;

        debug!(
            players = config.player_count,
            seed = config.seed,
            "initialized game"
        );
        Ok(state)
    }
}
