//! Game setup configuration.
//!
//! A `GameConfig` names the table size, the kingdom and the shuffle seed.
//! Supply sizes are derived from the table size when the game starts.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Kingdom};
use crate::error::{EngineError, Result};

/// Most seats a table supports.
pub const MAX_PLAYERS: usize = 4;

/// Fewest seats a table supports.
pub const MIN_PLAYERS: usize = 2;

/// Cards dealt at the start of a turn.
pub const HAND_SIZE: usize = 5;

/// Cards dealt for an Outpost extra turn.
pub const OUTPOST_HAND_SIZE: usize = 3;

/// Setup for a new game.
///
/// ## Example
///
/// ```
/// use dominion_check::core::GameConfig;
/// use dominion_check::cards::Kingdom;
///
/// let config = GameConfig::new(3)
///     .with_kingdom(Kingdom::second_set())
///     .with_seed(68);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    pub kingdom: Kingdom,
    pub seed: u64,
}

impl GameConfig {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            kingdom: Kingdom::default(),
            seed: 0,
        }
    }

    #[must_use]
    pub fn with_kingdom(mut self, kingdom: Kingdom) -> Self {
        self.kingdom = kingdom;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(EngineError::InvalidPlayerCount(self.player_count));
        }
        Kingdom::new(self.kingdom.cards())?;
        Ok(())
    }

    /// Starting supply for `card`, or `None` when it is not in this game.
    #[must_use]
    pub fn starting_supply(&self, card: Card) -> Option<u32> {
        let players = self.player_count as u32;
        let victory = if players == 2 { 8 } else { 12 };
        match card {
            Card::Curse => Some(10 * (players - 1)),
            Card::Estate | Card::Duchy | Card::Province => Some(victory),
            Card::Copper => Some(60 - 7 * players),
            Card::Silver => Some(40),
            Card::Gold => Some(30),
            c if self.kingdom.contains(c) => Some(if c.is_victory() { victory } else { 10 }),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
