//! Error types for the engine and the fault-localization tooling.
//!
//! Every engine operation that returns an `EngineError` leaves the game
//! state exactly as it found it.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("a game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid kingdom: {0}")]
    InvalidKingdom(String),

    #[error("{0} is not seated in this game")]
    InvalidPlayer(PlayerId),

    #[error("hand position {pos} is out of range for a hand of {len}")]
    InvalidHandPosition { pos: usize, len: usize },

    #[error("expected {expected} at hand position {pos}, found {found}")]
    CardNotInHand { expected: Card, found: Card, pos: usize },

    #[error("{0} is not an action card")]
    NotAnAction(Card),

    #[error("{0} is not in this game's supply")]
    NotInGame(Card),

    #[error("the {0} supply is empty")]
    SupplyEmpty(Card),

    #[error("{card} costs {cost}, the limit is {limit}")]
    TooExpensive { card: Card, cost: u32, limit: u32 },

    #[error("a card cannot choose itself as its target")]
    CannotTrashSelf,

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("no actions left this turn")]
    NoActionsLeft,

    #[error("no buys left this turn")]
    NoBuysLeft,

    #[error("{card} costs {cost} but only {coins} coins are available")]
    InsufficientCoins { card: Card, cost: u32, coins: u32 },

    #[error("operation not allowed in the {0:?} phase")]
    WrongPhase(crate::core::Phase),

    #[error("no matching {0} in hand")]
    NoMatchingCard(Card),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum TarantulaError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to spawn `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("coverage file {0} has no line records")]
    EmptyCoverage(PathBuf),
}

impl From<toml::de::Error> for TarantulaError {
    fn from(err: toml::de::Error) -> Self {
        TarantulaError::Config(err.to_string())
    }
}
