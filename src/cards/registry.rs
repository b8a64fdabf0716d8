//! Name lookup and per-card storage.
//!
//! `CardRegistry` resolves user-facing names (`"council room"`,
//! `"Council_Room"`, `"councilroom"`) to [`Card`] values. `CardMap` holds one
//! value per card kind, e.g. supply counts or embargo tokens.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use std::sync::OnceLock;

use super::definition::{Card, CARD_COUNT};

/// Name index over every card kind.
#[derive(Clone, Debug)]
pub struct CardRegistry {
    by_name: FxHashMap<String, Card>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        let by_name = Card::ALL
            .iter()
            .map(|&card| (normalize(card.name()), card))
            .collect();
        Self { by_name }
    }

    /// The process-wide registry.
    pub fn global() -> &'static CardRegistry {
        static REGISTRY: OnceLock<CardRegistry> = OnceLock::new();
        REGISTRY.get_or_init(CardRegistry::new)
    }

    /// Look a card up by name, ignoring case, spaces, `_` and `-`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Card> {
        self.by_name.get(&normalize(name)).copied()
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Error for names that match no card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCard(pub String);

impl std::fmt::Display for UnknownCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown card name '{}'", self.0)
    }
}

impl std::error::Error for UnknownCard {}

impl FromStr for Card {
    type Err = UnknownCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardRegistry::global()
            .lookup(s)
            .ok_or_else(|| UnknownCard(s.to_string()))
    }
}

/// One value per card kind, indexed by [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMap<T> {
    data: [T; CARD_COUNT],
}

impl<T: Copy> CardMap<T> {
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            data: [value; CARD_COUNT],
        }
    }

    /// Iterate over (Card, value) pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, T)> + '_ {
        Card::ALL.iter().map(move |&card| (card, self.data[card.index()]))
    }
}

impl<T: Copy + Default> Default for CardMap<T> {
    fn default() -> Self {
        Self::with_value(T::default())
    }
}

impl<T> Index<Card> for CardMap<T> {
    type Output = T;

    fn index(&self, card: Card) -> &Self::Output {
        &self.data[card.index()]
    }
}

impl<T> IndexMut<Card> for CardMap<T> {
    fn index_mut(&mut self, card: Card) -> &mut Self::Output {
        &mut self.data[card.index()]
    }
}
