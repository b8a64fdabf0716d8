//! The ten kingdom cards chosen for a game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::Card;
use crate::error::{EngineError, Result};

/// Number of kingdom piles in a game.
pub const KINGDOM_SIZE: usize = 10;

/// Ten distinct kingdom cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdom {
    cards: SmallVec<[Card; KINGDOM_SIZE]>,
}

impl Kingdom {
    /// Validate and build a kingdom.
    ///
    /// Fails unless there are exactly ten distinct kingdom (non-base) cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() != KINGDOM_SIZE {
            return Err(EngineError::InvalidKingdom(format!(
                "expected {KINGDOM_SIZE} cards, got {}",
                cards.len()
            )));
        }
        if let Some(base) = cards.iter().find(|c| !c.is_kingdom()) {
            return Err(EngineError::InvalidKingdom(format!(
                "{base} is a base card"
            )));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(EngineError::InvalidKingdom(format!("{card} appears twice")));
            }
        }
        Ok(Self {
            cards: cards.iter().copied().collect(),
        })
    }

    /// Adventurer through Great Hall.
    #[must_use]
    pub fn first_set() -> Self {
        Self {
            cards: Card::ALL[Card::Adventurer.index()..=Card::GreatHall.index()]
                .iter()
                .copied()
                .collect(),
        }
    }

    /// Minion through Treasure Map.
    #[must_use]
    pub fn second_set() -> Self {
        Self {
            cards: Card::ALL[Card::Minion.index()..]
                .iter()
                .copied()
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Kingdom {
    fn default() -> Self {
        Self::first_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sets() {
        let first = Kingdom::first_set();
        assert_eq!(first.cards().len(), 10);
        assert!(first.contains(Card::Adventurer));
        assert!(first.contains(Card::GreatHall));
        assert!(!first.contains(Card::Minion));

        let second = Kingdom::second_set();
        assert_eq!(second.cards().len(), 10);
        assert!(second.contains(Card::TreasureMap));
        assert!(Kingdom::new(second.cards()).is_ok());
    }

    #[test]
    fn test_rejects_wrong_size() {
        assert!(matches!(
            Kingdom::new(&[Card::Smithy]),
            Err(EngineError::InvalidKingdom(_))
        ));
    }

    #[test]
    fn test_rejects_base_and_duplicates() {
        let mut cards = Kingdom::first_set().cards().to_vec();
        cards[0] = Card::Gold;
        assert!(Kingdom::new(&cards).is_err());

        cards[0] = Card::Smithy;
        assert!(Kingdom::new(&cards).is_err());
    }
}
