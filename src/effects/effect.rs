//! Player choices passed to card effects.
//!
//! Each card reads its three choice slots differently: Remodel takes a
//! hand position and a card, Embargo takes a card, Steward takes a mode
//! and two hand positions. Slots hold raw integers so that any caller,
//! including randomized tests, can pass arbitrary values. Interpretation
//! and validation happen inside the effect.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{EngineError, Result};

/// Three raw choice slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choices {
    pub choice1: i32,
    pub choice2: i32,
    pub choice3: i32,
}

impl Choices {
    #[must_use]
    pub const fn new(choice1: i32, choice2: i32, choice3: i32) -> Self {
        Self {
            choice1,
            choice2,
            choice3,
        }
    }

    /// Choices whose first slot names a card.
    #[must_use]
    pub const fn card(card: Card) -> Self {
        Self::new(card as i32, 0, 0)
    }

    /// First slot is a hand position, second names a card to gain.
    #[must_use]
    pub const fn trash_and_gain(hand_pos: usize, gain: Card) -> Self {
        Self::new(hand_pos as i32, gain as i32, 0)
    }
}

/// Read a choice slot as a hand position.
pub fn as_hand_pos(value: i32) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| EngineError::InvalidChoice(format!("{value} is not a hand position")))
}

/// Read a choice slot as a card ordinal.
pub fn as_card(value: i32) -> Result<Card> {
    usize::try_from(value)
        .ok()
        .and_then(Card::from_index)
        .ok_or_else(|| EngineError::InvalidChoice(format!("{value} is not a card")))
}

/// What an effect is resolving for.
#[derive(Clone, Copy, Debug)]
pub struct EffectContext {
    /// The player resolving the card, always the current player.
    pub player: PlayerId,
    /// Position of the played card in that player's hand.
    pub hand_pos: usize,
    pub choices: Choices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_hand_pos() {
        assert_eq!(as_hand_pos(3), Ok(3));
        assert!(matches!(as_hand_pos(-1), Err(EngineError::InvalidChoice(_))));
    }

    #[test]
    fn test_as_card() {
        assert_eq!(as_card(0), Ok(Card::Curse));
        assert_eq!(as_card(26), Ok(Card::TreasureMap));
        assert!(as_card(27).is_err());
        assert!(as_card(-5).is_err());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Choices::card(Card::Gold).choice1, 6);
        let c = Choices::trash_and_gain(2, Card::Silver);
        assert_eq!((c.choice1, c.choice2, c.choice3), (2, 5, 0));
    }
}
