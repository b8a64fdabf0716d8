//! Pile transitions: draw, shuffle, discard, gain, and coin counting.
//!
//! Every operation validates its inputs before touching the state, so an
//! `Err` always means nothing changed.

use im::Vector;
use smallvec::SmallVec;
use tracing::trace;

use crate::cards::Card;
use crate::core::{GainTarget, GameState, PlayerId};
use crate::error::{EngineError, Result};

impl GameState {
    /// Shuffle a player's deck in place.
    pub fn shuffle(&mut self, player: PlayerId) -> Result<()> {
        self.check_player(player)?;
        if self.decks[player].len() > 1 {
            let mut cards: Vec<Card> = self.decks[player].iter().copied().collect();
            self.rng.shuffle(&mut cards);
            self.decks[player] = cards.into_iter().collect();
        }
        Ok(())
    }

    /// Move the discard pile into the empty deck and shuffle it.
    ///
    /// Does nothing while the deck still has cards or the discard is empty.
    pub(crate) fn refill_deck(&mut self, player: PlayerId) {
        if !self.decks[player].is_empty() || self.discards[player].is_empty() {
            return;
        }
        let mut cards: Vec<Card> = std::mem::take(&mut self.discards[player])
            .into_iter()
            .collect();
        self.rng.shuffle(&mut cards);
        trace!(%player, cards = cards.len(), "reshuffled discard into deck");
        self.decks[player] = cards.into_iter().collect();
    }

    /// Remove the top card of a player's deck, reshuffling the discard first
    /// when the deck is empty. `None` when both piles are empty.
    pub(crate) fn take_top_of_deck(&mut self, player: PlayerId) -> Option<Card> {
        self.refill_deck(player);
        self.decks[player].pop_back()
    }

    /// Draw the top card of a player's deck into their hand.
    ///
    /// Returns the drawn card, or `None` if deck and discard are both empty.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<Option<Card>> {
        self.check_player(player)?;
        let drawn = self.take_top_of_deck(player);
        if let Some(card) = drawn {
            self.hands[player].push_back(card);
        }
        Ok(drawn)
    }

    /// Draw up to `count` cards, returning how many were drawn.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> Result<usize> {
        let mut drawn = 0;
        for _ in 0..count {
            if self.draw_card(player)?.is_none() {
                break;
            }
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Remove the card at `hand_pos`. The rest of the hand keeps its order.
    ///
    /// With `trash` set the card leaves the game, otherwise it goes on top
    /// of the player's discard pile.
    pub fn discard_card(&mut self, hand_pos: usize, player: PlayerId, trash: bool) -> Result<Card> {
        self.check_player(player)?;
        let len = self.hands[player].len();
        if hand_pos >= len {
            return Err(EngineError::InvalidHandPosition { pos: hand_pos, len });
        }
        let card = self.hands[player].remove(hand_pos);
        if trash {
            self.trash.push_back(card);
        } else {
            self.discards[player].push_back(card);
        }
        Ok(card)
    }

    /// Take one copy of `card` from the supply and put it on top of `to`.
    pub fn gain_card(&mut self, card: Card, player: PlayerId, to: GainTarget) -> Result<()> {
        self.check_player(player)?;
        match self.supply[card] {
            None => return Err(EngineError::NotInGame(card)),
            Some(0) => return Err(EngineError::SupplyEmpty(card)),
            Some(n) => self.supply[card] = Some(n - 1),
        }
        let pile = match to {
            GainTarget::Discard => &mut self.discards[player],
            GainTarget::Deck => &mut self.decks[player],
            GainTarget::Hand => &mut self.hands[player],
        };
        pile.push_back(card);
        trace!(%player, %card, to = to.label(), "gained card");
        Ok(())
    }

    /// Set `coins` to the treasure in a player's hand plus `bonus`.
    pub fn update_coins(&mut self, player: PlayerId, bonus: u32) -> Result<()> {
        self.check_player(player)?;
        self.coins = hand_treasure(&self.hands[player]) + bonus;
        Ok(())
    }

    /// Remove several hand positions at once.
    ///
    /// Cards come back in the order of `positions`. Fails without changing
    /// anything if a position repeats or is out of range.
    pub(crate) fn take_from_hand(
        &mut self,
        player: PlayerId,
        positions: &[usize],
    ) -> Result<SmallVec<[Card; 4]>> {
        let hand = &self.hands[player];
        for (i, &pos) in positions.iter().enumerate() {
            if pos >= hand.len() {
                return Err(EngineError::InvalidHandPosition {
                    pos,
                    len: hand.len(),
                });
            }
            if positions[..i].contains(&pos) {
                return Err(EngineError::InvalidChoice(format!(
                    "hand position {pos} chosen twice"
                )));
            }
        }
        let taken = positions.iter().map(|&pos| hand[pos]).collect();
        let kept: Vector<Card> = hand
            .iter()
            .enumerate()
            .filter(|(i, _)| !positions.contains(i))
            .map(|(_, &card)| card)
            .collect();
        self.hands[player] = kept;
        Ok(taken)
    }
}

/// Coins produced by the treasures in `hand`.
#[must_use]
pub fn hand_treasure(hand: &Vector<Card>) -> u32 {
    hand.iter().map(|c| c.treasure_value()).sum()
}
