//! Turn flow: playing actions, buying, and cleanup.
//!
//! A turn runs Action -> Buy -> Cleanup. `play_card` resolves one action
//! card, `buy_card` gains from the supply, and `end_turn` cleans up and
//! deals the next hand. Outpost grants one extra three-card turn.

use tracing::debug;

use crate::cards::Card;
use crate::core::{GainTarget, GameState, Phase, HAND_SIZE, OUTPOST_HAND_SIZE};
use crate::effects::Choices;
use crate::error::{EngineError, Result};

use super::piles::hand_treasure;

impl GameState {
    /// Play the action card at `hand_pos` for the current player.
    ///
    /// Spends one action. Coins the effect grants are added to
    /// `bonus_coins`, then coins are recounted as the hand's treasure plus
    /// that bonus.
    pub fn play_card(&mut self, hand_pos: usize, choices: Choices) -> Result<()> {
        if self.phase != Phase::Action {
            return Err(EngineError::WrongPhase(self.phase));
        }
        if self.num_actions < 1 {
            return Err(EngineError::NoActionsLeft);
        }
        let player = self.whose_turn;
        let len = self.hands[player].len();
        let card = self
            .hand_card(hand_pos)
            .ok_or(EngineError::InvalidHandPosition { pos: hand_pos, len })?;
        if !card.is_action() {
            return Err(EngineError::NotAnAction(card));
        }

        let coins_before = self.coins;
        self.card_effect(card, choices, hand_pos)?;
        self.num_actions -= 1;

        // Effects only ever add coins.
        self.bonus_coins += self.coins - coins_before;
        self.update_coins(player, self.bonus_coins)?;
        debug!(%player, %card, coins = self.coins, "played card");
        Ok(())
    }

    /// Buy one copy of `card` for the current player.
    ///
    /// The card goes to the discard pile. Each embargo token on its pile
    /// adds a Curse while Curses last.
    pub fn buy_card(&mut self, card: Card) -> Result<()> {
        if self.phase == Phase::Cleanup {
            return Err(EngineError::WrongPhase(self.phase));
        }
        if self.num_buys < 1 {
            return Err(EngineError::NoBuysLeft);
        }
        let cost = card.cost();
        if self.coins < cost {
            return Err(EngineError::InsufficientCoins {
                card,
                cost,
                coins: self.coins,
            });
        }

        let player = self.whose_turn;
        self.gain_card(card, player, GainTarget::Discard)?;
        for _ in 0..self.embargo_tokens[card] {
            if self.gain_card(Card::Curse, player, GainTarget::Discard).is_err() {
                break;
            }
        }

        self.phase = Phase::Buy;
        self.coins -= cost;
        self.num_buys -= 1;
        debug!(%player, %card, coins_left = self.coins, "bought card");
        Ok(())
    }

    /// Clean up and start the next turn.
    ///
    /// Hand and played cards go to the discard pile. If Outpost was played
    /// on a normal turn, the same player takes an extra turn with three
    /// cards. Otherwise play passes left and the next player draws five.
    pub fn end_turn(&mut self) -> Result<()> {
        let current = self.whose_turn;
        self.phase = Phase::Cleanup;

        let hand = std::mem::take(&mut self.hands[current]);
        let played = std::mem::take(&mut self.played);
        self.discards[current].append(hand);
        self.discards[current].append(played);

        let extra_turn = self.outpost_played && !self.outpost_turn;
        self.outpost_played = false;
        let hand_size = if extra_turn {
            self.outpost_turn = true;
            OUTPOST_HAND_SIZE
        } else {
            self.outpost_turn = false;
            self.whose_turn = current.next(self.num_players());
            HAND_SIZE
        };

        self.turn_number += 1;
        self.phase = Phase::Action;
        self.num_actions = 1;
        self.num_buys = 1;
        self.bonus_coins = 0;

        let next = self.whose_turn;
        self.draw_cards(next, hand_size)?;
        self.update_coins(next, 0)?;
        debug!(%next, turn = self.turn_number, extra_turn, "started turn");
        Ok(())
    }
}
