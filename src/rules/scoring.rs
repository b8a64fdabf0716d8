//! Scoring and game-end detection.

use crate::cards::Card;
use crate::core::{GameState, PlayerId};
use crate::error::Result;

/// Empty supply piles that end the game.
pub const EMPTY_PILES_TO_END: usize = 3;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied winners after the turn-order tiebreak.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

impl GameState {
    /// Victory points across a player's hand, discard and deck.
    ///
    /// Each Gardens is worth one point per ten cards owned.
    pub fn score_for(&self, player: PlayerId) -> Result<i32> {
        self.check_player(player)?;
        let gardens_value = (self.total_cards(player) / 10) as i32;
        let score = [&self.hands[player], &self.discards[player], &self.decks[player]]
            .iter()
            .flat_map(|pile| pile.iter())
            .map(|&card| match card {
                Card::Gardens => gardens_value,
                other => other.victory_points(),
            })
            .sum();
        Ok(score)
    }

    /// The Province pile is empty, or three supply piles are.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        if self.supply[Card::Province] == Some(0) {
            return true;
        }
        let empty = self
            .supply
            .iter()
            .filter(|(_, count)| *count == Some(0))
            .count();
        empty >= EMPTY_PILES_TO_END
    }

    /// Highest score wins. On a tie, players seated after the current
    /// player had one fewer turn and win the tie.
    pub fn winners(&self) -> Result<GameResult> {
        let current = self.whose_turn.index();
        let mut scores = Vec::with_capacity(self.num_players());
        for player in self.player_ids() {
            scores.push((player, self.score_for(player)?));
        }

        let high = scores.iter().map(|&(_, s)| s).max().unwrap_or(0);
        for (player, score) in &mut scores {
            if *score == high && player.index() > current {
                *score += 1;
            }
        }
        let high = scores.iter().map(|&(_, s)| s).max().unwrap_or(0);

        let mut best: Vec<PlayerId> = scores
            .into_iter()
            .filter(|&(_, s)| s == high)
            .map(|(p, _)| p)
            .collect();
        Ok(if best.len() == 1 {
            GameResult::Winner(best.remove(0))
        } else {
            GameResult::Winners(best)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_fixed_values() {
        let mut state = GameState::empty(2, 1);
        let p0 = PlayerId::new(0);
        state.set_hand(p0, &[Card::Curse, Card::Estate]);
        state.set_discard(p0, &[Card::Duchy, Card::GreatHall]);
        state.set_deck(p0, &[Card::Province, Card::Copper]);

        assert_eq!(state.score_for(p0), Ok(-1 + 1 + 3 + 1 + 6));
    }

    #[test]
    fn test_gardens_scale_with_card_count() {
        let mut state = GameState::empty(2, 1);
        let p0 = PlayerId::new(0);
        state.set_hand(p0, &[Card::Gardens]);
        state.set_deck(p0, &[Card::Copper; 8]);
        assert_eq!(state.score_for(p0), Ok(0));

        state.set_discard(p0, &[Card::Copper]);
        assert_eq!(state.score_for(p0), Ok(1));

        state.set_discard(p0, &[Card::Copper, Card::Gardens]);
        assert_eq!(state.score_for(p0), Ok(2));
    }

    #[test]
    fn test_game_over_conditions() {
        let mut state = GameState::empty(2, 1);
        for card in Card::BASE {
            state.supply[card] = Some(5);
        }
        state.supply[Card::Smithy] = Some(10);
        assert!(!state.is_game_over());

        state.supply[Card::Province] = Some(0);
        assert!(state.is_game_over());

        state.supply[Card::Province] = Some(1);
        state.supply[Card::Curse] = Some(0);
        state.supply[Card::Estate] = Some(0);
        assert!(!state.is_game_over());

        state.supply[Card::Smithy] = Some(0);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_cards_not_in_game_are_not_empty_piles() {
        let mut state = GameState::empty(2, 1);
        state.supply[Card::Province] = Some(8);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_winner_tiebreak_favors_later_seat() {
        let mut state = GameState::empty(3, 1);
        state.set_hand(PlayerId::new(0), &[Card::Province]);
        state.set_hand(PlayerId::new(1), &[Card::Province]);
        state.set_hand(PlayerId::new(2), &[Card::Estate]);
        state.whose_turn = PlayerId::new(0);

        assert_eq!(state.winners(), Ok(GameResult::Winner(PlayerId::new(1))));
    }

    #[test]
    fn test_shared_win() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(PlayerId::new(0), &[Card::Duchy]);
        state.set_hand(PlayerId::new(1), &[Card::Duchy]);
        state.whose_turn = PlayerId::new(1);

        let result = state.winners().unwrap();
        assert_eq!(
            result,
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)])
        );
        assert!(result.is_winner(PlayerId::new(0)));
    }
}
