//! Card-drawing actions.

use smallvec::SmallVec;

use crate::core::GameState;
use crate::error::Result;

use super::effect::EffectContext;
use super::resolver::discard_played;

/// Treasures Adventurer digs for.
const ADVENTURER_TREASURES: usize = 2;

/// Reveal cards until two treasures turn up or deck and discard run out.
/// Treasures go to hand, the other revealed cards are set aside and then
/// discarded.
pub(super) fn adventurer(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    let player = ctx.player;
    let mut found = 0;
    let mut set_aside: SmallVec<[_; 8]> = SmallVec::new();

    while found < ADVENTURER_TREASURES {
        let Some(card) = state.draw_card(player)? else {
            break;
        };
        if card.is_treasure() {
            found += 1;
        } else {
            state.hands[player].pop_back();
            set_aside.push(card);
        }
    }

    state.discards[player].extend(set_aside);
    discard_played(state, ctx)
}

/// +3 cards.
pub(super) fn smithy(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.draw_cards(ctx.player, 3)?;
    discard_played(state, ctx)
}

/// +1 card, +2 actions.
pub(super) fn village(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.draw_cards(ctx.player, 1)?;
    state.num_actions += 2;
    discard_played(state, ctx)
}

/// +1 card, +1 action.
pub(super) fn great_hall(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.draw_cards(ctx.player, 1)?;
    state.num_actions += 1;
    discard_played(state, ctx)
}

/// +4 cards, +1 buy, every other player draws a card.
pub(super) fn council_room(state: &mut GameState, ctx: &EffectContext) -> Result<()> {
    state.draw_cards(ctx.player, 4)?;
    state.num_buys += 1;
    for other in ctx.player.others(state.num_players()) {
        state.draw_cards(other, 1)?;
    }
    discard_played(state, ctx)
}

#[cfg(test)]
mod tests {
    use crate::cards::Card;
    use crate::core::{GameState, PlayerId};
    use crate::effects::Choices;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    #[test]
    fn test_adventurer_skips_non_treasure() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Adventurer]);
        // top of deck is the end
        state.set_deck(p0(), &[Card::Estate, Card::Silver, Card::Smithy, Card::Copper]);

        state
            .card_effect(Card::Adventurer, Choices::default(), 0)
            .unwrap();

        let hand: Vec<_> = state.hand(p0()).iter().copied().collect();
        assert_eq!(hand, vec![Card::Copper, Card::Silver]);
        let discard: Vec<_> = state.discard(p0()).iter().copied().collect();
        assert_eq!(discard, vec![Card::Smithy, Card::Adventurer]);
        assert_eq!(
            state.deck(p0()).iter().copied().collect::<Vec<_>>(),
            vec![Card::Estate]
        );
    }

    #[test]
    fn test_adventurer_with_no_treasure_anywhere() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Adventurer]);
        state.set_deck(p0(), &[Card::Estate]);
        state.set_discard(p0(), &[Card::Duchy]);

        state
            .card_effect(Card::Adventurer, Choices::default(), 0)
            .unwrap();
        assert!(state.hand(p0()).is_empty());
        assert!(state.deck(p0()).is_empty());
        assert_eq!(state.discard(p0()).len(), 3);
    }

    #[test]
    fn test_smithy_draws_three() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Copper, Card::Smithy]);
        state.set_deck(p0(), &[Card::Gold, Card::Estate, Card::Silver, Card::Duchy]);

        state
            .card_effect(Card::Smithy, Choices::default(), 1)
            .unwrap();
        let hand: Vec<_> = state.hand(p0()).iter().copied().collect();
        assert_eq!(
            hand,
            vec![Card::Copper, Card::Duchy, Card::Silver, Card::Estate]
        );
        assert_eq!(state.discard(p0()).back(), Some(&Card::Smithy));
        assert_eq!(state.deck(p0()).len(), 1);
    }

    #[test]
    fn test_village_and_great_hall_actions() {
        let mut state = GameState::empty(2, 1);
        state.set_hand(p0(), &[Card::Village, Card::GreatHall]);
        state.set_deck(p0(), &[Card::Copper, Card::Copper]);

        state
            .card_effect(Card::Village, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.num_actions, 3);
        state
            .card_effect(Card::GreatHall, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.num_actions, 4);
        assert_eq!(state.hand(p0()).len(), 2);
    }

    #[test]
    fn test_council_room_other_players_draw() {
        let mut state = GameState::empty(3, 1);
        state.set_hand(p0(), &[Card::CouncilRoom]);
        state.set_deck(p0(), &[Card::Copper; 5]);
        state.set_deck(PlayerId::new(1), &[Card::Estate; 2]);
        state.set_deck(PlayerId::new(2), &[Card::Estate; 2]);

        state
            .card_effect(Card::CouncilRoom, Choices::default(), 0)
            .unwrap();
        assert_eq!(state.hand(p0()).len(), 4);
        assert_eq!(state.num_buys, 2);
        assert_eq!(state.hand(PlayerId::new(1)).len(), 1);
        assert_eq!(state.hand(PlayerId::new(2)).len(), 1);
    }
}
