//! The garden: choose one rose, tend it in five ordered steps, take the
//! seed of love.

use hx_core::{Flag, GameState, GardenStep, ItemId, RoomId, RoseColor};
use tracing::info;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

fn chosen_text(rose: RoseColor) -> &'static str {
    match rose {
        RoseColor::Red => {
            "The Red Rose flares, and sparks scatter into the air. From its fiery heart, a glowing ember drifts into your hand; \
             it cools into a ruby-like gem, pulsing faintly with warmth. The White and Purple Roses wither into ash and mist, \
             carried away by the wind."
        }
        RoseColor::White => {
            "The White Rose unfolds in a silent shimmer. Its petals dissolve into countless motes of light that swirl and condense \
             into a transparent crystal resting in your hand: cool, pure, and still. The Red and Purple Roses fade into mist, \
             their colors melting into the horizon."
        }
        RoseColor::Purple => {
            "The Purple Rose blooms, releasing a gentle light. From its petals, a crystal dew forms and drifts into your palm, \
             becoming a small shining seed. The Red and White Roses dissolve into stardust, scattering across the night sky."
        }
    }
}

fn tending_text(step: GardenStep) -> &'static str {
    match step {
        GardenStep::Water => {
            "You pour the crystal dew over the soil. The seed swells and quivers; one pale root reaches down, a tender shoot presses up. \
             The surface of the soil lifts and splits.\n\n(Type 'fertilize' to nourish it.)"
        }
        GardenStep::Fertilize => {
            "You sprinkle luminous dust over the soil. The sprout straightens; the first soft leaves unfurl like tiny sails, \
             catching the night air. Its color deepens, drinking strength.\n\n(Type 'weed' to clear away what hinders its growth.)"
        }
        GardenStep::Weed => {
            "You kneel beside the young plant, gently pulling away the choking vines and brittle weeds. Light reaches it cleanly now; \
             the stem thickens, and at its tip a tight bud begins to form.\n\n(Type 'wish' to whisper your blessing to it.)"
        }
        GardenStep::Wish => {
            "You whisper softly, \"May you grow strong and bloom with grace.\"\n\
             The flower glows faintly, as if quietly returning your blessing.\n\n(Type 'wait' to watch it grow.)"
        }
        GardenStep::Wait => {
            "You sit beside the budding plant, hands resting softly on your knees. The night is quiet; only the hum of the earth answers you.\n\
             Time drifts. The bud drinks the moonlight, loosens, and turns toward the sky. At last, the petals unfold: slow, certain, breathtaking. \
             What patience and care began now opens in full, living beauty.\n\n\
             Congratulations, you have obtained the token: Seed of Love! Please take it and keep it safe.\n\
             (Type 'take seed' to add it to your inventory.)"
        }
    }
}

/// Choose a rose. Only one choice is ever allowed.
pub fn choose(state: &mut GameState, rose: &str) -> FictionResult<CommandResult> {
    if state.room != RoomId::Garden {
        return Err(FictionError::WrongPlace("You can't choose anything here."));
    }
    if state.garden.chosen.is_some() {
        return Err(FictionError::AlreadyDone(
            "You have already made your choice. The other roses have faded away.",
        ));
    }
    let rose = RoseColor::parse(rose).ok_or(FictionError::InvalidChoice(
        "You can only choose: red, white, or purple.",
    ))?;
    state.garden.chosen = Some(rose);
    state.garden.step = 0;
    info!(%rose, "rose chosen");
    Ok(CommandResult::success(format!(
        "{}\n\n(Type 'water' to water your own flower.)",
        chosen_text(rose)
    )))
}

/// Perform the next tending step. Steps must come in order.
pub fn tend(state: &mut GameState, step: GardenStep) -> FictionResult<CommandResult> {
    if state.room != RoomId::Garden {
        return Err(FictionError::WrongPlace("You can't do that here."));
    }
    if state.garden.chosen.is_none() {
        return Err(FictionError::NotYet("You must first choose a rose."));
    }
    let expected = state.garden.next_step().ok_or(FictionError::AlreadyDone(
        "Your rose is already in full bloom.",
    ))?;
    if step != expected {
        return Err(FictionError::OutOfOrder {
            expected: expected.verb(),
        });
    }
    state.garden.step += 1;
    if step == GardenStep::Wait {
        state.set_flag(Flag::SeedReady);
    }
    Ok(CommandResult::success(tending_text(step)))
}

/// Collect the seed of love once the rose has bloomed.
pub fn take_seed(state: &mut GameState) -> FictionResult<CommandResult> {
    if state.room != RoomId::Garden {
        return Err(FictionError::WrongPlace("You can't take that here."));
    }
    if !state.has_flag(Flag::SeedReady) {
        return Err(FictionError::NotYet("The seed is not ready yet."));
    }
    if !state.grant(ItemId::SeedOfLove) {
        return Err(FictionError::AlreadyDone("You already have the seed."));
    }
    Ok(CommandResult::success(
        "Item added to inventory: Seed of Love\n\n\
         The meaning of choice does not lie in embracing all possibilities,\n\
         But in choosing one among countless possibilities,\n\
         And bravely accepting the cost of giving up the others.\n\n\
         Only by devoting your life to those you want to guard,\n\
         To care, to love, to listen, to respect,\n\
         Can you possibly receive trust and love,\n\
         And possibly find the meaning and value of living.\n\n\
         These roses may be your lover,\n\
         Or may be friends, vocation, hobby, home,\n\
         Even yourself.\n\n\
         (Type 'look' to check the exit and type 'go <direction>' to go to the next room)",
    )
    .with_item(ItemId::SeedOfLove))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_garden() -> GameState {
        let mut state = GameState::new();
        state.room = RoomId::Garden;
        state
    }

    #[test]
    fn choose_once_with_a_valid_color() {
        let mut state = in_garden();
        assert!(matches!(
            choose(&mut state, "blue"),
            Err(FictionError::InvalidChoice(_))
        ));
        choose(&mut state, "purple").unwrap();
        assert_eq!(state.garden.chosen, Some(RoseColor::Purple));
        assert!(matches!(
            choose(&mut state, "red"),
            Err(FictionError::AlreadyDone(_))
        ));
        assert_eq!(state.garden.chosen, Some(RoseColor::Purple));
    }

    #[test]
    fn tending_before_choosing_is_refused() {
        let mut state = in_garden();
        assert_eq!(
            tend(&mut state, GardenStep::Water),
            Err(FictionError::NotYet("You must first choose a rose."))
        );
    }

    #[test]
    fn out_of_order_step_names_the_next_one() {
        let mut state = in_garden();
        choose(&mut state, "red").unwrap();
        let err = tend(&mut state, GardenStep::Fertilize).unwrap_err();
        assert_eq!(err.to_string(), "You should water next.");
        assert_eq!(state.garden.step, 0);
    }

    #[test]
    fn full_sequence_then_seed_exactly_once() {
        let mut state = in_garden();
        choose(&mut state, "white").unwrap();
        assert!(take_seed(&mut state).is_err());
        for step in GardenStep::ORDER {
            tend(&mut state, step).unwrap();
        }
        assert!(state.has_flag(Flag::SeedReady));
        assert!(matches!(
            tend(&mut state, GardenStep::Wait),
            Err(FictionError::AlreadyDone(_))
        ));

        let seed = take_seed(&mut state).unwrap();
        assert_eq!(seed.item, Some(ItemId::SeedOfLove));
        assert!(state.has_item(ItemId::SeedOfLove));
        assert!(take_seed(&mut state).is_err());
        assert_eq!(state.inventory().len(), 1);
    }
}
