//! The four library paths of wisdom. Walking all four forges the shield.

use hx_core::{Flag, GameState, ItemId, RoomId, WisdomPath};
use tracing::info;

use crate::error::{FictionError, FictionResult};
use crate::result::CommandResult;

fn path_text(path: WisdomPath) -> &'static str {
    match path {
        WisdomPath::Learn => {
            "You have completed the Learning Path!\n\n\
             You walk into a corridor shrouded in brilliance. In front of you, multiple paths of knowledge appear:\n\n\
             • [school] School gate: bells echo, scholars walk into halls\n\
             • [expert] Expert lecture: phantom sages speak gently\n\
             • [online] Online resources: countless screens flicker, knowledge flows at your fingertips\n\
             • [book] Tower of books: scrolls piled high, whispering softly\n\n\
             \"No matter the form, only by loving and actively seeking to learn can wisdom begin.\"\n\n\
             You obtain Light of Wisdom [Learning · Understanding]."
        }
        WisdomPath::Live => {
            "You have completed the Living Path!\n\n\
             A crack opens in the bookshelf, pulling you into an illusion, a miniature world of society and life:\n\n\
             • [market] Bustling market: voices rise and fall in bargaining\n\
             • [workshop] Craftsman's workshop: sparks fly, skills tempered in hands\n\
             • [journey] Journey afar: mountains and strangers await\n\
             • [entertainment] Entertainment world: behind laughter hides joy and sorrow\n\
             • [career] Job market: surging crowds, each soul seeking a place\n\n\
             \"With curiosity and critical eyes, fully immersing in society, your experiences will eventually become wisdom.\"\n\n\
             You obtain Light of Wisdom [Living · Experience]."
        }
        WisdomPath::Dialogue => {
            "You have completed the Dialogue Path!\n\n\
             Voices echo through the corridor. As you approach, phantoms take shape one by one:\n\n\
             • [chat] Friends' chat: cheerful laughter dispels loneliness\n\
             • [talk] Sincere voice: speaking and listening draw closer hearts\n\
             • [debate] Fierce debate: logic and viewpoints clash like swords\n\
             • [co-create] Co-creation: minds intertwine, igniting sparks\n\n\
             \"Meeting, exchanging, understanding: social interaction too is an important path toward wisdom.\"\n\n\
             You obtain Light of Wisdom [Dialogue · Communication]."
        }
        WisdomPath::Reflect => {
            "You have completed the Reflection Path!\n\n\
             In the center of the hall appears a water mirror, reflecting your past choices and experiences:\n\n\
             • [mirror] Mirror of reflection: see shadows and regrets of the past\n\
             • [memory] Corridor of memory: old scenes replay, awaiting review\n\
             • [thought] Abyss of thought: inner whispers and unresolved questions\n\
             • [diary] Torn diary pages: true voices hidden in writing\n\n\
             \"Only by constantly revising oneself in thought can one continue to grow.\"\n\n\
             You obtain Light of Wisdom [Thinking · Reflection]."
        }
    }
}

/// Walk one path. The first time all four are walked, the shield appears.
pub fn walk(state: &mut GameState, path: WisdomPath) -> FictionResult<CommandResult> {
    if state.room != RoomId::Library {
        return Err(FictionError::WrongPlace(
            "You can only explore wisdom paths in the library.",
        ));
    }
    state.talked.mark_path(path);
    let mut message = path_text(path).to_string();

    let all_walked = state.talked.paths().len() == WisdomPath::ALL.len();
    if !all_walked || !state.set_flag(Flag::ShieldReady) {
        return Ok(CommandResult::success(message));
    }
    state.spawn(RoomId::Library, ItemId::ShieldOfWisdom);
    info!("all wisdom paths walked");
    message.push_str(
        "\n\nThe dome's stars suddenly blaze, streams of light flow through the library. Pages fly open, \
         thousands of thoughts awaken simultaneously. Corridors echo with voices of reading, debate, song, and heartfelt speech. \
         The water mirror shatters, its fragments rising to merge with the stars into a vast galaxy. \
         The galaxy condenses into a crystal shield, descending slowly into your hands.\n\n\
         Take it now: the wisdom you have earned.\n(Type 'take shield' to claim your reward.)",
    );
    Ok(CommandResult::success(message).with_item(ItemId::ShieldOfWisdom))
}
