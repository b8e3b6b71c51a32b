//! Conversation text, keyed by topic.

use hx_core::{GameState, RoseColor, Topic};

const RESPOND_HINT: &str = "(Type 'respond' to reply and 'end' to end dialogue)";
const OVER: &str = "(The conversation is over.)";

/// The guide's only line in the finale courtyard.
pub const WELCOME_BACK: &str = "Guide: Welcome back, young one. Let me see what you've brought with you.\n\n(Type 'inventory' to check the items in your inventory)";

/// Closing line printed by `end`.
pub const ENDED: &str =
    "(The conversation is over. You can type 'talk <npc>' to start the conversation again.)";

const GUIDE_INTRO: &[&str] = &[
    "You: What happened here?\n\n\
     The Final Guide: The Hexagram was once whole, containing immense cosmic energy. But now it lies shattered.\n\
     You must retrieve the six symbols (Courage, Freedom, Wisdom, Creation, Grit, and Love) to restore the stone disk.\n\
     Only then can the gate to self-completion be opened.\n\n\
     (Type 'respond' to continue and 'end' to end dialogue)",
    "You: Alright… what should I do now?\n\n\
     The Final Guide: Find the exit of this courtyard. That will begin your journey of discovery.\n\
     Along the way, you will understand what must be done.\n\
     Go now, and may the light guide your steps.\n\n\
     (The conversation is over.)",
];

const PRISONER: &[&str] = &[
    "You: I came from outside. How did you end up here?\n\n\
     Prisoner in Chains: All my life I have been here.\n\n\
     (Type 'respond' to continue and 'end' to end dialogue)",
    "You: Perhaps you should go out and see?\n\n\
     Prisoner in Chains: This is my world. Outside? Surely there is nothing good.\n\n\
     (The conversation is over.)",
];

const WATCHER: &[&str] = &[
    "You: What are you doing? What happened to the people here?\n\n\
     Watcher of Shadows: I am responsible for lighting the fire, moving the puppets, letting them see what they want to see. \
     Illusions give them a sense of safety.\n\n\
     (Type 'respond' to continue and 'end' to end dialogue)",
    "You: Why deceive?\n\n\
     Watcher of Shadows: Because truth will bring them pain. Illusion makes them feel at ease.\n\n\
     (The conversation is over.)",
];

const BIRD: &[&str] = &[
    "You: It's okay. Listen, the forest is full of your kind. You won't be alone anymore. \
     You've already left the swamp behind, where you once tried so hard to belong among those who could never understand your wings. \
     You don't need their approval. Just keep walking, until you reach the forest that welcomes you.\n\n\
     Bird: The swamp… yes. I once thought its shadows were the whole world, never imagining I could meet companions. \
     But now, the wind and light make me uneasy… Can I really learn to fly like them?\n\n\
     (Type 'respond' to reply and 'end' to end dialogue)",
    "You: Don't rush. Take your time. First, let yourself get used to the forest.\n\n\
     Bird: Take my time… yes. Maybe I should first face my fear, and then let new experiences come in. \
     This forest… maybe it will change me.\n\n\
     (Type 'respond' to reply and 'end' to end dialogue)",
    "You: That's right. Give it a try; this place has been yours all along. \
     If you never try, you'll remain bound by the shadows of old memories. You deserve new experiences, new light. \
     Fear is only the trembling of your heart, but the sky is still there, wide and real. \
     When you learn to tell them apart, you'll see that you can honor your fear and still walk toward the light.\n\n\
     Bird: You're right. Thank you, my friend. Farewell, and may you, too, find the forest that belongs to you.\n\n\
     (The conversation is over.)",
];

/// Replies given by successive `respond` commands.
pub fn replies(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::GuideIntro => GUIDE_INTRO,
        Topic::Prisoner => PRISONER,
        Topic::Watcher => WATCHER,
        Topic::BirdForest => BIRD,
        Topic::Philosopher | Topic::Einstein | Topic::Marx | Topic::Rose(_) => &[],
    }
}

fn rose_words(rose: RoseColor) -> &'static str {
    match rose {
        RoseColor::Red => {
            "[Warm red glow surrounding, petals trembling like burning flame.]\n\
             Red Rose: \"If you choose me, please guard my passion.\n\
             Your protection will let my life burn more brilliantly.\""
        }
        RoseColor::White => {
            "[Gentle white glow envelops, like dew on petals in morning light.]\n\
             White Rose: \"If you choose me, please cherish my purity.\n\
             Your nurture can let my beauty bloom forever.\""
        }
        RoseColor::Purple => {
            "[Mysterious purple glow sways, petals dancing lightly in the wind.]\n\
             Purple Rose: \"If you choose me, please listen to my silence.\n\
             Only when fully seen by you, can my soul truly bloom.\""
        }
    }
}

/// The line spoken when a conversation starts.
///
/// Called after entry effects were applied, so hints that depend on who has
/// been talked to already count this conversation.
pub fn opening(topic: Topic, state: &GameState) -> String {
    let npc = topic.npc().npc();
    match topic {
        Topic::GuideIntro | Topic::Prisoner | Topic::Watcher | Topic::BirdForest => {
            format!("{}: {}\n\n{RESPOND_HINT}", npc.name, npc.line)
        }
        Topic::Philosopher => format!(
            "{}: {}\nOh, and one more thing: there is also a poor little bird in this cave. \
             This bird too fell into the cave in childhood. Take her with you, and walk toward the light together!\n\
             (Type 'take bird' to pick it up)\n{OVER}",
            npc.name, npc.line
        ),
        Topic::Einstein | Topic::Marx => {
            let mut text = format!("{}: {}", npc.name, npc.line);
            if state.talked.theater().len() == 2 {
                text.push_str("\n\nStep onto the stage and see for yourself.\n(Type 'stage' to begin)");
            }
            format!("{text}\n\n{OVER}")
        }
        Topic::Rose(rose) => {
            let mut text = rose_words(rose).to_string();
            if state.talked.roses().len() == RoseColor::ALL.len() {
                text.push_str(
                    "\n\nStep closer to the rose that calls to you.\n\
                     Type: choose red / choose white / choose purple\n\
                     Once chosen, the others will fade, leaving only your path.",
                );
            }
            format!("{text}\n\n{OVER}")
        }
    }
}
