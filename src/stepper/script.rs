//! Canned assistant replies, one per stage.

use super::stage::ConversationStage;

/// Shown by hosts when a chat view opens. Not part of the session transcript.
pub const GREETING: &str =
    "Hi there! I'm your AI learning companion. What would you like to learn today?";

/// Marker replaced by the user's text in templates that echo it.
const TOPIC_MARKER: &str = "{topic}";

/// Reply templates indexed by `stage.number() - 1`.
const TEMPLATES: [&str; 5] = [
    "That's a great topic! \"{topic}\" it is. Let me create a personalized learning path \
     for you. First, how much experience do you already have with it?",
    "Thanks, that helps me pitch the material at the right level. How much time can you \
     set aside each week?",
    "Got it. I'll break the path into manageable steps that fit your schedule. Do you \
     learn best from videos, articles, or hands-on projects?",
    "Perfect! Your learning path is ready. Head over to the dashboard to start your first \
     quest, and check the resource library for hand-picked materials.",
    "Your learning path is all set. Open the dashboard to track your quests, or ask me \
     anything along the way!",
];

/// The assistant reply for a submission made at `stage`.
///
/// Only the first stage interpolates the user's text.
pub fn reply_for(stage: ConversationStage, user_text: &str) -> String {
    let template = TEMPLATES[usize::from(stage.number() - 1)];
    if template.contains(TOPIC_MARKER) {
        template.replace(TOPIC_MARKER, user_text)
    } else {
        template.to_string()
    }
}
