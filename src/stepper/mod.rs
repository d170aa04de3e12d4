//! Conversation stepper — the scripted learning-path chat.
//!
//! A chat session walks through five fixed stages. Each user submission is
//! appended to the transcript right away; after a short delay the canned
//! reply for the stage the user was at is appended and the session moves on
//! to the next stage. Only one reply can be in flight at a time.

pub mod script;
pub mod session;
pub mod stage;
#[allow(clippy::module_inception)]
pub mod stepper;

pub use script::{reply_for, GREETING};
pub use session::{Message, Sender, SessionEvent, SessionState};
pub use stage::ConversationStage;
pub use stepper::{ConversationStepper, SubmitOutcome};
