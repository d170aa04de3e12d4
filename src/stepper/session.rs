//! Session data model — transcript messages, session state, and events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stage::ConversationStage;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            created_at: Utc::now(),
        }
    }
}

/// State of one chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    /// Current stage. Only ever moves forward.
    pub stage: ConversationStage,
    /// Completion percentage of the learning-path interview (0–100).
    pub completion: u8,
    /// Append-only transcript in display order.
    pub messages: Vec<Message>,
    /// Draft input not yet submitted.
    pub pending_input: String,
    /// A reply is in flight; submissions are refused until it lands.
    pub busy: bool,
    /// Session torn down; nothing may be appended anymore.
    pub closed: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: ConversationStage::default(),
            completion: 0,
            messages: Vec::new(),
            pending_input: String::new(),
            busy: false,
            closed: false,
        }
    }
}

impl SessionState {
    /// Record the answer to a submission made at `answered`: move to the
    /// following stage and take that stage's completion value.
    pub(crate) fn advance_past(&mut self, answered: ConversationStage) -> ConversationStage {
        let next = answered.next();
        // never step backwards, even if the caller answered an older stage
        if next > self.stage {
            self.stage = next;
        }
        self.completion = self.completion.max(answered.completion());
        self.stage
    }
}

/// Change notifications fanned out to subscribers of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    MessageAppended { message: Message },
    StageAdvanced { stage: ConversationStage, stage_number: u8, completion: u8 },
    Closed { session_id: Uuid },
}
