//! Conversation stages — the five positions of the scripted dialogue.

use serde::{Deserialize, Serialize};

/// The stages of the learning-path conversation.
///
/// Progresses linearly: Topic → Experience → Schedule → Format → Ready.
/// `Ready` is terminal and loops onto itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    Topic,
    Experience,
    Schedule,
    Format,
    Ready,
}

impl ConversationStage {
    /// All stages in dialogue order.
    pub const ALL: [ConversationStage; 5] = [
        Self::Topic,
        Self::Experience,
        Self::Schedule,
        Self::Format,
        Self::Ready,
    ];

    /// 1-based stage number.
    pub fn number(&self) -> u8 {
        match self {
            Self::Topic => 1,
            Self::Experience => 2,
            Self::Schedule => 3,
            Self::Format => 4,
            Self::Ready => 5,
        }
    }

    /// Completion percentage reached once a submission at this stage has
    /// been answered.
    pub fn completion(&self) -> u8 {
        match self {
            Self::Topic => 30,
            Self::Experience => 50,
            Self::Schedule => 70,
            Self::Format | Self::Ready => 100,
        }
    }

    /// The following stage, saturating at `Ready`.
    pub fn next(&self) -> ConversationStage {
        match self {
            Self::Topic => Self::Experience,
            Self::Experience => Self::Schedule,
            Self::Schedule => Self::Format,
            Self::Format | Self::Ready => Self::Ready,
        }
    }
}

impl Default for ConversationStage {
    fn default() -> Self {
        Self::Topic
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Topic => "topic",
            Self::Experience => "experience",
            Self::Schedule => "schedule",
            Self::Format => "format",
            Self::Ready => "ready",
        };
        write!(f, "{s}")
    }
}
