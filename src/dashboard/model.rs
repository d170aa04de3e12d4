//! Quest path data model.

use serde::{Deserialize, Serialize};

/// Where the learner stands on a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Completed,
    Current,
    Locked,
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Current => write!(f, "current"),
            Self::Locked => write!(f, "locked"),
        }
    }
}

/// One node on the learning journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestNode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: QuestStatus,
    pub level: u8,
    pub points: u32,
}

/// Totals derived from the quest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySummary {
    /// Points from completed quests.
    pub xp_earned: u32,
    /// Points across all quests.
    pub xp_total: u32,
    /// Level of the current quest (or the last completed one).
    pub level: u8,
    /// Completed quests as a percentage of all quests.
    pub progress: u8,
    pub completed: usize,
    pub in_progress: usize,
    pub locked: usize,
}
