//! Learning journey dashboard — the static quest path and its summary.

pub mod model;

pub use model::{JourneySummary, QuestNode, QuestStatus};

use crate::error::AppError;

static QUESTS: [QuestNode; 5] = [
    QuestNode {
        id: "1",
        title: "Foundation",
        description: "Master the fundamentals and build your foundation",
        status: QuestStatus::Completed,
        level: 1,
        points: 500,
    },
    QuestNode {
        id: "2",
        title: "Building Skills",
        description: "Develop intermediate understanding",
        status: QuestStatus::Completed,
        level: 2,
        points: 750,
    },
    QuestNode {
        id: "3",
        title: "Practice Arena",
        description: "Apply your knowledge with real projects",
        status: QuestStatus::Current,
        level: 3,
        points: 1000,
    },
    QuestNode {
        id: "4",
        title: "Advanced Topics",
        description: "Dive into complex concepts",
        status: QuestStatus::Locked,
        level: 4,
        points: 1500,
    },
    QuestNode {
        id: "5",
        title: "Mastery",
        description: "Achieve expert-level understanding",
        status: QuestStatus::Locked,
        level: 5,
        points: 2000,
    },
];

/// The quest path in journey order.
pub fn quests() -> &'static [QuestNode] {
    &QUESTS
}

/// Select a quest by id.
pub fn quest(id: &str) -> Result<&'static QuestNode, AppError> {
    QUESTS
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| AppError::QuestNotFound(id.to_string()))
}

/// Summarise a quest path.
pub fn summarize(nodes: &[QuestNode]) -> JourneySummary {
    let count = |status: QuestStatus| nodes.iter().filter(|q| q.status == status).count();
    let completed = count(QuestStatus::Completed);

    let level = nodes
        .iter()
        .find(|q| q.status == QuestStatus::Current)
        .or_else(|| {
            nodes
                .iter()
                .filter(|q| q.status == QuestStatus::Completed)
                .max_by_key(|q| q.level)
        })
        .map(|q| q.level)
        .unwrap_or(0);

    let progress = if nodes.is_empty() {
        0
    } else {
        (completed * 100 / nodes.len()) as u8
    };

    JourneySummary {
        xp_earned: nodes
            .iter()
            .filter(|q| q.status == QuestStatus::Completed)
            .map(|q| q.points)
            .sum(),
        xp_total: nodes.iter().map(|q| q.points).sum(),
        level,
        progress,
        completed,
        in_progress: count(QuestStatus::Current),
        locked: count(QuestStatus::Locked),
    }
}

/// Summary of the built-in quest path.
pub fn summary() -> JourneySummary {
    summarize(&QUESTS)
}
