//! Resource library data model.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Category a resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Tutorials,
    Articles,
    Documentation,
    Exercises,
    Projects,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        Self::Tutorials,
        Self::Articles,
        Self::Documentation,
        Self::Exercises,
        Self::Projects,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tutorials => "Video Tutorials",
            Self::Articles => "Articles & Guides",
            Self::Documentation => "Documentation",
            Self::Exercises => "Practice Exercises",
            Self::Projects => "Sample Projects",
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Tutorials => "tutorials",
            Self::Articles => "articles",
            Self::Documentation => "documentation",
            Self::Exercises => "exercises",
            Self::Projects => "projects",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

/// Category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ResourceCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ResourceCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// An entry in the category bar.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Tutorial,
    Article,
    Documentation,
    Exercise,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

/// A curated learning resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
    pub category: ResourceCategory,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub rating: f32,
    pub provider: &'static str,
    pub technologies: &'static [&'static str],
    pub bookmarked: bool,
    pub premium: bool,
}

impl Resource {
    /// Case-insensitive match against title, description, or any technology.
    /// An empty query matches everything; whitespace is matched literally.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }
}

/// A multi-resource learning path with progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Self-reported path progress (percent).
    pub progress: u8,
    pub total_resources: u32,
    pub completed_resources: u32,
    pub estimated_time: &'static str,
}

impl LearningPath {
    /// Share of resources completed, rounded down to a whole percent and
    /// capped at 100.
    pub fn resource_percent(&self) -> u8 {
        if self.total_resources == 0 {
            return 0;
        }
        let completed = u64::from(self.completed_resources.min(self.total_resources));
        (completed * 100 / u64::from(self.total_resources)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_roundtrip() {
        for c in ResourceCategory::ALL {
            assert_eq!(c.to_string().parse::<ResourceCategory>().unwrap(), c);
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{c}\""));
        }
        assert!(matches!(
            "podcasts".parse::<ResourceCategory>(),
            Err(AppError::UnknownCategory(_))
        ));
    }

    #[test]
    fn category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "projects".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ResourceCategory::Projects)
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn path_percent_rounds_down() {
        let path = LearningPath {
            id: 1,
            title: "t",
            description: "d",
            progress: 0,
            total_resources: 24,
            completed_resources: 16,
            estimated_time: "1 week",
        };
        assert_eq!(path.resource_percent(), 66);
    }

    #[test]
    fn path_percent_is_capped_when_over_completed() {
        let path = LearningPath {
            id: 1,
            title: "t",
            description: "d",
            progress: 0,
            total_resources: 2,
            completed_resources: 7,
            estimated_time: "1 week",
        };
        assert_eq!(path.resource_percent(), 100);

        let huge = LearningPath {
            total_resources: u32::MAX,
            completed_resources: u32::MAX,
            ..path
        };
        assert_eq!(huge.resource_percent(), 100);
    }
}
