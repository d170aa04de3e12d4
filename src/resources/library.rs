//! The built-in resource catalog and its search.

use super::model::{
    CategoryFilter, CategoryInfo, Difficulty, LearningPath, Resource, ResourceCategory,
    ResourceKind,
};

static RESOURCES: [Resource; 6] = [
    Resource {
        id: 1,
        title: "Complete React Native Masterclass",
        description: "Learn React Native from scratch with hands-on projects and real-world examples.",
        kind: ResourceKind::Tutorial,
        category: ResourceCategory::Tutorials,
        duration: "12 hours",
        difficulty: Difficulty::Intermediate,
        rating: 4.9,
        provider: "CodeAcademy Pro",
        technologies: &["React Native", "JavaScript", "Mobile Development"],
        bookmarked: true,
        premium: true,
    },
    Resource {
        id: 2,
        title: "Node.js API Development Guide",
        description: "Build scalable REST APIs with Node.js, Express, and MongoDB.",
        kind: ResourceKind::Article,
        category: ResourceCategory::Articles,
        duration: "45 min read",
        difficulty: Difficulty::Advanced,
        rating: 4.7,
        provider: "DevTo Community",
        technologies: &["Node.js", "Express", "MongoDB", "API"],
        bookmarked: false,
        premium: false,
    },
    Resource {
        id: 3,
        title: "Firebase Authentication Setup",
        description: "Complete documentation for implementing Firebase Auth in your mobile app.",
        kind: ResourceKind::Documentation,
        category: ResourceCategory::Documentation,
        duration: "30 min read",
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        provider: "Firebase Docs",
        technologies: &["Firebase", "Authentication", "Security"],
        bookmarked: true,
        premium: false,
    },
    Resource {
        id: 4,
        title: "JavaScript Coding Challenges",
        description: "50+ practice problems to master JavaScript fundamentals and algorithms.",
        kind: ResourceKind::Exercise,
        category: ResourceCategory::Exercises,
        duration: "8 hours",
        difficulty: Difficulty::Mixed,
        rating: 4.6,
        provider: "CodeWars",
        technologies: &["JavaScript", "Algorithms", "Problem Solving"],
        bookmarked: false,
        premium: false,
    },
    Resource {
        id: 5,
        title: "Full-Stack E-commerce Project",
        description: "Complete source code and tutorial for building a modern e-commerce platform.",
        kind: ResourceKind::Project,
        category: ResourceCategory::Projects,
        duration: "20 hours",
        difficulty: Difficulty::Advanced,
        rating: 4.9,
        provider: "GitHub",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe"],
        bookmarked: true,
        premium: true,
    },
    Resource {
        id: 6,
        title: "CSS Grid and Flexbox Mastery",
        description: "Interactive guide to modern CSS layout techniques with live examples.",
        kind: ResourceKind::Tutorial,
        category: ResourceCategory::Tutorials,
        duration: "6 hours",
        difficulty: Difficulty::Intermediate,
        rating: 4.8,
        provider: "CSS-Tricks",
        technologies: &["CSS", "HTML", "Layout", "Responsive Design"],
        bookmarked: false,
        premium: false,
    },
];

static LEARNING_PATHS: [LearningPath; 3] = [
    LearningPath {
        id: 1,
        title: "Mobile App Development Path",
        description: "Complete roadmap from beginner to expert mobile developer",
        progress: 65,
        total_resources: 24,
        completed_resources: 16,
        estimated_time: "12 weeks",
    },
    LearningPath {
        id: 2,
        title: "Full-Stack Web Development",
        description: "Master frontend and backend web development",
        progress: 40,
        total_resources: 32,
        completed_resources: 13,
        estimated_time: "16 weeks",
    },
    LearningPath {
        id: 3,
        title: "Data Science & ML Path",
        description: "Learn data science and machine learning from scratch",
        progress: 20,
        total_resources: 28,
        completed_resources: 6,
        estimated_time: "20 weeks",
    },
];

pub fn learning_paths() -> &'static [LearningPath] {
    &LEARNING_PATHS
}

/// The category bar, starting with the catch-all entry.
pub fn categories() -> Vec<CategoryInfo> {
    std::iter::once(CategoryInfo {
        id: "all".to_string(),
        name: "All Resources",
    })
    .chain(ResourceCategory::ALL.iter().map(|c| CategoryInfo {
        id: c.to_string(),
        name: c.label(),
    }))
    .collect()
}

/// Resources matching both the text query and the category filter.
pub fn filter(query: &str, category: CategoryFilter) -> Vec<&'static Resource> {
    RESOURCES
        .iter()
        .filter(|r| category.matches(r.category) && r.matches_query(query))
        .collect()
}

pub fn bookmarked() -> Vec<&'static Resource> {
    RESOURCES.iter().filter(|r| r.bookmarked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: &[&Resource]) -> Vec<u32> {
        found.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_all_categories_returns_everything() {
        assert_eq!(filter("", CategoryFilter::All).len(), RESOURCES.len());
    }

    #[test]
    fn whitespace_query_is_not_blank() {
        assert!(filter("  ", CategoryFilter::All).is_empty());
        assert!(!filter(" ", CategoryFilter::All).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_over_title() {
        assert_eq!(ids(&filter("css GRID", CategoryFilter::All)), vec![6]);
    }

    #[test]
    fn query_matches_technologies() {
        // "Node.js" is in resource 2's title and resource 5's technologies
        assert_eq!(ids(&filter("node.js", CategoryFilter::All)), vec![2, 5]);
        assert_eq!(ids(&filter("postgres", CategoryFilter::All)), vec![5]);
    }

    #[test]
    fn query_matches_description() {
        assert_eq!(ids(&filter("e-commerce platform", CategoryFilter::All)), vec![5]);
    }

    #[test]
    fn category_filter_is_equality() {
        let tutorials = filter("", CategoryFilter::Only(ResourceCategory::Tutorials));
        assert_eq!(ids(&tutorials), vec![1, 6]);
    }

    #[test]
    fn query_and_category_combine() {
        let found = filter("javascript", CategoryFilter::Only(ResourceCategory::Exercises));
        assert_eq!(ids(&found), vec![4]);
        assert!(filter("javascript", CategoryFilter::Only(ResourceCategory::Projects)).is_empty());
    }

    #[test]
    fn bookmarks() {
        assert_eq!(ids(&bookmarked()), vec![1, 3, 5]);
    }

    #[test]
    fn category_bar_starts_with_all() {
        let bar = categories();
        assert_eq!(bar.len(), 6);
        assert_eq!(bar[0].id, "all");
        assert_eq!(bar[5].id, "projects");
    }

    #[test]
    fn learning_path_percentages() {
        let percents: Vec<u8> = learning_paths().iter().map(|p| p.resource_percent()).collect();
        assert_eq!(percents, vec![66, 40, 21]);
    }
}
