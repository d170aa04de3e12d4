//! Resource library — curated materials, categories, and learning paths.

pub mod library;
pub mod model;

pub use library::{bookmarked, categories, filter, learning_paths};
pub use model::{
    CategoryFilter, CategoryInfo, Difficulty, LearningPath, Resource, ResourceCategory,
    ResourceKind,
};
