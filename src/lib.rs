//! LearnQuest — scripted learning companion.

pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod resources;
pub mod routes;
pub mod stepper;
