//! CLI library components for the `sf` flashcard tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod summary;
pub mod types;
