pub mod common;
pub mod content;
pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod settings;
