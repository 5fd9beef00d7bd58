pub mod ingredient;
pub mod llm;
pub mod settings;
