pub mod entities;
pub mod form;
pub mod ports;
pub mod services;

pub use entities::IngredientTag;
pub use ports::{IngredientRepository, IngredientService};
