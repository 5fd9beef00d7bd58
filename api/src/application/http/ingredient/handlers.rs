pub mod get_ingredients;
