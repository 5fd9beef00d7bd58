use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A term of the `ingredient` taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientTag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent: Option<u64>,
}

impl IngredientTag {
    pub fn new(id: u64, name: impl Into<String>, parent: Option<u64>) -> Self {
        let name = name.into();
        let slug = slugify(&name);

        Self {
            id,
            name,
            slug,
            parent,
        }
    }
}

/// Lowercases and joins alphanumeric runs with `-`, e.g. "Black Beans (canned)" -> "black-beans-canned".
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}
