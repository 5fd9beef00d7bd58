use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{IngredientTag, slugify},
        ports::IngredientRepository,
    },
};

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: u64,
    name: String,
    slug: Option<String>,
    parent: Option<u64>,
}

/// Ingredient taxonomy loaded once from a JSON file maintained by editors.
///
/// ```json
/// [
///   { "id": 1, "name": "Beans" },
///   { "id": 2, "name": "Black Beans", "parent": 1 }
/// ]
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonIngredientCatalog {
    tags: Vec<IngredientTag>,
}

impl JsonIngredientCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub async fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read ingredient catalog {}: {}", path.display(), e);
            CoreError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            ingredients = catalog.tags.len(),
            "Loaded ingredient catalog"
        );

        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidCatalog(format!("malformed JSON: {}", e)))?;

        let tags = entries
            .into_iter()
            .map(|entry| IngredientTag {
                slug: entry.slug.unwrap_or_else(|| slugify(&entry.name)),
                id: entry.id,
                name: entry.name,
                parent: entry.parent,
            })
            .collect();

        Self::from_tags(tags)
    }

    /// Validates the taxonomy and orders it by name.
    pub fn from_tags(mut tags: Vec<IngredientTag>) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for tag in &tags {
            if tag.name.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "ingredient {} has an empty name",
                    tag.id
                )));
            }
            if !ids.insert(tag.id) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate ingredient id {}",
                    tag.id
                )));
            }
            if !names.insert(tag.name.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate ingredient name \"{}\"",
                    tag.name
                )));
            }
        }

        let parents: HashMap<u64, Option<u64>> =
            tags.iter().map(|tag| (tag.id, tag.parent)).collect();

        for tag in &tags {
            let mut current = tag.parent;
            let mut depth = 0;

            while let Some(parent) = current {
                let Some(next) = parents.get(&parent) else {
                    return Err(CoreError::InvalidCatalog(format!(
                        "ingredient \"{}\" has unknown parent {}",
                        tag.name, parent
                    )));
                };

                depth += 1;
                if depth > tags.len() {
                    return Err(CoreError::InvalidCatalog(format!(
                        "ingredient \"{}\" is part of a parent cycle",
                        tag.name
                    )));
                }
                current = *next;
            }
        }

        tags.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(Self { tags })
    }
}

impl IngredientRepository for JsonIngredientCatalog {
    async fn fetch_all(&self) -> Result<Vec<IngredientTag>, CoreError> {
        Ok(self.tags.clone())
    }
}
