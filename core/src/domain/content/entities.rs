use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const RECIPE_POST_TYPE: &str = "ai_recipe";
pub const INGREDIENT_TAXONOMY: &str = "ingredient";

/// Label set shown by the content-management UI for a content type or taxonomy.
/// Labels that only one kind uses are optional and omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Labels {
    pub name: String,
    pub singular_name: String,
    pub menu_name: String,
    pub all_items: String,
    pub search_items: String,
    pub edit_item: String,
    pub add_new_item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_new: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found_in_trash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_admin_bar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_item_colon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_item_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Title,
    Editor,
    Thumbnail,
}

/// Schema of the recipe record. Records themselves live in the host CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentTypeDefinition {
    pub name: String,
    pub labels: Labels,
    pub public: bool,
    pub has_archive: bool,
    pub slug: String,
    pub supports: Vec<RecordField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaxonomyDefinition {
    pub name: String,
    pub labels: Labels,
    pub hierarchical: bool,
    pub public: bool,
    pub slug: String,
    pub object_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentTypes {
    pub post_types: Vec<ContentTypeDefinition>,
    pub taxonomies: Vec<TaxonomyDefinition>,
}

impl ContentTypeDefinition {
    pub fn ai_recipe() -> Self {
        Self {
            name: RECIPE_POST_TYPE.to_string(),
            labels: Labels {
                name: "AI Recipes".to_string(),
                singular_name: "AI Recipe".to_string(),
                menu_name: "AI Recipes".to_string(),
                all_items: "All AI Recipes".to_string(),
                search_items: "Search AI Recipes".to_string(),
                edit_item: "Edit AI Recipe".to_string(),
                add_new_item: "Add New AI Recipe".to_string(),
                add_new: Some("Add New AI Recipe".to_string()),
                new_item: Some("New AI Recipe".to_string()),
                view_item: Some("View AI Recipe".to_string()),
                not_found: Some("No AI recipes found".to_string()),
                not_found_in_trash: Some("No AI recipes found in trash".to_string()),
                name_admin_bar: Some("AI Recipe".to_string()),
                ..Labels::default()
            },
            public: true,
            has_archive: true,
            slug: "ai-recipes".to_string(),
            supports: vec![RecordField::Title, RecordField::Editor, RecordField::Thumbnail],
        }
    }
}

impl TaxonomyDefinition {
    pub fn ingredient() -> Self {
        Self {
            name: INGREDIENT_TAXONOMY.to_string(),
            labels: Labels {
                name: "Ingredients".to_string(),
                singular_name: "Ingredient".to_string(),
                menu_name: "Ingredients".to_string(),
                all_items: "All Ingredients".to_string(),
                search_items: "Search Ingredients".to_string(),
                edit_item: "Edit Ingredient".to_string(),
                add_new_item: "Add New Ingredient".to_string(),
                parent_item: Some("Parent Ingredient".to_string()),
                parent_item_colon: Some("Parent Ingredient:".to_string()),
                update_item: Some("Update Ingredient".to_string()),
                new_item_name: Some("New Ingredient Name".to_string()),
                ..Labels::default()
            },
            hierarchical: true,
            public: true,
            slug: "ingredients".to_string(),
            object_types: vec![RECIPE_POST_TYPE.to_string()],
        }
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            post_types: vec![ContentTypeDefinition::ai_recipe()],
            taxonomies: vec![TaxonomyDefinition::ingredient()],
        }
    }
}
