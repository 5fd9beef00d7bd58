use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::domain::ingredient::{entities::IngredientTag, form::render_selection_form};

pub const INGREDIENT_SELECTION_SHORTCODE: &str = "gmk_ingredient_selection";
pub const RESULT_CONTAINER_ID: &str = "gmk-ai-recipes";

static SHORTCODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[\s*{INGREDIENT_SELECTION_SHORTCODE}\s*/?\s*\]"))
        .expect("shortcode pattern is valid")
});

/// The markup a `[gmk_ingredient_selection]` block expands to.
pub fn render_selection_block(ingredients: &[IngredientTag]) -> String {
    format!(
        "{}<div id=\"{RESULT_CONTAINER_ID}\"></div>\n",
        render_selection_form(ingredients)
    )
}

/// Replaces every selection shortcode in page content with the rendered block.
/// Content without a shortcode is returned unchanged.
pub fn expand_content_blocks(content: &str, ingredients: &[IngredientTag]) -> String {
    if !SHORTCODE_PATTERN.is_match(content) {
        return content.to_string();
    }

    let block = render_selection_block(ingredients);
    SHORTCODE_PATTERN
        .replace_all(content, NoExpand(&block))
        .into_owned()
}
