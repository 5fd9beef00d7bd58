pub const FAMILY_SIZE: &str = "four";
pub const BUDGET_PER_SERVING: &str = "$5";
pub const COOKWARE: &str = "only one stovetop pot or pan";
pub const RETAILER_STOREFRONT: &str = "https://schnucks.com/shop";
pub const READING_LEVEL: &str = "3rd grade";

/// Builds the recipe instruction. Ingredients are joined with `", "` as given;
/// commas or instructions inside an ingredient are passed through unescaped.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "Give me easy recipes for a family of {FAMILY_SIZE} using some or all of the selected \
         ingredients which can be cooked in {COOKWARE} for {BUDGET_PER_SERVING} or less per \
         serving, using only SNAP eligible food items from {RETAILER_STOREFRONT} - include the \
         itemized pricing for each ingredient and keep it at a {READING_LEVEL} reading level. \
         Mark the ingredients not selected as ingredients needed. Ingredients: {}",
        ingredients.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text() {
        let prompt = build_recipe_prompt(&["Rice".to_string(), "Black Beans".to_string()]);

        assert_eq!(
            prompt,
            "Give me easy recipes for a family of four using some or all of the selected \
             ingredients which can be cooked in only one stovetop pot or pan for $5 or less per \
             serving, using only SNAP eligible food items from https://schnucks.com/shop - include \
             the itemized pricing for each ingredient and keep it at a 3rd grade reading level. \
             Mark the ingredients not selected as ingredients needed. Ingredients: Rice, Black Beans"
        );
    }

    #[test]
    fn test_prompt_with_no_ingredients() {
        let prompt = build_recipe_prompt(&[]);

        assert!(prompt.ends_with("Ingredients: "));
    }

    #[test]
    fn test_prompt_keeps_embedded_commas() {
        let prompt = build_recipe_prompt(&["Salt, kosher".to_string(), "Eggs".to_string()]);

        assert!(prompt.ends_with("Ingredients: Salt, kosher, Eggs"));
    }
}
