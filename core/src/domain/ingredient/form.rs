use crate::domain::{common::html::escape_html, ingredient::entities::IngredientTag};

pub const FORM_ID: &str = "gmk-ingredient-form";
pub const CHECKED_FIELD: &str = "ingredients";
pub const OTHER_FIELD: &str = "other_ingredients";
pub const OTHER_FIELD_COUNT: usize = 3;

const FORM_STYLE: &str = r#"<style>
    .gmk-ingredient-columns {
        column-count: 3;
        column-gap: 20px;
    }
    .gmk-ingredient-columns ul {
        margin: 0;
        padding: 0;
        list-style: none;
    }
    .gmk-ingredient-columns li {
        break-inside: avoid;
        padding: 5px 0;
    }
</style>
"#;

/// Renders the ingredient checklist: one checkbox per tag, in the given order,
/// followed by the free-text fields and the submit button.
pub fn render_selection_form(ingredients: &[IngredientTag]) -> String {
    let mut html = String::from(FORM_STYLE);

    html.push_str(&format!("<form id=\"{FORM_ID}\">\n"));
    html.push_str("    <h3>Select Ingredients:</h3>\n");
    html.push_str("    <div class=\"gmk-ingredient-columns\">\n");
    html.push_str("        <ul>\n");

    for ingredient in ingredients {
        let name = escape_html(&ingredient.name);
        html.push_str(&format!(
            "            <li>\n                <label>\n                    <input type=\"checkbox\" name=\"{CHECKED_FIELD}[]\" value=\"{name}\">\n                    {name}\n                </label>\n            </li>\n"
        ));
    }

    html.push_str("        </ul>\n");
    html.push_str("    </div>\n");
    html.push_str("    <h3>Other Ingredients:</h3>\n");

    for index in 1..=OTHER_FIELD_COUNT {
        html.push_str(&format!(
            "    <input type=\"text\" name=\"{OTHER_FIELD}[]\" placeholder=\"Other Ingredient {index}\">\n"
        ));
    }

    html.push_str("    <button type=\"submit\">Generate AI Recipes</button>\n");
    html.push_str("</form>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox_values(html: &str) -> Vec<String> {
        html.split("type=\"checkbox\"")
            .skip(1)
            .filter_map(|chunk| {
                let start = chunk.find("value=\"")? + "value=\"".len();
                let end = chunk[start..].find('"')?;
                Some(chunk[start..start + end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_one_checkbox_per_tag() {
        let tags = vec![
            IngredientTag::new(1, "Black Beans", None),
            IngredientTag::new(2, "Rice", None),
            IngredientTag::new(3, "Brown Rice", Some(2)),
        ];

        let html = render_selection_form(&tags);

        assert_eq!(
            checkbox_values(&html),
            vec!["Black Beans", "Rice", "Brown Rice"]
        );
    }

    #[test]
    fn test_empty_catalog_still_renders_free_text_fields() {
        let html = render_selection_form(&[]);

        assert!(checkbox_values(&html).is_empty());
        assert_eq!(html.matches("name=\"other_ingredients[]\"").count(), 3);
        assert!(html.contains("placeholder=\"Other Ingredient 3\""));
        assert!(html.contains("<button type=\"submit\">Generate AI Recipes</button>"));
    }

    #[test]
    fn test_tag_names_are_escaped() {
        let tags = vec![IngredientTag::new(7, "Mac & \"Cheese\"", None)];

        let html = render_selection_form(&tags);

        assert_eq!(checkbox_values(&html), vec!["Mac &amp; &quot;Cheese&quot;"]);
        assert!(!html.contains("Mac & \"Cheese\""));
    }
}
