use crate::domain::common::html::{escape_html, nl2br};

/// Converts raw model output into markup: escaped once, line breaks kept as `<br />`.
pub fn format_recipe_html(content: &str) -> String {
    nl2br(&escape_html(content))
}
