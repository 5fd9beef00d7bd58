use grocerykit_core::domain::content::blocks::INGREDIENT_SELECTION_SHORTCODE;
use serde::Serialize;

pub const CLIENT_SCRIPT_PATH: &str = "/assets/grocerykit.js";
pub const GENERATE_RECIPES_PATH: &str = "/recipes/generate";

/// Content of the demo page before block expansion.
pub fn demo_page_content() -> String {
    format!(
        "<h2>What's in your basket?</h2>\n\
         <p>Tick what you have, add anything missing, and get three recipe ideas.</p>\n\
         [{INGREDIENT_SELECTION_SHORTCODE}]\n"
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    ajax_url: &'a str,
}

/// Wraps expanded content in a page that loads the submission script.
pub fn render_page(body: &str, ajax_url: &str, script_url: &str) -> String {
    let config = serde_json::to_string(&ClientConfig { ajax_url })
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n    <meta charset=\"utf-8\">\n    <title>Grocery Market Kit</title>\n</head>\n\
         <body>\n\
         {body}\
         <script>window.gmkAjax = {config};</script>\n\
         <script src=\"{script_url}\"></script>\n\
         </body>\n\
         </html>\n"
    )
}
