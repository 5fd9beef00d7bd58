use grocerykit_core::domain::{
    common::html::escape_html,
    settings::entities::{OPENAI_API_KEY_SETTING, Settings},
};

pub const SAVED_NOTICE: &str = "Settings saved.";

/// Settings page with the stored key prefilled. `notice` is shown above the form.
pub fn render_settings_page(settings: &Settings, action: &str, notice: Option<&str>) -> String {
    let value = escape_html(settings.openai_api_key.as_deref().unwrap_or_default());

    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <title>Grocery Market Kit - AI Settings</title>\n");
    html.push_str("</head>\n<body>\n<div class=\"wrap\">\n");
    html.push_str("    <h1>Grocery Market Kit - AI Settings</h1>\n");

    if let Some(notice) = notice {
        html.push_str(&format!(
            "    <div class=\"notice\"><p>{}</p></div>\n",
            escape_html(notice)
        ));
    }

    html.push_str(&format!(
        "    <form method=\"post\" action=\"{}\">\n",
        escape_html(action)
    ));
    html.push_str("        <table class=\"form-table\">\n");
    html.push_str("            <tr valign=\"top\">\n");
    html.push_str("                <th scope=\"row\">OpenAI API Key</th>\n");
    html.push_str(&format!(
        "                <td><input type=\"text\" name=\"{OPENAI_API_KEY_SETTING}\" value=\"{value}\" /></td>\n"
    ));
    html.push_str("            </tr>\n");
    html.push_str("        </table>\n");
    html.push_str("        <button type=\"submit\">Save Changes</button>\n");
    html.push_str("    </form>\n</div>\n</body>\n</html>\n");

    html
}
