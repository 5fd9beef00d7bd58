/// Escapes text for use in HTML element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inserts `<br />` before every line break. `\r\n` and `\n\r` count as one break.
pub fn nl2br(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                out.push_str("<br />");
                out.push(c);

                let pair = if c == '\r' { '\n' } else { '\r' };
                if chars.peek() == Some(&pair) {
                    out.push(pair);
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}
