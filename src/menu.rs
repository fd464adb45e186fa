//! HTML rendering for the languages menu.

/// One entry of the languages menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Locale code of the entry (e.g. "fr").
    pub locale: String,

    /// URL the entry links to.
    pub url: String,

    /// Whether this entry is the currently active locale.
    pub active: bool,
}

/// Render menu entries as a `<ul>` with the given attributes.
///
/// Attribute values, URLs, and labels are HTML-escaped. The active entry's
/// `<li>` carries the `active` class; anchor text is the uppercased locale
/// code.
pub fn render_languages_menu(entries: &[MenuEntry], attributes: &[(&str, &str)]) -> String {
    let mut html = String::from("<ul");
    for (name, value) in attributes {
        html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
    }
    html.push('>');

    for entry in entries {
        if entry.active {
            html.push_str("<li class=\"active\">");
        } else {
            html.push_str("<li>");
        }
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&entry.url),
            escape_html(&entry.locale.to_uppercase())
        ));
        html.push_str("</li>");
    }

    html.push_str("</ul>");
    html
}

/// Minimal HTML entity escaping for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
