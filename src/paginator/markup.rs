//! Small markup collaborators: escaping, label derivation, tag wrapping.

#![allow(dead_code)]

/// Minimal HTML entity escaping for link titles.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn a column key into a human-readable label: strips a trailing `_id`,
/// replaces dots and underscores with spaces and capitalizes each word.
///
/// `author_id` becomes `Author`, `Image.created` becomes `Image Created`.
pub fn humanize(key: &str) -> String {
    let key = key.strip_suffix("_id").unwrap_or(key);
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        match c {
            '.' | '_' | ' ' => {
                if !out.ends_with(' ') && !out.is_empty() {
                    out.push(' ');
                }
                at_word_start = true;
            }
            _ => {
                if at_word_start {
                    out.extend(c.to_uppercase());
                } else {
                    out.push(c);
                }
                at_word_start = false;
            }
        }
    }
    out.trim_end().to_string()
}

/// Convert a CamelCase model name to its underscored form
/// (`UserImage` -> `user_image`).
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lower-cased human label for a model name, used by the counter's
/// `{{model}}` placeholder (`UserImage` -> `user image`).
pub fn model_label(model: &str) -> String {
    humanize(&underscore(model)).to_lowercase()
}

/// Wrap `content` in `tag`, with an optional class attribute.
pub fn wrap(tag: &str, content: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("<{tag} class=\"{class}\">{content}</{tag}>"),
        None => format!("<{tag}>{content}</{tag}>"),
    }
}

/// Plain anchor element, the building block behind `link()`.
pub fn anchor(url: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("<a class=\"{class}\" href=\"{url}\">{text}</a>"),
        None => format!("<a href=\"{url}\">{text}</a>"),
    }
}
