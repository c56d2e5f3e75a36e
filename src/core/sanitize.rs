// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `n` characters (not bytes) of `s`.
pub fn leading_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// "(9:00-10:35)" → "9:00-10:35"
pub fn strip_parens(s: &str) -> String {
    s.trim().trim_start_matches('(').trim_end_matches(')').trim().to_string()
}
