// src/core/html.rs
//
// Tolerant, case-insensitive scanning over raw HTML. Not a DOM: blocks are
// found by the first matching close tag, so only use these for elements that
// do not nest inside themselves (table rows, cells, spans).

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Byte offset of the next ASCII case-insensitive `needle` at or after `from`.
/// Works in place over `s`; `needle` must be ASCII, so hits are always char boundaries.
pub fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = s.as_bytes().get(from..)?;
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(from);
    }
    let first = needle[0].to_ascii_lowercase();
    let mut i = 0usize;
    while i + needle.len() <= hay.len() {
        let rel = hay[i..].iter().position(|b| b.to_ascii_lowercase() == first)?;
        i += rel;
        if i + needle.len() > hay.len() {
            return None;
        }
        if hay[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(from + i);
        }
        i += 1;
    }
    None
}

/// Next `<tag ...>` at or after `from`. Returns `(start, open_end)`, where
/// `open_end` is one past the closing `>`. `<tr` does not match `<track`.
pub fn next_open_tag_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let needle = join!("<", tag);
    let mut pos = from;
    loop {
        let start = find_ci(s, &needle, pos)?;
        let after = start + needle.len();
        match s.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                let open_end = s[start..].find('>')? + start + 1;
                return Some((start, open_end));
            }
            _ => pos = after,
        }
    }
}

/// Next `<tag ...> … </tag>` block. Returns `(start, end)` with `end` one past the close tag.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let (start, open_end) = next_open_tag_ci(s, tag, from)?;
    let close = join!("</", tag, ">");
    let close_start = find_ci(s, &close, open_end)?;
    Some((start, close_start + close.len()))
}

/// Next `tag` block whose class list contains `class`.
pub fn next_block_with_class(s: &str, tag: &str, class: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some((start, end)) = next_tag_block_ci(s, tag, pos) {
        if has_class(open_tag(&s[start..end]), class) {
            return Some((start, end));
        }
        pos = start + 1;
    }
    None
}

/// All `tag` blocks carrying `class`, in document order.
pub fn blocks_with_class<'a>(s: &'a str, tag: &str, class: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = next_block_with_class(s, tag, class, pos) {
        out.push(&s[start..end]);
        pos = end;
    }
    out
}

/// `<td class="x">…</td>` → `<td class="x">`
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Attributes of an open tag as `(lowercase name, decoded value)`.
/// Bare attributes (`<option selected>`) get an empty value.
pub fn attrs(open_tag: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut rest = open_tag.trim_start_matches('<');
    let name_end = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());
    rest = &rest[name_end..];

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() || rest.starts_with('>') {
            break;
        }
        let key_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
            .unwrap_or(rest.len());
        let key = to_lower(&rest[..key_end]);
        rest = rest[key_end..].trim_start();

        let mut value = s!();
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (raw, tail) = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    match body.find(q) {
                        Some(close) => (&body[..close], &body[close + 1..]),
                        None => (body, ""),
                    }
                }
                _ => {
                    let stop = after_eq
                        .find(|c: char| c.is_whitespace() || c == '>')
                        .unwrap_or(after_eq.len());
                    (&after_eq[..stop], &after_eq[stop..])
                }
            };
            value = normalize_entities(raw);
            rest = tail;
        }
        if key.is_empty() { continue; }
        out.push((key, value));
    }
    out
}

pub fn attr(open_tag: &str, name: &str) -> Option<String> {
    attrs(open_tag)
        .into_iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr(open_tag, "class")
        .map(|c| c.split_whitespace().any(|x| x.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Visible text of a block: tags dropped, entities decoded, whitespace collapsed.
pub fn text_of(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}
