// src/core/sanitize.rs

/// Typographic characters the site emits, with their plain replacements.
const TYPOGRAPHIC: &[(char, &str)] = &[
    ('\n', " "),
    ('\r', ""),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2013}', "-"),
    ('\u{00A0}', " "),
];

/// Replace newlines, smart quotes and en-dashes with ASCII equivalents.
/// Already-sanitized text passes through unchanged.
pub fn sanitize_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match TYPOGRAPHIC.iter().find(|(c, _)| *c == ch) {
            Some((_, rep)) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    out
}

/// Collapse sequences of whitespace into a single space and trim.
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

/// "sORCERER" → "Sorcerer". Only the first character is uppercased.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}
