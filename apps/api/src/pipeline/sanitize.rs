//! Text Sanitizer: pure escaping helpers for request literals and markdown output.
//!
//! Requests are serialized by `serde_json`, so none of this is needed for the wire
//! format itself. The demos still normalise quotes in the text they send so the
//! prompt the user inspects is the prompt the model receives.

use serde::{Deserialize, Serialize};

/// Characters a markdown renderer treats as formatting controls.
/// `$` is included because math-enabled renderers open inline formulas on it.
const MARKDOWN_SPECIAL: &[char] = &[
    '\\', '*', '_', '`', '[', ']', '(', ')', '#', '+', '-', '.', '!', '$',
];

/// How quote characters are made safe inside a single-quoted request literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// `'` → `''` and `"` → `""`.
    #[default]
    Double,
    /// Quotes are removed outright.
    Strip,
}

impl QuoteMode {
    pub fn apply(self, text: &str) -> String {
        match self {
            QuoteMode::Double => escape_literal(text),
            QuoteMode::Strip => strip_quotes(text),
        }
    }
}

/// Doubles single and double quotes so the text can sit inside a quoted literal.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\'' => out.push_str("''"),
            '"' => out.push_str("\"\""),
            _ => out.push(c),
        }
    }
    out
}

/// Drops single and double quotes entirely.
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\'' | '"')).collect()
}

/// Backslash-escapes every markdown control character.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
