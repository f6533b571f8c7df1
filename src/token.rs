use serde::{Deserialize, Serialize};

/// A query token with its UTF-8 byte offsets in the raw query string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the raw query.
    pub start: usize,
    /// Byte offset (exclusive) in the raw query.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Separators that delimit brand names inside one query string.
///
/// Queries routinely arrive typed on either an ASCII or a CJK keyboard, so
/// the full-width comma and the enumeration comma are treated exactly like
/// the ASCII comma.
fn is_separator(ch: char) -> bool {
    matches!(ch, ',' | '，' | '、')
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// Splits a raw query into candidate brand tokens.
///
/// Segments are delimited by comma-class separators and stripped of leading
/// and trailing blanks; interior spaces survive, so `"Nike, Under Armour"`
/// yields the two tokens `"Nike"` and `"Under Armour"`. Empty segments are
/// dropped, ordering follows the input, and nothing is deduplicated.
///
/// Deterministic and pure; any input is valid, including the empty string
/// (which yields an empty Vec).
pub fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut segment_start = 0usize;

    for (idx, ch) in raw.char_indices() {
        if is_separator(ch) {
            push_segment(raw, segment_start, idx, &mut tokens);
            segment_start = idx + ch.len_utf8();
        }
    }
    push_segment(raw, segment_start, raw.len(), &mut tokens);

    tokens
}

fn push_segment(raw: &str, start: usize, end: usize, out: &mut Vec<Token>) {
    let segment = &raw[start..end];
    let text = segment.trim_matches(is_blank);
    if text.is_empty() {
        return;
    }
    let leading = segment.len() - segment.trim_start_matches(is_blank).len();
    let token_start = start + leading;
    out.push(Token {
        text: text.to_string(),
        start: token_start,
        end: token_start + text.len(),
    });
}
