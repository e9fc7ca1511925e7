//! Token classification.
//!
//! This module provides the single-pass scan that wraps each recognized JSON
//! token in its `<span class="…">` markup. The scan is driven by one combined
//! pattern whose alternatives are tried in a fixed priority order; see
//! [`grammar`](crate::grammar) for the order and why it matters.
//!
//! The classifier operates on placeholder-substituted text (comments already
//! extracted) and passes placeholder tokens through untouched so that
//! restoration can find them afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use json_highlight::{classify_tokens, HighlightOptions};
//!
//! let options = HighlightOptions::new();
//! let html = classify_tokens("{\"a\": 1}", &options).unwrap();
//! assert_eq!(
//!     html,
//!     "<span class=\"json-brackets\">{</span>\
//!      <span class=\"json-key\">\"a\"</span>\
//!      <span class=\"json-colon\">: </span>\
//!      <span class=\"json-number\">1</span>\
//!      <span class=\"json-brackets\">}</span>"
//! );
//! ```

use crate::{classes, Error, HighlightOptions, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The combined token pattern. Alternative order is load-bearing: the regex
/// engine prefers earlier alternatives at equal start positions, which is how
/// a quoted string followed by a colon becomes a key instead of a bare
/// string, and how a colon consumed by a key never matches again on its own.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?P<key>"[^"]*")\s*:\s*"#,
        r#"|(?P<string>"[^"\\]*(?:\\.[^"\\]*)*")"#,
        r"|(?P<number>-?\d+(?:\.\d+)?)",
        r"|\b(?P<bool>true|false)\b",
        r"|\b(?P<null>null)\b",
        r"|(?P<brackets>[{}\[\]])",
        r"|(?P<colon>:)",
        r"|(?P<comma>,)",
        r"|(?P<placeholder>__COMMENT_PLACEHOLDER_\d+__)",
    ))
    .unwrap()
});

/// Lexical category of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Str,
    Number,
    Bool,
    Null,
    Brackets,
    Colon,
    Comma,
}

impl TokenKind {
    const fn class(self) -> &'static str {
        match self {
            TokenKind::Str => classes::STRING,
            TokenKind::Number => classes::NUMBER,
            TokenKind::Bool => classes::BOOL,
            TokenKind::Null => classes::NULL,
            TokenKind::Brackets => classes::BRACKETS,
            TokenKind::Colon => classes::COLON,
            TokenKind::Comma => classes::COMMA,
        }
    }
}

/// Capture-group names in dispatch order. `key` and `placeholder` are
/// special-cased in [`render_match`]; everything else wraps uniformly.
const CATEGORIES: &[(&str, TokenKind)] = &[
    ("string", TokenKind::Str),
    ("number", TokenKind::Number),
    ("bool", TokenKind::Bool),
    ("null", TokenKind::Null),
    ("brackets", TokenKind::Brackets),
    ("colon", TokenKind::Colon),
    ("comma", TokenKind::Comma),
];

/// Wraps `text` in a span carrying `class`.
pub(crate) fn wrap_span(text: &str, class: &str) -> String {
    format!("<span class=\"{class}\">{text}</span>")
}

/// Escapes `&`, `<`, `>`, and `"` for embedding in HTML.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn emit(text: &str, class: &str, options: &HighlightOptions) -> String {
    if options.escape_html {
        wrap_span(&escape_text(text), class)
    } else {
        wrap_span(text, class)
    }
}

/// Renders one match of the combined pattern.
///
/// Exactly one named group is populated per match. A key emits two spans:
/// the quoted key, then a synthesized `": "` separator replacing whatever
/// colon spacing the source used. A placeholder is returned verbatim so the
/// restorer can still find it.
fn render_match(caps: &Captures<'_>, options: &HighlightOptions) -> Result<String> {
    if let Some(key) = caps.name("key") {
        let mut out = emit(key.as_str(), classes::KEY, options);
        out.push_str(&wrap_span(": ", classes::COLON));
        return Ok(out);
    }
    for &(name, kind) in CATEGORIES {
        if let Some(m) = caps.name(name) {
            return Ok(emit(m.as_str(), kind.class(), options));
        }
    }
    if let Some(placeholder) = caps.name("placeholder") {
        return Ok(placeholder.as_str().to_owned());
    }
    Err(Error::classification("match without a captured alternative"))
}

/// Wraps every recognized token in `text` in its markup span.
///
/// Text between matches (whitespace, unrecognized punctuation, a dangling
/// quote from an unterminated string) passes through unchanged, escaped only
/// when `options.escape_html` is set.
///
/// # Errors
///
/// Returns [`Error::Classification`] if the scan reaches a state it cannot
/// render. The error carries no category detail.
///
/// # Examples
///
/// ```rust
/// use json_highlight::{classify_tokens, HighlightOptions};
///
/// let options = HighlightOptions::new();
/// let html = classify_tokens("null", &options).unwrap();
/// assert_eq!(html, "<span class=\"json-null\">null</span>");
/// ```
pub fn classify_tokens(text: &str, options: &HighlightOptions) -> Result<String> {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut last = 0;
    for caps in TOKEN_PATTERN.captures_iter(text) {
        let matched = caps
            .get(0)
            .ok_or_else(|| Error::classification("capture without a whole match"))?;
        let gap = &text[last..matched.start()];
        if options.escape_html {
            out.push_str(&escape_text(gap));
        } else {
            out.push_str(gap);
        }
        out.push_str(&render_match(&caps, options)?);
        last = matched.end();
    }
    let tail = &text[last..];
    if options.escape_html {
        out.push_str(&escape_text(tail));
    } else {
        out.push_str(tail);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> String {
        classify_tokens(text, &HighlightOptions::new()).unwrap()
    }

    fn span(class: &str, text: &str) -> String {
        format!("<span class=\"{class}\">{text}</span>")
    }

    #[test]
    fn test_key_emits_key_and_normalized_colon() {
        assert_eq!(
            classify("\"name\"  :   1"),
            span("json-key", "\"name\"") + &span("json-colon", ": ") + &span("json-number", "1")
        );
    }

    #[test]
    fn test_string_without_colon_is_a_string() {
        assert_eq!(classify("\"name\""), span("json-string", "\"name\""));
    }

    #[test]
    fn test_escaped_quote_does_not_end_a_string() {
        assert_eq!(
            classify(r#""a\"b""#),
            span("json-string", r#""a\"b""#)
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("-3.5"), span("json-number", "-3.5"));
        assert_eq!(classify("42"), span("json-number", "42"));
    }

    #[test]
    fn test_exponent_mantissa_only() {
        // Exponent notation is not recognized; the mantissa matches alone.
        assert_eq!(
            classify("1.5e3"),
            span("json-number", "1.5") + "e" + &span("json-number", "3")
        );
    }

    #[test]
    fn test_bool_and_null_are_word_bounded() {
        assert_eq!(classify("true"), span("json-bool", "true"));
        assert_eq!(classify("null"), span("json-null", "null"));
        assert_eq!(classify("nullify"), "nullify");
        assert_eq!(classify("untrue"), "untrue");
    }

    #[test]
    fn test_structural_characters() {
        assert_eq!(
            classify("{}"),
            span("json-brackets", "{") + &span("json-brackets", "}")
        );
        assert_eq!(classify(","), span("json-comma", ","));
        assert_eq!(classify(":"), span("json-colon", ":"));
    }

    #[test]
    fn test_placeholder_passes_through_unwrapped() {
        assert_eq!(
            classify("__COMMENT_PLACEHOLDER_0__"),
            "__COMMENT_PLACEHOLDER_0__"
        );
    }

    #[test]
    fn test_unterminated_string_leaves_dangling_quote() {
        // The string alternative cannot match without a closing quote; the
        // bare quote falls through and the rest classifies normally.
        assert_eq!(classify("\"unterminated"), "\"unterminated");
        assert_eq!(
            classify("\"a 1"),
            "\"a ".to_owned() + &span("json-number", "1")
        );
    }

    #[test]
    fn test_whitespace_passes_through() {
        assert_eq!(
            classify("  true \n false "),
            "  ".to_owned() + &span("json-bool", "true") + " \n " + &span("json-bool", "false") + " "
        );
    }

    #[test]
    fn test_escape_html_wraps_escaped_token_text() {
        let options = HighlightOptions::new().with_escape_html(true);
        assert_eq!(
            classify_tokens("\"<i>\" & 1", &options).unwrap(),
            span("json-string", "&quot;&lt;i&gt;&quot;") + " &amp; " + &span("json-number", "1")
        );
    }
}
