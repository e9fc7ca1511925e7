//! Comment extraction and restoration.
//!
//! Comments are not JSON tokens, and their text can contain anything —
//! including things that look exactly like JSON tokens. To keep the token
//! classifier from chewing on comment bodies, highlighting runs in two
//! phases around it:
//!
//! 1. [`extract_comments`] replaces every `//` and `/* */` comment with an
//!    opaque placeholder (`__COMMENT_PLACEHOLDER_<index>__`) and records the
//!    original text in a [`CommentStore`].
//! 2. [`restore_comments`] swaps each placeholder back for its stored text
//!    after classification, optionally giving continuation comments
//!    (`// ...`) their own span.
//!
//! The store is an ordinary value threaded through the pipeline, so
//! concurrent highlight calls never interfere with each other.
//!
//! ## Examples
//!
//! ```rust
//! use json_highlight::{extract_comments, restore_comments, HighlightOptions};
//!
//! let source = "{} // trailing note\n";
//! let (stripped, store) = extract_comments(source);
//! assert_eq!(stripped, "{} __COMMENT_PLACEHOLDER_0__");
//! assert_eq!(store.len(), 1);
//!
//! // Plain restoration is an exact round trip.
//! let options = HighlightOptions::new().with_highlight_continuations(false);
//! let restored = restore_comments(&stripped, &store, &options).unwrap();
//! assert_eq!(restored, source);
//! ```

use crate::classify::{escape_text, wrap_span};
use crate::{classes, Error, HighlightOptions, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches a block comment (non-greedy, may span lines) or a line comment up
/// to and including the next newline. Alternative order mirrors the scan:
/// block first, then line.
static COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/|//[^\n]*\n?").unwrap());

/// Matches a placeholder and captures its embedded store index.
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__COMMENT_PLACEHOLDER_(?P<index>\d+)__").unwrap());

/// Matches a comment whose entire content is `...`: optional leading
/// whitespace, `//`, optional whitespace, the three dots, optional trailing
/// whitespace (which covers the newline captured with a line comment).
static CONTINUATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<lead>\s*)//(?P<mid>\s*)\.\.\.(?P<trail>\s*)$").unwrap());

/// The ordered store of comments extracted from one document.
///
/// Comments are held in extraction order; the position of a comment in the
/// store is the index embedded in its placeholder. A store is scoped to a
/// single highlight operation: created by [`extract_comments`], read by
/// [`restore_comments`], then dropped.
///
/// # Examples
///
/// ```rust
/// use json_highlight::extract_comments;
///
/// let (_, store) = extract_comments("// a\n/* b */");
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(0), Some("// a\n"));
/// assert_eq!(store.get(1), Some("/* b */"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentStore {
    comments: Vec<String>,
}

impl CommentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored comments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Returns `true` if no comments were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Returns the comment stored at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.comments.get(index).map(String::as_str)
    }

    /// Iterates over the stored comments in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().map(String::as_str)
    }

    /// Returns the placeholder text for a store index.
    ///
    /// Placeholders for distinct indices never overlap textually: the
    /// trailing `__` ends every placeholder, so one index's placeholder is
    /// never a substring of another's.
    #[must_use]
    pub fn placeholder(index: usize) -> String {
        format!("__COMMENT_PLACEHOLDER_{index}__")
    }

    /// Appends a comment and returns the placeholder that stands in for it.
    fn intern(&mut self, comment: &str) -> String {
        let index = self.comments.len();
        self.comments.push(comment.to_owned());
        Self::placeholder(index)
    }
}

/// Replaces every comment in `text` with a placeholder.
///
/// Returns the substituted text together with the store holding the original
/// comment texts. Comments are found left to right, non-overlapping, in a
/// single pass; a `//` inside a string literal is still treated as a comment
/// opener, since extraction runs before any token structure is known.
///
/// # Examples
///
/// ```rust
/// use json_highlight::extract_comments;
///
/// let (stripped, store) = extract_comments("/* header */\n{\"a\": 1}");
/// assert_eq!(stripped, "__COMMENT_PLACEHOLDER_0__\n{\"a\": 1}");
/// assert_eq!(store.get(0), Some("/* header */"));
/// ```
pub fn extract_comments(text: &str) -> (String, CommentStore) {
    let mut store = CommentStore::new();
    let stripped = COMMENT_PATTERN.replace_all(text, |caps: &Captures| store.intern(&caps[0]));
    (stripped.into_owned(), store)
}

/// Replaces every placeholder in `text` with its stored comment.
///
/// With `options.highlight_continuations` set, a comment whose entire content
/// is `...` has the dots wrapped in a [`classes::MORE_COMMENT`] span, the
/// `//` and surrounding whitespace left bare; every other comment is
/// substituted verbatim. With it unset, all comments are substituted
/// verbatim, which makes extract-then-restore an exact round trip.
///
/// # Errors
///
/// Returns [`Error::Restoration`] if a placeholder's index has no store
/// entry. This happens when the input document itself contained
/// placeholder-shaped text that extraction never produced.
pub fn restore_comments(
    text: &str,
    store: &CommentStore,
    options: &HighlightOptions,
) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in PLACEHOLDER_PATTERN.captures_iter(text) {
        let matched = caps
            .get(0)
            .ok_or_else(|| Error::custom("placeholder capture without a whole match"))?;
        // A digit run too long for usize cannot index any store.
        let index: usize = caps["index"].parse().unwrap_or(usize::MAX);
        let comment = store
            .get(index)
            .ok_or_else(|| Error::restoration(index, store.len()))?;
        out.push_str(&text[last..matched.start()]);
        if options.highlight_continuations {
            out.push_str(&render_comment(comment, options));
        } else if options.escape_html {
            out.push_str(&escape_text(comment));
        } else {
            out.push_str(comment);
        }
        last = matched.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Renders one restored comment, marking a continuation comment's `...`.
fn render_comment(comment: &str, options: &HighlightOptions) -> String {
    if let Some(caps) = CONTINUATION_PATTERN.captures(comment) {
        return format!(
            "{}//{}{}{}",
            &caps["lead"],
            &caps["mid"],
            wrap_span("...", classes::MORE_COMMENT),
            &caps["trail"],
        );
    }
    if options.escape_html {
        escape_text(comment)
    } else {
        comment.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> HighlightOptions {
        HighlightOptions::new().with_highlight_continuations(false)
    }

    #[test]
    fn test_extract_line_comment_includes_newline() {
        let (stripped, store) = extract_comments("1 // one\n2");
        assert_eq!(stripped, "1 __COMMENT_PLACEHOLDER_0__2");
        assert_eq!(store.get(0), Some("// one\n"));
    }

    #[test]
    fn test_extract_line_comment_at_end_of_text() {
        let (stripped, store) = extract_comments("1 // one");
        assert_eq!(stripped, "1 __COMMENT_PLACEHOLDER_0__");
        assert_eq!(store.get(0), Some("// one"));
    }

    #[test]
    fn test_extract_block_comment_spanning_lines() {
        let (stripped, store) = extract_comments("/* a\nb */ 1");
        assert_eq!(stripped, "__COMMENT_PLACEHOLDER_0__ 1");
        assert_eq!(store.get(0), Some("/* a\nb */"));
    }

    #[test]
    fn test_block_comments_are_non_greedy() {
        let (stripped, store) = extract_comments("/* a */ 1 /* b */");
        assert_eq!(
            stripped,
            "__COMMENT_PLACEHOLDER_0__ 1 __COMMENT_PLACEHOLDER_1__"
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), Some("/* a */"));
        assert_eq!(store.get(1), Some("/* b */"));
    }

    #[test]
    fn test_unterminated_block_comment_is_not_extracted() {
        let (stripped, store) = extract_comments("/* open");
        assert_eq!(stripped, "/* open");
        assert!(store.is_empty());
    }

    #[test]
    fn test_slashes_inside_strings_still_open_comments() {
        // Known limitation: extraction has no notion of string boundaries.
        let (stripped, store) = extract_comments("\"http://x\"");
        assert_eq!(stripped, "\"http:__COMMENT_PLACEHOLDER_0__");
        assert_eq!(store.get(0), Some("//x\""));
    }

    #[test]
    fn test_empty_input() {
        let (stripped, store) = extract_comments("");
        assert_eq!(stripped, "");
        assert!(store.is_empty());
    }

    #[test]
    fn test_plain_restore_round_trips() {
        let source = "// a\n{\"k\": 1} /* b */ // c";
        let (stripped, store) = extract_comments(source);
        let restored = restore_comments(&stripped, &store, &plain()).unwrap();
        assert_eq!(restored, source);
    }

    #[test]
    fn test_restore_does_not_confuse_adjacent_indices() {
        // Placeholder 1 must not match inside placeholder 12.
        let mut store = CommentStore::new();
        for i in 0..13 {
            store.intern(&format!("/*{i}*/"));
        }
        let text = format!(
            "{} {}",
            CommentStore::placeholder(1),
            CommentStore::placeholder(12)
        );
        let restored = restore_comments(&text, &store, &plain()).unwrap();
        assert_eq!(restored, "/*1*/ /*12*/");
    }

    #[test]
    fn test_continuation_comment_gets_marker_span() {
        let options = HighlightOptions::new();
        let (stripped, store) = extract_comments("// ...");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(restored, "// <span class=\"json-more-comment\">...</span>");
    }

    #[test]
    fn test_continuation_comment_keeps_trailing_newline() {
        let options = HighlightOptions::new();
        let (stripped, store) = extract_comments("//...\n1");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(
            restored,
            "//<span class=\"json-more-comment\">...</span>\n1"
        );
    }

    #[test]
    fn test_ordinary_comment_restored_verbatim() {
        let options = HighlightOptions::new();
        let (stripped, store) = extract_comments("// foo");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(restored, "// foo");
    }

    #[test]
    fn test_four_dots_is_not_a_continuation() {
        let options = HighlightOptions::new();
        let (stripped, store) = extract_comments("// ....");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(restored, "// ....");
    }

    #[test]
    fn test_block_comment_is_never_a_continuation() {
        let options = HighlightOptions::new();
        let (stripped, store) = extract_comments("/* ... */");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(restored, "/* ... */");
    }

    #[test]
    fn test_out_of_range_placeholder_is_a_restoration_error() {
        let store = CommentStore::new();
        let err = restore_comments("__COMMENT_PLACEHOLDER_3__", &store, &plain()).unwrap_err();
        assert_eq!(
            err,
            Error::Restoration {
                index: 3,
                available: 0
            }
        );
    }

    #[test]
    fn test_escape_html_applies_to_comment_text() {
        let options = plain().with_escape_html(true);
        let (stripped, store) = extract_comments("// <b> & \"q\"");
        let restored = restore_comments(&stripped, &store, &options).unwrap();
        assert_eq!(restored, "// &lt;b&gt; &amp; &quot;q&quot;");
    }
}
