//! # json_highlight
//!
//! An HTML syntax highlighter for JSON documents extended with `//` and
//! `/* */` comments.
//!
//! ## What it does
//!
//! [`highlight`] turns a JSON-like text into an HTML fragment in which every
//! lexical category — keys, strings, numbers, booleans, `null`, brackets,
//! colons, commas — is wrapped in a `<span>` carrying a fixed CSS class, so
//! snippets can be styled in documentation and UIs. Comments survive the
//! pass untouched, except that a "continuation" comment (`// ...`) gets its
//! ellipsis wrapped in a dedicated span.
//!
//! ## Key Properties
//!
//! - **Best-effort**: input need not be valid JSON; malformed text is
//!   highlighted as far as it classifies and passed through where it doesn't
//! - **Total**: [`highlight`] never returns an error; internal failures
//!   degrade to less-highlighted output
//! - **Pure**: no global state, safe to call from concurrent threads
//! - **No parse tree**: a single classification pass, not a JSON parser
//!
//! ## Quick Start
//!
//! ```rust
//! use json_highlight::highlight;
//!
//! let html = highlight("{\"a\": 1}");
//! assert_eq!(
//!     html,
//!     "<span class=\"json-brackets\">{</span>\
//!      <span class=\"json-key\">\"a\"</span>\
//!      <span class=\"json-colon\">: </span>\
//!      <span class=\"json-number\">1</span>\
//!      <span class=\"json-brackets\">}</span>"
//! );
//! ```
//!
//! Comments are preserved inline:
//!
//! ```rust
//! use json_highlight::highlight;
//!
//! let html = highlight("// header\n[]");
//! assert!(html.starts_with("// header\n"));
//! ```
//!
//! ## Output and escaping
//!
//! The output is a bare fragment of `<span class="…">…</span>` wrappers with
//! no outer container, suitable for inlining into a `<pre>` block. By
//! default matched text is **not** HTML-escaped; callers embedding untrusted
//! input should enable [`HighlightOptions::with_escape_html`] or escape
//! upstream. The emitted class names are published in [`classes`].
//!
//! ## Grammar
//!
//! The token grammar, the priority order of its alternatives, and the
//! comment-placeholder protocol are documented in [`grammar`].

pub mod classes;
pub mod classify;
pub mod comments;
pub mod error;
pub mod grammar;
pub mod options;

pub use classify::classify_tokens;
pub use comments::{extract_comments, restore_comments, CommentStore};
pub use error::{Error, Result};
pub use options::HighlightOptions;

/// Highlights a JSON-like document into an HTML fragment, with defaults.
///
/// Equivalent to [`highlight_with_options`] with [`HighlightOptions::new`].
/// This function never fails: on an internal processing failure it returns
/// progressively less-highlighted text rather than an error (see
/// [`grammar`] for the exact fallback ladder).
///
/// # Examples
///
/// ```rust
/// use json_highlight::highlight;
///
/// let html = highlight("[true, null]");
/// assert!(html.contains("<span class=\"json-bool\">true</span>"));
/// assert!(html.contains("<span class=\"json-null\">null</span>"));
///
/// assert_eq!(highlight(""), "");
/// ```
pub fn highlight(text: &str) -> String {
    highlight_with_options(text, &HighlightOptions::new())
}

/// Highlights a JSON-like document into an HTML fragment.
///
/// Runs the three-stage pipeline: comment extraction, token classification,
/// comment restoration. Never fails; the fallback chain is, in order:
///
/// 1. the fully highlighted document;
/// 2. the classified-or-extracted text with comments restored verbatim;
/// 3. the extracted text as-is, which may still contain placeholder tokens.
///
/// # Examples
///
/// ```rust
/// use json_highlight::{highlight_with_options, HighlightOptions};
///
/// let options = HighlightOptions::new().with_escape_html(true);
/// let html = highlight_with_options("{\"tag\": \"<br>\"}", &options);
/// assert!(html.contains("&lt;br&gt;"));
/// ```
pub fn highlight_with_options(text: &str, options: &HighlightOptions) -> String {
    let (stripped, store) = extract_comments(text);
    let primary = classify_tokens(&stripped, options)
        .and_then(|classified| restore_comments(&classified, &store, options));
    match primary {
        Ok(html) => html,
        Err(_) => {
            let verbatim = options.clone().with_highlight_continuations(false);
            restore_comments(&stripped, &store, &verbatim).unwrap_or(stripped)
        }
    }
}
