//! The fixed CSS class names emitted by the highlighter.
//!
//! Every span in the output carries exactly one of these labels. They are
//! deliberately stable strings so stylesheets written against one release
//! keep working with the next.
//!
//! ## Examples
//!
//! ```rust
//! use json_highlight::classes;
//!
//! assert_eq!(classes::KEY, "json-key");
//! assert_eq!(classes::MORE_COMMENT, "json-more-comment");
//! ```
//!
//! A minimal stylesheet:
//!
//! ```css
//! .json-key      { color: #9cdcfe; }
//! .json-string   { color: #ce9178; }
//! .json-number   { color: #b5cea8; }
//! .json-bool     { color: #569cd6; }
//! .json-null     { color: #569cd6; }
//! .json-brackets { color: #d4d4d4; }
//! .json-colon    { color: #d4d4d4; }
//! .json-comma    { color: #d4d4d4; }
//! .json-more-comment { color: #6a9955; font-style: italic; }
//! ```

/// Class for object keys.
pub const KEY: &str = "json-key";
/// Class for string values.
pub const STRING: &str = "json-string";
/// Class for numbers.
pub const NUMBER: &str = "json-number";
/// Class for the boolean literals `true` and `false`.
pub const BOOL: &str = "json-bool";
/// Class for the `null` literal.
pub const NULL: &str = "json-null";
/// Class for braces and brackets (`{`, `}`, `[`, `]`).
pub const BRACKETS: &str = "json-brackets";
/// Class for colons, including the normalized separator after a key.
pub const COLON: &str = "json-colon";
/// Class for commas.
pub const COMMA: &str = "json-comma";
/// Class for comments.
///
/// Ordinary comment text is emitted unwrapped, so the highlighter itself
/// never produces a span with this label. It is published for stylesheet
/// authors who wrap comments on their side of the fence.
pub const COMMENT: &str = "json-comment";
/// Class for the `...` of a continuation comment (`// ...`).
pub const MORE_COMMENT: &str = "json-more-comment";
