//! Configuration options for highlighting.
//!
//! This module provides [`HighlightOptions`], the configuration struct passed
//! to [`highlight_with_options`](crate::highlight_with_options).
//!
//! ## Examples
//!
//! ```rust
//! use json_highlight::{highlight_with_options, HighlightOptions};
//!
//! // Restore comments verbatim, without the continuation-marker span
//! let options = HighlightOptions::new().with_highlight_continuations(false);
//! let html = highlight_with_options("{} // ...", &options);
//! assert!(!html.contains("json-more-comment"));
//!
//! // Escape HTML metacharacters inside matched text
//! let options = HighlightOptions::new().with_escape_html(true);
//! let html = highlight_with_options(r#"{"a": "<b>"}"#, &options);
//! assert!(html.contains("&lt;b&gt;"));
//! ```

use serde::{Deserialize, Serialize};

/// Configuration options for highlighting.
///
/// Controls comment treatment and output escaping. The default configuration
/// reproduces the classic behavior: continuation comments (`// ...`) get
/// their own span and no HTML escaping is applied.
///
/// # Examples
///
/// ```rust
/// use json_highlight::HighlightOptions;
///
/// // Default configuration
/// let options = HighlightOptions::new();
/// assert!(options.highlight_continuations);
/// assert!(!options.escape_html);
///
/// // Custom configuration
/// let options = HighlightOptions::new()
///     .with_highlight_continuations(false)
///     .with_escape_html(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightOptions {
    /// Wrap the `...` of a continuation comment in its own span.
    pub highlight_continuations: bool,
    /// Escape `&`, `<`, `>`, and `"` in emitted text.
    ///
    /// Off by default: the highlighter historically passes matched text
    /// through verbatim and leaves escaping to the caller. Enable this when
    /// the input is untrusted.
    pub escape_html: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            highlight_continuations: true,
            escape_html: false,
        }
    }
}

impl HighlightOptions {
    /// Creates the default options (continuation spans on, escaping off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether continuation comments (`// ...`) get a dedicated span.
    ///
    /// When disabled, every comment is restored verbatim.
    #[must_use]
    pub fn with_highlight_continuations(mut self, highlight: bool) -> Self {
        self.highlight_continuations = highlight;
        self
    }

    /// Sets whether HTML metacharacters in emitted text are escaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_highlight::HighlightOptions;
    ///
    /// let options = HighlightOptions::new().with_escape_html(true);
    /// assert!(options.escape_html);
    /// ```
    #[must_use]
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }
}
