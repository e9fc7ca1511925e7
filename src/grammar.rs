//! Token Grammar Reference
//!
//! This module documents the lexical grammar the highlighter applies and the
//! ordering rules that make it deterministic. It contains no code.
//!
//! # Pipeline
//!
//! Highlighting is three passes over the whole document, in strict order:
//!
//! 1. **Extract** — every comment is replaced by a placeholder token and its
//!    text recorded in a [`CommentStore`](crate::CommentStore).
//! 2. **Classify** — the combined token pattern wraps each recognized token
//!    in a span; placeholders pass through verbatim.
//! 3. **Restore** — each placeholder is replaced by its original comment,
//!    with continuation comments getting their marker span.
//!
//! No pass is incremental; each consumes the full output of the previous one.
//!
//! # Comment grammar
//!
//! | Form | Pattern | Notes |
//! |------|---------|-------|
//! | Block | `/* … */` | Non-greedy, may span newlines |
//! | Line | `// …` | Up to and including the next newline, or end of text |
//!
//! Matches are found left to right, non-overlapping, in one pass. Extraction
//! runs before any token structure exists, so a `//` inside a string literal
//! still opens a comment. An unterminated `/*` is not a comment; its two
//! characters fall through to the classifier unmatched.
//!
//! # Placeholder protocol
//!
//! An extracted comment at store position `i` is replaced by the text
//! `__COMMENT_PLACEHOLDER_i__`. The trailing `__` terminates every
//! placeholder, so no placeholder is a prefix of another and restoration
//! cannot confuse index `1` with index `12`. The marker is JSON-incompatible
//! by construction rather than by proof: a document that happens to contain
//! placeholder-shaped text will either share a real comment's replacement
//! (index in range) or trip the restoration error and the fallback ladder
//! (index out of range).
//!
//! # Token alternatives, in priority order
//!
//! The classifier's combined pattern tries these alternatives at each scan
//! position; the leftmost match wins, and at equal positions the earlier
//! alternative wins. **Reordering them changes the language**: `key` must
//! precede `string` or no key would ever be recognized, and both must
//! precede `colon`/`comma` or key-consumed separators would double-match.
//!
//! | # | Category | Pattern | Emitted as |
//! |---|----------|---------|------------|
//! | 1 | key | `"[^"]*"` then `\s*:\s*` | key span + synthesized `": "` colon span |
//! | 2 | string | `"` with `\x` escapes `"` | string span |
//! | 3 | number | `-?\d+(\.\d+)?` | number span (no exponent form) |
//! | 4 | bool | `\btrue\b` or `\bfalse\b` | bool span |
//! | 5 | null | `\bnull\b` | null span |
//! | 6 | brackets | one of `{ } [ ]` | brackets span |
//! | 7 | colon | `:` | colon span |
//! | 8 | comma | `,` | comma span |
//! | 9 | placeholder | `__COMMENT_PLACEHOLDER_\d+__` | verbatim, no span |
//!
//! Anything no alternative matches — whitespace, stray punctuation, the
//! dangling quote of an unterminated string — passes through unchanged.
//!
//! Note that the key alternative's quoted-string form is simpler than the
//! string alternative's: it does not honor escapes. A key containing an
//! escaped quote before its colon fails the key form and is classified as a
//! bare string instead, with the colon emitted separately. Malformed input
//! degrades; it never errors.
//!
//! # Continuation comments
//!
//! A restored comment matching `^\s*//\s*\.\.\.\s*$` — a line comment whose
//! entire content is the three-character ellipsis — has exactly the `...`
//! wrapped in a [`classes::MORE_COMMENT`](crate::classes::MORE_COMMENT)
//! span. The `//` and all whitespace stay bare. Every other comment is
//! restored verbatim and unwrapped.
//!
//! # Fallback ladder
//!
//! [`highlight`](crate::highlight) never fails. Its result is the first rung
//! of this ladder to succeed:
//!
//! 1. extract → classify → restore with continuation highlighting;
//! 2. restore the extracted text with comments verbatim;
//! 3. the extracted text as-is — which may still contain placeholder
//!    tokens, a deliberate compatibility quirk of the double-failure path.
