//! Error types for the parser.
//!
//! Almost nothing here is an error: malformed tags, unbalanced closes inside
//! the tree, and truncated trailing constructs are all recovered silently.
//! The only fatal condition is a closing tag with no open element left to
//! close, which signals a structurally invalid document.

use thiserror::Error;

/// A fatal parse failure.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A closing tag arrived with no open element on the stack (either
    /// directly, or after cascade-closing exhausted the stack without
    /// finding a match).
    #[error("closing tag </{tag}> with no matching open element")]
    UnmatchedClose {
        /// The (lower-cased) tag name of the offending close.
        tag: String,
    },

    /// A handler failed to write its output (echoing to a sink).
    #[error("write error while emitting markup")]
    Io(#[from] std::io::Error),
}
