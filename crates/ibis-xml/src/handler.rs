//! The event contract between the tokenizer and its consumers.

use ibis_dom::Attributes;

use crate::error::ParseError;

/// Receiver for tokenizer events.
///
/// Every method has a no-op default, so a consumer implements only the
/// events it cares about. Methods return a `Result` so a consumer can abort
/// the parse; returning an error stops tokenization immediately.
///
/// Attribute maps are borrowed for the duration of the callback and reused
/// by the tokenizer afterwards; clone what you need to keep.
pub trait Handler {
    /// A processing instruction, e.g. `<?xml version="1.0"?>`.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn processing_instruction(
        &mut self,
        _name: &str,
        _attrs: &Attributes,
    ) -> Result<(), ParseError> {
        Ok(())
    }

    /// An opening tag, e.g. `<a href="...">`.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn open(&mut self, _tag: &str, _attrs: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    /// A self-closing tag, e.g. `<br/>`.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn empty(&mut self, _tag: &str, _attrs: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    /// A closing tag, e.g. `</a>`.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn close(&mut self, _tag: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// A run of character data between tags. Zero-length runs are never
    /// reported.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn text(&mut self, _content: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// A CDATA section's interior, delimiters stripped. The interior is
    /// never tokenized as markup.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn cdata(&mut self, _content: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// A doctype declaration's raw interior (everything between `<!DOCTYPE`
    /// and `>`, whitespace included).
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn doctype(&mut self, _content: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// A comment's interior, delimiters stripped.
    ///
    /// # Errors
    ///
    /// Implementations may return any [`ParseError`] to abort the parse.
    fn comment(&mut self, _content: &str) -> Result<(), ParseError> {
        Ok(())
    }
}
