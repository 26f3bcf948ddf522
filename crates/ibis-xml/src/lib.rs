//! Permissive streaming markup parser for the ibis toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Streaming Tokenizer** - a single-pass, character-at-a-time state
//!   machine converting raw markup into structural events (open/close/empty
//!   tags, attributes, text, comments, CDATA, doctype, processing
//!   instructions), delivered through the [`Handler`] trait
//! - **Tree Builder** - a [`Handler`] assembling events into an
//!   `ibis_dom::DocumentTree`, with best-effort recovery from mismatched
//!   closing tags
//! - **Echo Handler** - a [`Handler`] re-serializing events back to markup
//!
//! # Deliberately Not Implemented
//!
//! This is not a validating parser. It does not resolve entities, handle
//! namespaces or encodings, or reject malformed input; bad markup is
//! recovered with silently-lossy heuristics, never reported as an error
//! (the single exception: a closing tag with nothing left to close).

/// Tree construction from tokenizer events.
pub mod builder;
/// Event-to-markup echo handler.
pub mod echo;
/// Error types for the parser.
pub mod error;
/// The tokenizer-to-consumer event contract.
pub mod handler;
/// Streaming markup tokenizer.
pub mod tokenizer;

pub use builder::{TreeBuilder, VOID_ELEMENTS, parse_document};
pub use echo::EchoHandler;
pub use error::ParseError;
pub use handler::Handler;
pub use tokenizer::Tokenizer;
