//! Streaming markup tokenizer.
//!
//! A single-pass, character-at-a-time state machine that drives a
//! [`Handler`](crate::handler::Handler) with structural events. Permissive
//! by design: malformed input is recovered from, never rejected.

/// Tokenizer state machine implementation.
pub mod core;

pub use self::core::{EmitFn, Mode, TagKind, Tokenizer};
