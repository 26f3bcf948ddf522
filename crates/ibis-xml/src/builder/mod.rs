//! Tree construction from tokenizer events.

/// Tree builder implementation.
pub mod core;

pub use self::core::{TreeBuilder, VOID_ELEMENTS, parse_document};
