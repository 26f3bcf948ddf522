//! Common utilities for the ibis parser.
//!
//! This crate provides shared infrastructure used by the parser components:
//! - **Warning System** - colored terminal output for recovery diagnostics

pub mod warning;
