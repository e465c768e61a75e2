//! Ready-made token parsers over ASCII character classes
//!
//! None of these can match the empty string, so each one fails on exhausted
//! input.

pub mod number;
pub mod word;

pub use number::{integer, natnum};
pub use word::{handle, identifier, word};
