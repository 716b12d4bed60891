//! # Inline Kinds
//!
//! Inline construct types that own their delimiters. The tokenizer reads
//! these constants; it never hardcodes a backtick or a bracket itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
