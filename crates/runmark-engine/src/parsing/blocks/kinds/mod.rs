//! # Block Kinds
//!
//! Block rule types that own their delimiters. The scanner asks each rule in
//! turn; it never hardcodes a hash or a fence marker itself.

pub mod code_fence;
pub mod heading;
pub mod list;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{BulletItem, NumberedItem};
