pub mod element;
pub mod span;

pub use element::{ElementKind, MarkdownElement};
pub use span::SourceSpan;
