pub mod models;
pub mod parsing;
pub mod styling;

// Re-export key types for easier usage
pub use models::{ElementKind, MarkdownElement, SourceSpan};
pub use parsing::parse;
pub use styling::{FontWeight, StyleSheet, StyledRun, TextStyle, convert, to_runs};
