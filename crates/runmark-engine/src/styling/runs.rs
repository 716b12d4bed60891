use serde::{Deserialize, Serialize};

use super::style::TextStyle;

/// One styled unit of output text.
///
/// Hosts consume runs in order and concatenate their text. `underline` is
/// the only decoration carried outside [`TextStyle`]; links set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub style: TextStyle,
    pub underline: bool,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            underline: false,
        }
    }

    pub fn underlined(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            underline: true,
            ..Self::new(text, style)
        }
    }

    /// A block separator: a lone newline in the given style.
    pub fn newline(style: TextStyle) -> Self {
        Self::new("\n", style)
    }
}
