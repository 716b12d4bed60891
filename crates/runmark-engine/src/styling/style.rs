use serde::{Deserialize, Serialize};

/// Font weight, resolved to a concrete font by the host renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
    Semibold,
    Light,
}

/// Renderer-neutral size, weight, and slant for one content category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            weight: FontWeight::Regular,
            italic: false,
        }
    }
}

impl TextStyle {
    /// A regular upright style at the given size.
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn italicized(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One style slot per element category.
///
/// Build one with [`Default`] and override slots with struct update syntax,
/// or deserialize a partial sheet; missing slots keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub text: TextStyle,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub bold: TextStyle,
    pub italic: TextStyle,
    pub code: TextStyle,
    pub code_block: TextStyle,
    pub link: TextStyle,
    pub list_prefix: TextStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            h1: TextStyle::sized(24.0).weight(FontWeight::Bold),
            h2: TextStyle::sized(18.0).weight(FontWeight::Bold),
            h3: TextStyle::sized(15.0).weight(FontWeight::Bold),
            h4: TextStyle::sized(13.0).weight(FontWeight::Bold),
            h5: TextStyle::sized(11.0).weight(FontWeight::Bold),
            h6: TextStyle::sized(10.0).weight(FontWeight::Bold),
            bold: TextStyle::default().weight(FontWeight::Bold),
            italic: TextStyle::default().italicized(),
            code: TextStyle::default(),
            code_block: TextStyle::default(),
            link: TextStyle::default(),
            list_prefix: TextStyle::default().weight(FontWeight::Semibold),
        }
    }
}

impl StyleSheet {
    /// Style slot for a heading level. Parsed headings are always 1 through
    /// 6; out-of-range levels from hand-built trees fall back to `h1`.
    pub fn heading(&self, level: u8) -> TextStyle {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => self.h1,
        }
    }
}
