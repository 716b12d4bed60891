/// `[title](url)` links.
///
/// Both halves use first-closing-delimiter searches, so a title can never
/// contain `]` and a url can never contain `)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Image marker: `!` immediately before a link-shaped construct.
pub struct Image;

impl Image {
    pub const MARKER: u8 = b'!';
}
