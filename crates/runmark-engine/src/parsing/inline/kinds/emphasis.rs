/// Emphasis markers. A doubled marker opens a bold span, a single one an
/// italic span, and the close must repeat the same marker the same number of
/// times: `*` and `_` never close each other.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn is_marker(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}
