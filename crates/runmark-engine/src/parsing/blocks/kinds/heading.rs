/// ATX heading rule: the marker run length is the level.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a trimmed line as a heading, returning the level and the
    /// trimmed text after the marker run. More than [`Self::MAX_LEVEL`]
    /// hashes, or nothing left after them, is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = line[level..].trim();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }
}
