use std::sync::OnceLock;

use regex::Regex;

/// Bullet list rule: a two-byte marker prefix, remainder kept verbatim.
pub struct BulletItem;

impl BulletItem {
    pub const MARKERS: [&'static str; 3] = ["- ", "* ", "+ "];
    /// Byte length of every bullet marker.
    pub const PREFIX_LEN: usize = 2;

    /// Returns the item content after the marker, exactly as written. Extra
    /// spaces after the marker belong to the content.
    pub fn parse(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// Numbered list rule: digits, a dot, whitespace, content.
pub struct NumberedItem;

impl NumberedItem {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN
            .get_or_init(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("Invalid numbered item regex"))
    }

    /// Parses `N. content`, returning the literal number, the content, and
    /// the content's byte offset within the line. A digit run that overflows
    /// `u64` fails the rule, so the line falls through to paragraph handling.
    pub fn parse(line: &str) -> Option<(u64, &str, usize)> {
        let caps = Self::pattern().captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        let content = caps.get(2)?;
        Some((number, content.as_str(), content.start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_bullet_marker() {
        assert_eq!(BulletItem::parse("- one"), Some("one"));
        assert_eq!(BulletItem::parse("* two"), Some("two"));
        assert_eq!(BulletItem::parse("+ three"), Some("three"));
    }

    #[test]
    fn marker_without_space_is_not_a_bullet() {
        assert_eq!(BulletItem::parse("-one"), None);
        assert_eq!(BulletItem::parse("*bold*"), None);
    }

    #[test]
    fn extra_spaces_stay_in_the_content() {
        assert_eq!(BulletItem::parse("-  indented"), Some(" indented"));
    }

    #[test]
    fn parses_number_content_and_offset() {
        assert_eq!(NumberedItem::parse("1. one"), Some((1, "one", 3)));
        assert_eq!(NumberedItem::parse("42. answer"), Some((42, "answer", 4)));
    }

    #[test]
    fn keeps_the_literal_number() {
        assert_eq!(NumberedItem::parse("7. seventh"), Some((7, "seventh", 3)));
        assert_eq!(NumberedItem::parse("007. agent"), Some((7, "agent", 5)));
    }

    #[test]
    fn whitespace_run_after_the_dot_is_consumed() {
        assert_eq!(NumberedItem::parse("2.   wide"), Some((2, "wide", 5)));
    }

    #[test]
    fn missing_space_or_content_fails() {
        assert_eq!(NumberedItem::parse("1.one"), None);
        assert_eq!(NumberedItem::parse("1. "), None);
        assert_eq!(NumberedItem::parse("1"), None);
    }

    #[test]
    fn overflowing_number_fails() {
        assert_eq!(NumberedItem::parse("184467440737095516160. big"), None);
    }
}
