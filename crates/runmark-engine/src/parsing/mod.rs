//! # Parsing
//!
//! Two-stage parse. Input is split into lines and each line is
//! block-classified on its own ([`blocks`]); content eligible for inline
//! markup is then tokenized byte by byte ([`inline`]). Both stages are
//! total: malformed markup degrades to literal text rather than erroring.

pub mod blocks;
pub mod inline;
pub mod lines;

use crate::models::MarkdownElement;
use blocks::BlockScanner;
use lines::split_lines;

/// Parses markdown text into an ordered element sequence.
///
/// Lines are classified independently, so a construct never changes meaning
/// because of what surrounds it. Arbitrary input is accepted; anything
/// unrecognized comes back as literal text elements.
pub fn parse(markdown: &str) -> Vec<MarkdownElement> {
    let mut scanner = BlockScanner::new();
    for line in split_lines(markdown) {
        scanner.push(&line);
    }
    scanner.finish()
}
