use crate::models::{MarkdownElement, SourceSpan};
use crate::parsing::inline::parse_inline;
use crate::parsing::lines::LineRef;

use super::kinds::{BulletItem, CodeFence, Heading, NumberedItem};

/// Per-line block classifier.
///
/// Feed lines in order with [`push`](Self::push) and collect the element
/// sequence with [`finish`](Self::finish). Each line is classified on its
/// own and first match wins: heading, bullet item, numbered item, code
/// fence, then paragraph content. Blank lines become line breaks.
pub struct BlockScanner {
    elements: Vec<MarkdownElement>,
    /// Most recent numbered-item value. Updated on every match but never
    /// read back: item numbers always come from the source digits, so an
    /// earlier value cannot bleed into later lines.
    #[allow(dead_code)]
    last_number: u64,
}

impl BlockScanner {
    pub fn new() -> Self {
        Self {
            elements: vec![],
            last_number: 0,
        }
    }

    pub fn push(&mut self, line: &LineRef<'_>) {
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            self.elements
                .push(MarkdownElement::line_break().with_span(line.span));
            return;
        }

        // Absolute byte offset of the trimmed text within the input.
        let base = line.span.start + (line.text.len() - line.text.trim_start().len());
        let span = SourceSpan {
            start: base,
            end: base + trimmed.len(),
        };

        if let Some((level, text)) = Heading::parse(trimmed) {
            self.elements
                .push(MarkdownElement::header(level, text).with_span(span));
            return;
        }

        if let Some(content) = BulletItem::parse(trimmed) {
            let children = parse_inline(base + BulletItem::PREFIX_LEN, content);
            self.elements
                .push(MarkdownElement::bullet_item(children).with_span(span));
            return;
        }

        if let Some((number, content, at)) = NumberedItem::parse(trimmed) {
            self.last_number = number;
            let children = parse_inline(base + at, content);
            self.elements
                .push(MarkdownElement::numbered_item(number, children).with_span(span));
            return;
        }

        if let Some(rest) = CodeFence::parse(trimmed) {
            self.elements
                .push(MarkdownElement::code_block(rest).with_span(span));
            return;
        }

        let inline = parse_inline(base, trimmed);
        if !inline.is_empty() {
            self.elements
                .push(MarkdownElement::paragraph().with_span(span));
            self.elements.extend(inline);
        }
    }

    pub fn finish(self) -> Vec<MarkdownElement> {
        self.elements
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self::new()
    }
}
