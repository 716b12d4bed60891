use crate::models::{ElementKind, MarkdownElement};
use crate::parsing::parse;

use super::runs::StyledRun;
use super::style::StyleSheet;

/// Prefix rendered before every unordered list item.
const BULLET_PREFIX: &str = "\u{2022} ";
/// Glyph standing in for image data, which is never fetched.
const IMAGE_MARKER: char = '\u{1f5bc}';

/// Parses `markdown` and maps the result straight to styled runs.
pub fn convert(markdown: &str, sheet: &StyleSheet) -> Vec<StyledRun> {
    to_runs(&parse(markdown), sheet)
}

/// Maps an element sequence to styled runs, preserving element order.
///
/// The mapping is pure: the same elements and sheet always yield the same
/// runs.
pub fn to_runs(elements: &[MarkdownElement], sheet: &StyleSheet) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    append_all(&mut runs, elements, sheet);
    runs
}

fn append_all(runs: &mut Vec<StyledRun>, elements: &[MarkdownElement], sheet: &StyleSheet) {
    for (i, element) in elements.iter().enumerate() {
        append_element(runs, element, elements.get(i + 1), sheet);
    }
}

fn append_element(
    runs: &mut Vec<StyledRun>,
    element: &MarkdownElement,
    next: Option<&MarkdownElement>,
    sheet: &StyleSheet,
) {
    match &element.kind {
        ElementKind::Text => runs.push(StyledRun::new(&element.content, sheet.text)),
        ElementKind::Header { level } => {
            runs.push(StyledRun::new(&element.content, sheet.heading(*level)));
            runs.push(StyledRun::newline(sheet.text));
        }
        ElementKind::Bold => runs.push(StyledRun::new(&element.content, sheet.bold)),
        ElementKind::Italic => runs.push(StyledRun::new(&element.content, sheet.italic)),
        ElementKind::Code => runs.push(StyledRun::new(&element.content, sheet.code)),
        ElementKind::CodeBlock => runs.push(StyledRun::new(&element.content, sheet.code_block)),
        ElementKind::Link { title, .. } => {
            runs.push(StyledRun::underlined(title, sheet.link));
        }
        ElementKind::Image { title, .. } => {
            runs.push(StyledRun::new(
                format!("{IMAGE_MARKER} {title}"),
                sheet.text,
            ));
        }
        ElementKind::UnorderedListItem { children } => {
            runs.push(StyledRun::new(BULLET_PREFIX, sheet.list_prefix));
            append_all(runs, children, sheet);
            runs.push(StyledRun::newline(sheet.text));
        }
        ElementKind::OrderedListItem { number, children } => {
            runs.push(StyledRun::new(format!("{number}. "), sheet.list_prefix));
            append_all(runs, children, sheet);
            runs.push(StyledRun::newline(sheet.text));
        }
        ElementKind::LineBreak => runs.push(StyledRun::newline(sheet.text)),
        ElementKind::Paragraph => {
            // The marker renders nothing itself. It separates adjacent
            // blocks only where the following element opens a block of its
            // own; headers and list items already emit a trailing newline,
            // so inline runs never get doubled separators.
            if next.is_some_and(starts_block) {
                runs.push(StyledRun::newline(sheet.text));
            }
        }
        ElementKind::Table { headers, rows } => {
            // No table layout here: cell text is flattened into one plain
            // run in reading order.
            let mut text = String::new();
            for cell in headers {
                text.push_str(cell);
            }
            for row in rows {
                for cell in row {
                    text.push_str(cell);
                }
            }
            runs.push(StyledRun::new(text, sheet.text));
        }
    }
}

/// Whether an element opens a new block in the run stream.
fn starts_block(element: &MarkdownElement) -> bool {
    matches!(
        element.kind,
        ElementKind::Header { .. }
            | ElementKind::Paragraph
            | ElementKind::UnorderedListItem { .. }
            | ElementKind::OrderedListItem { .. }
    )
}
