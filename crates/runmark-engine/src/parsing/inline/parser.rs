use crate::models::{MarkdownElement, SourceSpan};

use super::cursor::Cursor;
use super::kinds::{CodeSpan, Emphasis, Image, Link};

/// Tokenizes one line of inline content into an element sequence.
///
/// `base` is the byte offset of `s` within the parse input, used to give
/// emitted elements absolute spans.
///
/// A marker that never closes degrades to plain text: the tokenizer keeps
/// exactly one literal byte and carries on, so every input tokenizes.
/// Emphasis interiors stay raw; markers nested inside `**…**` or `*…*` are
/// not tokenized again.
pub fn parse_inline(base: usize, s: &str) -> Vec<MarkdownElement> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let construct_start = cur.i;
        if let Some(element) = try_construct(&mut cur) {
            flush_text(&mut out, &cur, text_start, construct_start);
            out.push(element);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }
    flush_text(&mut out, &cur, text_start, cur.i);

    out
}

/// Emits pending plain text in `[start, end)` as a text element.
fn flush_text(out: &mut Vec<MarkdownElement>, cur: &Cursor<'_>, start: usize, end: usize) {
    if end > start {
        out.push(
            MarkdownElement::text(&cur.s[start..end]).with_span(SourceSpan {
                start: cur.base + start,
                end: cur.base + end,
            }),
        );
    }
}

/// Tries every construct whose marker begins at the current byte.
///
/// On success the cursor sits just past the construct. On failure it has not
/// moved, and the caller takes the marker byte as literal text.
fn try_construct(cur: &mut Cursor<'_>) -> Option<MarkdownElement> {
    match cur.peek()? {
        CodeSpan::TICK => try_code_span(cur),
        Link::OPEN => try_link(cur),
        Image::MARKER if cur.peek_at(1) == Some(Link::OPEN) => try_image(cur),
        b if Emphasis::is_marker(b) => try_emphasis(cur),
        _ => None,
    }
}

fn try_code_span(cur: &mut Cursor<'_>) -> Option<MarkdownElement> {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.i;

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    if cur.eof() {
        *cur = saved;
        return None;
    }
    let inner = &cur.s[inner_start..cur.i];
    let element = MarkdownElement::code(inner);
    cur.bump();

    Some(element.with_span(SourceSpan {
        start,
        end: cur.pos(),
    }))
}

/// Shared `[title](url)` body. On entry the cursor sits at `[`; on success
/// it sits past the closing `)`. The title runs to the first `]` and the
/// url to the first `)`, and either may be empty.
fn scan_link_body(cur: &mut Cursor<'_>) -> Option<(String, String)> {
    cur.bump();
    let title_start = cur.i;
    while !cur.eof() && cur.peek() != Some(Link::CLOSE) {
        cur.bump();
    }
    if cur.eof() {
        return None;
    }
    let title_end = cur.i;
    cur.bump();

    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump();
    let url_start = cur.i;
    while !cur.eof() && cur.peek() != Some(Link::URL_CLOSE) {
        cur.bump();
    }
    if cur.eof() {
        return None;
    }
    let url_end = cur.i;
    cur.bump();

    Some((
        cur.s[title_start..title_end].to_string(),
        cur.s[url_start..url_end].to_string(),
    ))
}

fn try_link(cur: &mut Cursor<'_>) -> Option<MarkdownElement> {
    let saved = cur.clone();
    let start = cur.pos();
    match scan_link_body(cur) {
        Some((title, url)) => Some(MarkdownElement::link(title, url).with_span(SourceSpan {
            start,
            end: cur.pos(),
        })),
        None => {
            *cur = saved;
            None
        }
    }
}

fn try_image(cur: &mut Cursor<'_>) -> Option<MarkdownElement> {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    match scan_link_body(cur) {
        Some((title, url)) => Some(MarkdownElement::image(title, url).with_span(SourceSpan {
            start,
            end: cur.pos(),
        })),
        None => {
            *cur = saved;
            None
        }
    }
}

fn try_emphasis(cur: &mut Cursor<'_>) -> Option<MarkdownElement> {
    let marker = cur.peek()?;
    let run = if cur.peek_at(1) == Some(marker) { 2 } else { 1 };

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(run);
    let inner_start = cur.i;

    let inner_end = loop {
        if cur.eof() {
            *cur = saved;
            return None;
        }
        if cur.peek() == Some(marker) && (run == 1 || cur.peek_at(1) == Some(marker)) {
            break cur.i;
        }
        cur.bump();
    };

    let inner = &cur.s[inner_start..inner_end];
    let element = if run == 2 {
        MarkdownElement::bold(inner)
    } else {
        MarkdownElement::italic(inner)
    };
    cur.bump_n(run);

    Some(element.with_span(SourceSpan {
        start,
        end: cur.pos(),
    }))
}
