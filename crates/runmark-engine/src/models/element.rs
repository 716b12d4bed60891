use serde::{Deserialize, Serialize};

use super::span::SourceSpan;

/// The closed set of element kinds the parser can produce.
///
/// List items own their inline children as a nested element sequence, so the
/// tree is single-ownership all the way down (no cycles, no sharing).
/// `Table` is declared for hosts that build trees by hand; the parser never
/// emits one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Plain text that isn't part of any marker construct.
    Text,
    /// An ATX heading, level 1–6.
    Header { level: u8 },
    /// Double-marker emphasis (`**` or `__`). Content is the raw interior.
    Bold,
    /// Single-marker emphasis (`*` or `_`). Content is the raw interior.
    Italic,
    /// A backtick code span.
    Code,
    /// A single fence line; content is whatever followed the fence marker.
    CodeBlock,
    /// `[title](url)`. The element content mirrors the title.
    Link { title: String, url: String },
    /// `![title](url)`. The element content mirrors the title.
    Image { title: String, url: String },
    /// A `- `/`* `/`+ ` item owning its parsed inline children.
    UnorderedListItem { children: Vec<MarkdownElement> },
    /// A `N. ` item; `number` is the literal digits from the source line.
    OrderedListItem {
        number: u64,
        children: Vec<MarkdownElement>,
    },
    /// A blank source line.
    LineBreak,
    /// Boundary marker preceding a run of inline elements. Empty content.
    Paragraph,
    /// Declared for hand-built trees only; never parsed, never laid out.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// One parsed unit of markdown content.
///
/// `content` is the literal text with delimiters stripped. The span points
/// back at the source region the element came from (for inline elements that
/// region includes the delimiters) and is excluded from equality and
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownElement {
    pub kind: ElementKind,
    pub content: String,
    #[serde(skip)]
    pub span: Option<SourceSpan>,
}

impl PartialEq for MarkdownElement {
    fn eq(&self, other: &Self) -> bool {
        // Spans are diagnostic only; two elements parsed from different
        // places still compare equal when kind and content agree.
        self.kind == other.kind && self.content == other.content
    }
}

impl Eq for MarkdownElement {}

impl MarkdownElement {
    pub fn new(kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            span: None,
        }
    }

    /// Attaches a diagnostic source span.
    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, content)
    }

    pub fn header(level: u8, content: impl Into<String>) -> Self {
        Self::new(ElementKind::Header { level }, content)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Bold, content)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Italic, content)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Code, content)
    }

    pub fn code_block(content: impl Into<String>) -> Self {
        Self::new(ElementKind::CodeBlock, content)
    }

    /// Builds a link element; the element content mirrors the title.
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        Self::new(
            ElementKind::Link {
                title: title.clone(),
                url: url.into(),
            },
            title,
        )
    }

    /// Builds an image element; the element content mirrors the title.
    pub fn image(title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        Self::new(
            ElementKind::Image {
                title: title.clone(),
                url: url.into(),
            },
            title,
        )
    }

    pub fn bullet_item(children: Vec<MarkdownElement>) -> Self {
        Self::new(ElementKind::UnorderedListItem { children }, "")
    }

    pub fn numbered_item(number: u64, children: Vec<MarkdownElement>) -> Self {
        Self::new(ElementKind::OrderedListItem { number, children }, "")
    }

    pub fn line_break() -> Self {
        Self::new(ElementKind::LineBreak, "\n")
    }

    pub fn paragraph() -> Self {
        Self::new(ElementKind::Paragraph, "")
    }

    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::new(ElementKind::Table { headers, rows }, "")
    }
}
