use crate::models::SourceSpan;

/// A single line of the parse input with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef<'a> {
    /// The line text, terminator excluded.
    pub text: &'a str,
    /// Byte span of the text in the input, terminator excluded.
    pub span: SourceSpan,
}

/// Returns an iterator over lines, honoring `\n`, `\r\n`, and lone `\r`.
///
/// Every terminator ends a line, and the tail after the last terminator is a
/// line too: input ending in a newline yields a final empty line, and empty
/// input yields exactly one empty line. The block scanner relies on this to
/// turn trailing blank lines into line-break elements.
pub fn split_lines(input: &str) -> Lines<'_> {
    Lines {
        input,
        offset: 0,
        done: false,
    }
}

#[derive(Debug)]
pub struct Lines<'a> {
    input: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineRef<'a>;

    fn next(&mut self) -> Option<LineRef<'a>> {
        if self.done {
            return None;
        }
        let start = self.offset;
        let rest = &self.input[start..];
        match rest.find(['\n', '\r']) {
            Some(at) => {
                let terminator = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                self.offset = start + at + terminator;
                Some(LineRef {
                    text: &rest[..at],
                    span: SourceSpan {
                        start,
                        end: start + at,
                    },
                })
            }
            None => {
                self.done = true;
                Some(LineRef {
                    text: rest,
                    span: SourceSpan {
                        start,
                        end: self.input.len(),
                    },
                })
            }
        }
    }
}
