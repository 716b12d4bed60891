/// Code fence rule.
///
/// Fences never span lines: an opening fence, its body lines, and the
/// closing fence each parse on their own, so a fence line always yields a
/// single code-block element carrying whatever followed the marker (the
/// info string on an opening fence, nothing on a bare one).
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Returns the text after the fence marker.
    pub fn parse(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}
