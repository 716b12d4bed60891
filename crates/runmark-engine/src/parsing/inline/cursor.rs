/// Byte cursor for the inline tokenizer.
///
/// Scans one line while tracking the line's absolute offset in the original
/// input, so emitted elements can carry spans. Movement is byte-wise; every
/// delimiter is ASCII and slices are only taken between delimiter positions,
/// so the cursor never splits a multi-byte character.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being tokenized.
    pub s: &'a str,
    /// Byte offset of the line within the parse input.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute position in the parse input.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Byte `n` positions past the current one.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances one byte, returning it.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
