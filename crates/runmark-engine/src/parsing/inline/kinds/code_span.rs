/// Backtick code spans. The interior is raw text: nothing inside a span is
/// tokenized further.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
