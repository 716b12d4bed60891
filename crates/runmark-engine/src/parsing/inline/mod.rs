//! # Inline Tokenizing
//!
//! Second parsing stage: a single left-to-right pass over one line's bytes.
//!
//! ## Approach
//!
//! Plain bytes accumulate into a pending text region. At each marker byte
//! the matching `try_*` parser runs against a saved cursor: it either yields
//! an element (pending text is flushed first) or restores the cursor, in
//! which case exactly one marker byte joins the pending text and scanning
//! resumes. Closing-delimiter searches are bounded by the end of the line,
//! so the pass is total and never errors.
//!
//! ## Precedence
//!
//! Backtick spans are raw: `` `**x**` `` is a code span, never bold. Links
//! and images need their full `[title](url)` / `![title](url)` shape or
//! every byte of them is literal. A doubled `*`/`_` run is bold, a single
//! one italic, and emphasis interiors are never tokenized again.
//!
//! ## Modules
//!
//! - **`cursor`**: byte [`Cursor`](cursor::Cursor) with absolute position
//!   tracking
//! - **`kinds`**: construct types that own their delimiters
//! - **`parser`**: [`parse_inline()`] and the `try_*` construct parsers

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
