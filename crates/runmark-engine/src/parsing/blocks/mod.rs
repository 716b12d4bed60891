//! # Block Scanning
//!
//! First parsing stage: the input is split into lines and every line is
//! classified on its own. There is no cross-line state, so a fence or list
//! line never changes how its neighbors parse.
//!
//! ## Classification Order
//!
//! First match wins: heading, then bullet item, then numbered item, then
//! code fence, then paragraph content. Blank lines become line-break
//! elements. A line matching no block rule is inline-tokenized and emitted
//! behind a paragraph marker.
//!
//! ## Modules
//!
//! - **`kinds`**: block rule types that own their delimiters
//!   ([`Heading`](kinds::Heading), [`BulletItem`](kinds::BulletItem),
//!   [`NumberedItem`](kinds::NumberedItem), [`CodeFence`](kinds::CodeFence))
//! - **`scanner`**: [`BlockScanner`] line-at-a-time classification state

pub mod kinds;
pub mod scanner;

pub use scanner::BlockScanner;
