//! # Styling
//!
//! Final stage: a pure mapping from the element sequence to ordered styled
//! runs. Nothing here touches fonts or a renderer; a [`TextStyle`] only
//! names size, weight, and slant, and the host turns runs into whatever
//! rich-text representation it draws.

pub mod convert;
pub mod runs;
pub mod style;

pub use convert::{convert, to_runs};
pub use runs::StyledRun;
pub use style::{FontWeight, StyleSheet, TextStyle};
