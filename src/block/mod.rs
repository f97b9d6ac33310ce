//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (levels 1-6)
//! - Unordered and ordered lists (one level, no nesting)
//! - Paragraphs

mod classify;
mod event;
mod parser;

pub use classify::{MAX_HEADING_LEVEL, classify_line};
pub use event::{BlockEvent, LineKind, ListKind};
pub use parser::{BlockParser, OpenBlock};
