//! Block-level line kinds and events.

use crate::Range;

/// List type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list (`*`, `+` or `-` marker).
    Unordered,
    /// Ordered list (`1.` style marker).
    Ordered,
}

impl ListKind {
    /// HTML tag name for this list.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#` heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: Range,
    },
    /// Unordered list item.
    UnorderedItem {
        /// Item text after the marker.
        text: Range,
    },
    /// Ordered list item.
    OrderedItem {
        /// Item text after the marker.
        text: Range,
    },
    /// Paragraph content line.
    Paragraph {
        /// Line content, stripped of surrounding whitespace.
        text: Range,
    },
    /// Empty or whitespace-only line.
    Blank,
}

/// Events emitted by the block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// A complete heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: Range,
    },

    /// Start of a list.
    ListStart {
        /// List type.
        kind: ListKind,
    },
    /// A single list item.
    ListItem {
        /// Item text.
        text: Range,
    },
    /// End of a list.
    ListEnd {
        /// List type.
        kind: ListKind,
    },

    /// Start of a paragraph.
    ParagraphStart,
    /// One line of paragraph content.
    ParagraphLine {
        /// Stripped line content.
        text: Range,
    },
    /// End of a paragraph.
    ParagraphEnd,
}
