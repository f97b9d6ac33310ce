//! Inline-level event types.

use crate::Range;

/// Events emitted by the inline parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text content.
    Text(Range),

    /// Start of bold text (`**bold**`).
    StrongStart,
    /// End of bold text.
    StrongEnd,

    /// Start of emphasis (`__em__`).
    EmphasisStart,
    /// End of emphasis.
    EmphasisEnd,
}

impl InlineEvent {
    /// The HTML tag this event writes, for everything but text.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::Text(_) => None,
            Self::StrongStart => Some("<b>"),
            Self::StrongEnd => Some("</b>"),
            Self::EmphasisStart => Some("<em>"),
            Self::EmphasisEnd => Some("</em>"),
        }
    }
}
