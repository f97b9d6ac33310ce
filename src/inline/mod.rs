//! Inline parser for paragraph content.
//!
//! Two phases:
//! 1. Span collection: bold (`**`) spans first, then emphasis (`__`) spans
//!    that nest cleanly with the bold ones. Neither may split a raw HTML
//!    element already in the text
//! 2. Event emission: walk the delimiter positions in order and emit
//!    text between them

mod delimiters;
pub mod event;
mod html;

pub use event::InlineEvent;

use smallvec::SmallVec;

use crate::Range;
use delimiters::{DELIM_LEN, EMPHASIS, STRONG, Spans, content_of, find_spans, nests_with};
use html::tags_balanced;

/// A delimiter position and the event it turns into.
#[derive(Debug, Clone, Copy)]
struct EmitPoint {
    pos: u32,
    event: InlineEvent,
}

/// Inline parser state.
///
/// # Example
/// ```
/// use markdown2html::inline::{InlineEvent, InlineParser};
/// use markdown2html::Range;
///
/// let mut parser = InlineParser::new();
/// let mut events = Vec::new();
/// parser.parse(b"a **b**", &mut events);
///
/// assert_eq!(
///     events,
///     vec![
///         InlineEvent::Text(Range::new(0, 2)),
///         InlineEvent::StrongStart,
///         InlineEvent::Text(Range::new(4, 5)),
///         InlineEvent::StrongEnd,
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct InlineParser {
    strong: Spans,
    emphasis: Spans,
    points: SmallVec<[EmitPoint; 16]>,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse inline content and emit events.
    ///
    /// Text ranges are relative to `text`.
    pub fn parse(&mut self, text: &[u8], events: &mut Vec<InlineEvent>) {
        self.strong.clear();
        self.emphasis.clear();
        self.points.clear();

        if memchr::memchr2(b'*', b'_', text).is_none() {
            push_text(events, 0, text.len());
            return;
        }

        let has_tags = memchr::memchr(b'<', text).is_some();
        let keeps_html = |span: Range| !has_tags || tags_balanced(content_of(span).slice(text));

        find_spans(text, STRONG, keeps_html, &mut self.strong);
        let strong = &self.strong;
        find_spans(
            text,
            EMPHASIS,
            |span| nests_with(span, strong) && keeps_html(span),
            &mut self.emphasis,
        );

        let delim_len = DELIM_LEN as u32;
        for span in &self.strong {
            self.points.push(EmitPoint {
                pos: span.start,
                event: InlineEvent::StrongStart,
            });
            self.points.push(EmitPoint {
                pos: span.end - delim_len,
                event: InlineEvent::StrongEnd,
            });
        }
        for span in &self.emphasis {
            self.points.push(EmitPoint {
                pos: span.start,
                event: InlineEvent::EmphasisStart,
            });
            self.points.push(EmitPoint {
                pos: span.end - delim_len,
                event: InlineEvent::EmphasisEnd,
            });
        }
        // `*` and `_` delimiters never share a byte, so positions are unique
        self.points.sort_unstable_by_key(|p| p.pos);

        let mut cursor = 0usize;
        for point in &self.points {
            let pos = point.pos as usize;
            push_text(events, cursor, pos);
            events.push(point.event);
            cursor = pos + DELIM_LEN;
        }
        push_text(events, cursor, text.len());
    }
}

#[inline]
fn push_text(events: &mut Vec<InlineEvent>, start: usize, end: usize) {
    if end > start {
        events.push(InlineEvent::Text(Range::from_usize(start, end)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render events back to a string with the HTML tags inlined.
    fn render(text: &str) -> String {
        let mut parser = InlineParser::new();
        let mut events = Vec::new();
        parser.parse(text.as_bytes(), &mut events);

        let mut out = String::new();
        for event in events {
            match event {
                InlineEvent::Text(range) => out.push_str(range.slice_str(text)),
                other => out.push_str(other.tag().unwrap_or_default()),
            }
        }
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(render("nothing here"), "nothing here");
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_bold() {
        assert_eq!(render("say **hi** now"), "say <b>hi</b> now");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(render("say __hi__ now"), "say <em>hi</em> now");
    }

    #[test]
    fn test_both() {
        assert_eq!(render("**a** and __b__"), "<b>a</b> and <em>b</em>");
    }

    #[test]
    fn test_emphasis_around_bold() {
        assert_eq!(render("__a **b** c__"), "<em>a <b>b</b> c</em>");
    }

    #[test]
    fn test_bold_around_emphasis() {
        assert_eq!(render("**a __b__ c**"), "<b>a <em>b</em> c</b>");
    }

    #[test]
    fn test_crossing_emphasis_is_literal() {
        assert_eq!(render("**a __b** c__"), "<b>a __b</b> c__");
    }

    #[test]
    fn test_single_delimiters_untouched() {
        assert_eq!(render("*a* _b_"), "*a* _b_");
    }

    #[test]
    fn test_per_line_pairing() {
        assert_eq!(render("**a\nb**"), "**a\nb**");
        assert_eq!(render("**a**\n__b__"), "<b>a</b>\n<em>b</em>");
    }

    #[test]
    fn test_spans_do_not_split_raw_html() {
        assert_eq!(render("**a <i>b** c</i>"), "**a <i>b** c</i>");
        assert_eq!(render("<b>b __c</b> d__"), "<b>b __c</b> d__");
        assert_eq!(render("**<i>x</i>**"), "<b><i>x</i></b>");
        assert_eq!(render("__a<br>b__"), "<em>a<br>b</em>");
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = InlineParser::new();
        let mut events = Vec::new();
        parser.parse(b"**x**", &mut events);
        events.clear();
        parser.parse(b"plain", &mut events);
        assert_eq!(events, vec![InlineEvent::Text(Range::new(0, 5))]);
    }
}
