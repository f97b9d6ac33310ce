//! Line classifier.
//!
//! Rules are tried in order and the first match wins:
//! heading, unordered item, ordered item, blank, paragraph.

use crate::Range;
use crate::cursor::Cursor;

use super::event::LineKind;

/// Deepest heading level HTML has a tag for.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classify one line of `input`.
///
/// `line` must cover a single line without its terminator, as returned by
/// [`Cursor::consume_line`].
///
/// # Example
/// ```
/// use markdown2html::block::{classify_line, LineKind};
/// use markdown2html::Range;
///
/// let input = "## Setup";
/// let kind = classify_line(input, Range::new(0, 8));
/// assert_eq!(kind, LineKind::Heading { level: 2, text: Range::new(3, 8) });
/// ```
pub fn classify_line(input: &str, line: Range) -> LineKind {
    let bytes = input.as_bytes();

    if let Some(kind) = try_heading(bytes, line) {
        return kind;
    }
    if let Some(text) = try_unordered_item(bytes, line) {
        return LineKind::UnorderedItem { text };
    }
    if let Some(text) = try_ordered_item(bytes, line) {
        return LineKind::OrderedItem { text };
    }

    let content = line.slice_str(input);
    let body = content.trim_start();
    if body.is_empty() {
        return LineKind::Blank;
    }
    let body_start = line.start_usize() + (content.len() - body.len());
    let end = body_start + body.trim_end().len();

    // A heading marker behind an indent stays indented, so the joined
    // paragraph text never has a line that reads as a heading.
    let unindented = Range::from_usize(body_start, line.end_usize());
    let start = if body_start > line.start_usize() && try_heading(bytes, unindented).is_some() {
        line.start_usize()
    } else {
        body_start
    };
    LineKind::Paragraph {
        text: Range::from_usize(start, end),
    }
}

/// `#{1,6} text`
fn try_heading(bytes: &[u8], line: Range) -> Option<LineKind> {
    let mut cursor = Cursor::within(bytes, line);
    let level = cursor.skip_byte(b'#');
    if level == 0 || level > MAX_HEADING_LEVEL || !cursor.eat(b' ') {
        return None;
    }
    Some(LineKind::Heading {
        level: level as u8,
        text: cursor.rest_trimmed(),
    })
}

/// `[ws]* [*+-] text`
fn try_unordered_item(bytes: &[u8], line: Range) -> Option<Range> {
    let mut cursor = Cursor::within(bytes, line);
    cursor.skip_whitespace();
    if !cursor.at_any(b"*+-") {
        return None;
    }
    cursor.bump();
    if !cursor.eat(b' ') {
        return None;
    }
    Some(cursor.rest_trimmed())
}

/// `[ws]* digits . [ws]? text`
fn try_ordered_item(bytes: &[u8], line: Range) -> Option<Range> {
    let mut cursor = Cursor::within(bytes, line);
    cursor.skip_whitespace();
    if cursor.skip_digits() == 0 || !cursor.eat(b'.') {
        return None;
    }
    cursor.eat_whitespace();
    Some(cursor.rest_trimmed())
}
