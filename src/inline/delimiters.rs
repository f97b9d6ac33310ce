//! Delimiter pairing for `**` and `__` spans.
//!
//! Pairing is leftmost-first and non-greedy: an opener takes the nearest
//! closer on the same line with at least one byte between them. An opener
//! with no acceptable closer is literal and scanning resumes one byte later.

use memchr::{memchr, memmem};
use smallvec::SmallVec;

use crate::Range;

/// Length of every delimiter this module pairs.
pub const DELIM_LEN: usize = 2;

/// Bold delimiter.
pub const STRONG: &[u8; 2] = b"**";

/// Emphasis delimiter.
pub const EMPHASIS: &[u8; 2] = b"__";

/// Spans found for one delimiter, delimiters included.
pub type Spans = SmallVec<[Range; 8]>;

/// Collect non-overlapping spans delimited by `delim` on both sides.
///
/// `accept` can veto a candidate span; a vetoed opener is treated as text.
pub fn find_spans<F>(text: &[u8], delim: &[u8; 2], mut accept: F, out: &mut Spans)
where
    F: FnMut(Range) -> bool,
{
    let finder = memmem::Finder::new(delim);
    let mut pos = 0;

    while let Some(offset) = finder.find(&text[pos..]) {
        let open = pos + offset;
        let content_start = open + DELIM_LEN;
        let line_end = memchr(b'\n', &text[content_start..])
            .map_or(text.len(), |i| content_start + i);

        // Content must be at least one byte long
        let search_from = content_start + 1;
        let closer = if search_from < line_end {
            finder
                .find(&text[search_from..line_end])
                .map(|i| search_from + i)
        } else {
            None
        };

        if let Some(close) = closer {
            let span = Range::from_usize(open, close + DELIM_LEN);
            if accept(span) {
                out.push(span);
                pos = close + DELIM_LEN;
                continue;
            }
        }
        pos = open + 1;
    }
}

/// The part of a span between its delimiters.
#[inline]
pub fn content_of(span: Range) -> Range {
    Range::new(span.start + DELIM_LEN as u32, span.end - DELIM_LEN as u32)
}

/// Whether an emphasis span can coexist with the bold spans.
///
/// It must not cross a bold boundary: each bold span is either disjoint
/// from it, entirely inside it, or holds it entirely within its content.
///
/// `strong` must be sorted and non-overlapping, as [`find_spans`] leaves it.
pub fn nests_with(span: Range, strong: &[Range]) -> bool {
    let first = strong.partition_point(|bold| bold.end <= span.start);
    strong[first..]
        .iter()
        .take_while(|bold| bold.start < span.end)
        .all(|&bold| span.encloses(bold) || content_of(bold).encloses(span))
}
