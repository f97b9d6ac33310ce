//! Raw HTML tag scanning inside paragraph text.
//!
//! Text is never parsed as HTML, but a substituted span must not split an
//! element already present in the text, or the output loses its nesting.

use memchr::memchr;
use smallvec::SmallVec;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"source", b"track", b"wbr",
];

/// A tag found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag<'a> {
    Open(&'a [u8]),
    Close(&'a [u8]),
}

/// Scan a tag starting at `text[0] == b'<'`.
///
/// Returns the tag and its length, or `None` if the bytes are not
/// tag-shaped. Void and self-closing tags come back as `None` as well,
/// since they never affect nesting.
fn scan_tag(text: &[u8]) -> Option<(Tag<'_>, usize)> {
    debug_assert_eq!(text.first(), Some(&b'<'));
    let end = memchr(b'>', text)?;
    let inner = &text[1..end];
    if memchr(b'<', inner).is_some() {
        return None;
    }

    let (closing, body) = match inner.split_first() {
        Some((b'/', rest)) => (true, rest),
        _ => (false, inner),
    };
    let name_len = body
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'-'))
        .unwrap_or(body.len());
    let name = &body[..name_len];
    if !name.first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    if !closing && (body.ends_with(b"/") || is_void(name)) {
        return None;
    }

    let tag = if closing { Tag::Close(name) } else { Tag::Open(name) };
    Some((tag, end + 1))
}

fn is_void(name: &[u8]) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Whether every tag opened in `text` is closed in `text`, and no tag is
/// closed that was opened outside it.
pub fn tags_balanced(text: &[u8]) -> bool {
    let mut stack: SmallVec<[&[u8]; 8]> = SmallVec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &text[pos..]) {
        let start = pos + offset;
        match scan_tag(&text[start..]) {
            Some((Tag::Open(name), len)) => {
                stack.push(name);
                pos = start + len;
            }
            Some((Tag::Close(name), len)) => {
                match stack.pop() {
                    Some(open) if open.eq_ignore_ascii_case(name) => {}
                    _ => return false,
                }
                pos = start + len;
            }
            None => pos = start + 1,
        }
    }
    stack.is_empty()
}
