//! HTML output writer.
//!
//! Output is a sequence of line fragments joined by `\n`. Each block-level
//! tag starts a new fragment; the writer puts the separator in front of
//! every fragment but the first, so there is no trailing newline.

use crate::ListKind;

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.start_fragment();
/// writer.heading_start(1);
/// writer.write_text("Hello");
/// writer.heading_end(1);
/// writer.start_fragment();
/// writer.paragraph_start();
/// writer.write_text("World");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<h1>Hello</h1>\n<p>World</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    fragments: usize,
    escape_html: bool,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            fragments: 0,
            escape_html: false,
        }
    }

    /// Reuse an existing buffer. Its contents are discarded.
    #[inline]
    pub fn from_buffer(mut buffer: String) -> Self {
        buffer.clear();
        Self {
            out: buffer,
            fragments: 0,
            escape_html: false,
        }
    }

    /// Escape `&`, `<` and `>` in text written through [`write_text`](Self::write_text).
    #[inline]
    pub fn set_escape_html(&mut self, escape: bool) {
        self.escape_html = escape;
    }

    /// Begin a new output line.
    #[inline]
    pub fn start_fragment(&mut self) {
        if self.fragments > 0 {
            self.out.push('\n');
        }
        self.fragments += 1;
    }

    /// Write a static string (compile-time known) without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write text content, escaped if the writer is configured to.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        if self.escape_html {
            self.out.push_str(&html_escape::encode_text(text));
        } else {
            self.out.push_str(text);
        }
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    // --- Common HTML Elements ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write list start: `<ul>` or `<ol>`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.open_tag(kind.tag());
    }

    /// Write list end: `</ul>` or `</ol>`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.close_tag(kind.tag());
    }

    /// Write a whole list item: `<li>text</li>`
    #[inline]
    pub fn list_item(&mut self, text: &str) {
        self.write_str("<li>");
        self.write_text(text);
        self.write_str("</li>");
    }
}
