//! markdown2html: line-oriented Markdown to HTML converter
//!
//! Handles a deliberately small subset of Markdown:
//! - `#` headings, levels 1-6
//! - unordered (`*`, `+`, `-`) and ordered (`1.`) lists, one level deep
//! - paragraphs, with `**bold**` and `__emphasis__` inside them
//!
//! # Design
//! - One pass over the input, one line at a time
//! - Block parser emits events; the renderer turns them into HTML fragments
//! - Ranges into the input buffer instead of copied strings
//! - Output is fragments joined with `\n`, no document wrapper

pub mod block;
pub mod convert;
pub mod cursor;
pub mod error;
pub mod inline;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, LineKind, ListKind, OpenBlock};
pub use convert::{convert, convert_with_options};
pub use error::ConvertError;
pub use inline::{InlineEvent, InlineParser};
pub use range::Range;
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Apply `**bold**` and `__emphasis__` substitution in paragraphs.
    pub inline_markup: bool,
    /// Escape `&`, `<` and `>` in text content.
    pub escape_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            inline_markup: true,
            escape_html: false,
        }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
///
/// Offsets are `u32`, so `input` must be at most [`range::MAX_INPUT_LEN`]
/// bytes. [`convert`] checks this for files.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let mut buffer = std::mem::take(out);
    buffer.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::from_buffer(buffer);
    render_to_writer(input, &mut writer, options);
    *out = writer.into_string();
}

/// State for collecting paragraph content before inline parsing.
struct ParagraphState {
    /// Collected text content (joined with newlines).
    content: String,
    /// Number of lines collected.
    lines: usize,
}

impl ParagraphState {
    fn new() -> Self {
        Self {
            content: String::with_capacity(256),
            lines: 0,
        }
    }

    fn start(&mut self) {
        self.content.clear();
        self.lines = 0;
    }

    fn add_line(&mut self, text: &str) {
        if self.lines > 0 {
            self.content.push('\n');
        }
        self.content.push_str(text);
        self.lines += 1;
    }

    fn finish(&self) -> &str {
        &self.content
    }
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    writer.set_escape_html(options.escape_html);

    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 16).max(64));
    parser.parse(&mut events);

    let mut inline_parser = InlineParser::new();
    let mut inline_events = Vec::with_capacity(16);
    let mut para_state = ParagraphState::new();

    for event in &events {
        render_block_event(
            input,
            event,
            writer,
            &mut inline_parser,
            &mut inline_events,
            &mut para_state,
            options,
        );
    }
}

/// Render a single block event to HTML.
fn render_block_event(
    input: &str,
    event: &BlockEvent,
    writer: &mut HtmlWriter,
    inline_parser: &mut InlineParser,
    inline_events: &mut Vec<InlineEvent>,
    para_state: &mut ParagraphState,
    options: &Options,
) {
    match *event {
        BlockEvent::Heading { level, text } => {
            writer.start_fragment();
            writer.heading_start(level);
            writer.write_text(text.slice_str(input));
            writer.heading_end(level);
        }
        BlockEvent::ListStart { kind } => {
            writer.start_fragment();
            writer.list_start(kind);
        }
        BlockEvent::ListItem { text } => {
            writer.start_fragment();
            writer.list_item(text.slice_str(input));
        }
        BlockEvent::ListEnd { kind } => {
            writer.start_fragment();
            writer.list_end(kind);
        }
        BlockEvent::ParagraphStart => {
            para_state.start();
        }
        BlockEvent::ParagraphLine { text } => {
            para_state.add_line(text.slice_str(input));
        }
        BlockEvent::ParagraphEnd => {
            let content = para_state.finish();
            writer.start_fragment();
            writer.paragraph_start();
            if options.inline_markup {
                render_inline(content, writer, inline_parser, inline_events);
            } else {
                writer.write_text(content);
            }
            writer.paragraph_end();
        }
    }
}

/// Render paragraph content with inline markup.
fn render_inline(
    content: &str,
    writer: &mut HtmlWriter,
    inline_parser: &mut InlineParser,
    inline_events: &mut Vec<InlineEvent>,
) {
    inline_events.clear();
    inline_parser.parse(content.as_bytes(), inline_events);

    for event in inline_events.iter() {
        match *event {
            InlineEvent::Text(range) => writer.write_text(range.slice_str(content)),
            tag => {
                if let Some(tag) = tag.tag() {
                    writer.write_str(tag);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html("\n\n"), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(to_html("# Hello"), "<h1>Hello</h1>");
        assert_eq!(to_html("### Third"), "<h3>Third</h3>");
    }

    #[test]
    fn test_heading_no_inline_markup() {
        assert_eq!(to_html("## **Not** bold"), "<h2>**Not** bold</h2>");
    }

    #[test]
    fn test_list_no_inline_markup() {
        assert_eq!(to_html("- __item__"), "<ul>\n<li>__item__</li>\n</ul>");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(to_html("Hello world"), "<p>Hello world</p>");
    }

    #[test]
    fn test_multiline_paragraph_joined_with_newline() {
        assert_eq!(to_html("one\n  two  \nthree"), "<p>one\ntwo\nthree</p>");
    }

    #[test]
    fn test_paragraph_inline() {
        assert_eq!(
            to_html("Some **bold** and __emphasized__ text"),
            "<p>Some <b>bold</b> and <em>emphasized</em> text</p>"
        );
    }

    #[test]
    fn test_inline_markup_disabled() {
        let options = Options {
            inline_markup: false,
            ..Options::default()
        };
        assert_eq!(to_html_with_options("**x**", &options), "<p>**x**</p>");
    }

    #[test]
    fn test_escape_html_option() {
        let options = Options {
            escape_html: true,
            ..Options::default()
        };
        assert_eq!(
            to_html_with_options("# a < b\n\n**x & y**", &options),
            "<h1>a &lt; b</h1>\n<p><b>x &amp; y</b></p>"
        );
    }

    #[test]
    fn test_raw_html_passes_through_by_default() {
        assert_eq!(to_html("<div>x</div>"), "<p><div>x</div></p>");
    }

    #[test]
    fn test_document() {
        let input = "# Title\n\nIntro line\nsecond line\n\n- a\n- b\n1. one\n2. two\n## End";
        let expected = "<h1>Title</h1>\n\
                        <p>Intro line\nsecond line</p>\n\
                        <ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\
                        <ol>\n<li>one</li>\n<li>two</li>\n</ol>\n\
                        <h2>End</h2>";
        assert_eq!(to_html(input), expected);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(to_html("# A\r\n\r\ntext\r\n"), "<h1>A</h1>\n<p>text</p>");
    }

    #[test]
    fn test_to_html_into_reuses_buffer() {
        let mut out = String::from("previous output");
        to_html_into("# X", &mut out);
        assert_eq!(out, "<h1>X</h1>");
        to_html_into("- y", &mut out);
        assert_eq!(out, "<ul>\n<li>y</li>\n</ul>");
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(options.inline_markup);
        assert!(!options.escape_html);
    }
}
