//! Block-boundary transducer.

use crate::Range;
use crate::cursor::Cursor;

use super::classify::classify_line;
use super::event::{BlockEvent, LineKind, ListKind};

/// The block whose closing tag has not been emitted yet.
///
/// At most one block is open at a time; opening another closes it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenBlock {
    /// Nothing is open.
    #[default]
    None,
    /// A list of the given kind is open.
    List(ListKind),
    /// A paragraph is accumulating lines.
    Paragraph,
}

/// Block parser state.
///
/// # Example
/// ```
/// use markdown2html::block::{BlockEvent, BlockParser, ListKind};
///
/// let mut events = Vec::new();
/// BlockParser::new("- a\n- b").parse(&mut events);
///
/// assert_eq!(events.first(), Some(&BlockEvent::ListStart { kind: ListKind::Unordered }));
/// assert_eq!(events.last(), Some(&BlockEvent::ListEnd { kind: ListKind::Unordered }));
/// assert_eq!(events.len(), 4);
/// ```
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Current cursor position.
    cursor: Cursor<'a>,
    /// Currently open block.
    open: OpenBlock,
    /// Number of lines consumed so far.
    line_no: usize,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input.as_bytes()),
            open: OpenBlock::None,
            line_no: 0,
        }
    }

    /// The block currently open.
    pub fn open_block(&self) -> OpenBlock {
        self.open
    }

    /// Parse all lines and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while !self.cursor.is_eof() {
            let line = self.cursor.consume_line();
            self.line_no += 1;
            self.parse_line(line, events);
        }

        // Close whatever is still open at end of input
        self.close_open_block(events);
        log::debug!("parsed {} lines into {} block events", self.line_no, events.len());
    }

    /// Classify a single line and feed it to the state machine.
    fn parse_line(&mut self, line: Range, events: &mut Vec<BlockEvent>) {
        let kind = classify_line(self.input, line);
        log::trace!("line {}: {:?}", self.line_no, kind);

        match kind {
            LineKind::Heading { level, text } => {
                self.close_open_block(events);
                events.push(BlockEvent::Heading { level, text });
            }
            LineKind::UnorderedItem { text } => {
                self.list_item(ListKind::Unordered, text, events);
            }
            LineKind::OrderedItem { text } => {
                self.list_item(ListKind::Ordered, text, events);
            }
            LineKind::Paragraph { text } => {
                if self.open != OpenBlock::Paragraph {
                    self.close_open_block(events);
                    self.open = OpenBlock::Paragraph;
                    events.push(BlockEvent::ParagraphStart);
                }
                events.push(BlockEvent::ParagraphLine { text });
            }
            LineKind::Blank => {
                self.close_open_block(events);
            }
        }
    }

    /// Append an item, opening a list of `kind` first if needed.
    fn list_item(&mut self, kind: ListKind, text: Range, events: &mut Vec<BlockEvent>) {
        if self.open != OpenBlock::List(kind) {
            self.close_open_block(events);
            self.open = OpenBlock::List(kind);
            events.push(BlockEvent::ListStart { kind });
        }
        events.push(BlockEvent::ListItem { text });
    }

    /// Emit the closing event for the open block, if any.
    fn close_open_block(&mut self, events: &mut Vec<BlockEvent>) {
        match std::mem::take(&mut self.open) {
            OpenBlock::None => {}
            OpenBlock::List(kind) => events.push(BlockEvent::ListEnd { kind }),
            OpenBlock::Paragraph => events.push(BlockEvent::ParagraphEnd),
        }
    }
}
