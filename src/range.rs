//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets, so documents are limited to [`MAX_INPUT_LEN`].

/// Largest input, in bytes, whose offsets fit a [`Range`].
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Compact range into an input buffer.
///
/// # Example
/// ```
/// use markdown2html::Range;
///
/// let input = b"# Title";
/// let range = Range::new(2, 7);
/// assert_eq!(range.slice(input), b"Title");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed [`MAX_INPUT_LEN`].
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= MAX_INPUT_LEN);
        debug_assert!(end <= MAX_INPUT_LEN);
        debug_assert!(start <= end);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Get the text this range refers to.
    ///
    /// Returns an empty string if the range splits a UTF-8 sequence, which
    /// cannot happen for ranges produced by the parser: it only cuts at
    /// char boundaries.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start_usize()..self.end_usize()).unwrap_or("")
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Check if `other` lies entirely within this range.
    #[inline]
    pub const fn encloses(&self, other: Range) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}
