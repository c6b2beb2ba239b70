//! Non-owning bitstream window and its adapter to the codec cursor shape.
//!
//! [`StreamView`] is what the reassembler hands out: a borrowed window plus
//! byte/bit position. The generated codec consumes the plain
//! [`BitCursor`] shape instead; conversion between the two is a pure field
//! copy with no validation, identity under round-trip. Scratch memory is
//! not part of either representation — decoders receive the arena as an
//! explicit argument.

use crate::codec::BitCursor;

/// Non-owning window over reassembled bytes.
///
/// Views alias caller-owned fragment memory; the lifetime ties each view
/// to the fragments the caller appended.
///
/// # Examples
///
/// ```
/// use perstream::{BitCursor, StreamView};
///
/// let bytes = [0xDE_u8, 0xAD, 0xBE, 0xEF];
/// let view = StreamView::new(&bytes);
/// let cursor = BitCursor::from(view);
/// assert_eq!(cursor.data(), &bytes);
/// assert_eq!(StreamView::from(cursor), view);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamView<'a> {
    data: &'a [u8],
    byte_pos: usize,
    bit_pos: u8,
}

impl<'a> StreamView<'a> {
    /// Create a view positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self { Self::with_position(data, 0, 0) }

    /// Create a view at an explicit byte/bit position.
    #[must_use]
    pub const fn with_position(data: &'a [u8], byte_pos: usize, bit_pos: u8) -> Self {
        Self {
            data,
            byte_pos,
            bit_pos,
        }
    }

    /// Borrow the windowed bytes.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] { self.data }

    /// Window length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize { self.data.len() }

    /// Report whether the window is zero-sized.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Current byte position.
    #[must_use]
    pub const fn byte_pos(&self) -> usize { self.byte_pos }

    /// Current bit position within the current byte.
    #[must_use]
    pub const fn bit_pos(&self) -> u8 { self.bit_pos }

    /// Convert to the cursor shape the generated codec consumes.
    #[must_use]
    pub const fn cursor(&self) -> BitCursor<'a> {
        BitCursor::with_position(self.data, self.byte_pos, self.bit_pos)
    }
}

impl<'a> From<StreamView<'a>> for BitCursor<'a> {
    fn from(view: StreamView<'a>) -> Self { view.cursor() }
}

impl<'a> From<BitCursor<'a>> for StreamView<'a> {
    fn from(cursor: BitCursor<'a>) -> Self {
        Self::with_position(cursor.data(), cursor.byte_pos(), cursor.bit_pos())
    }
}
