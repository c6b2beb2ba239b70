//! Contract with the externally generated PER codec.
//!
//! The codec is produced elsewhere from a message schema and treated as an
//! opaque, already-correct collaborator. This module pins down the two
//! things the rest of the crate must agree with it on: the plain bitstream
//! cursor shape its routines consume, and the entry points every generated
//! record type exposes ([`PerRecord`]).
//!
//! The original runtime drives encode and decode through one read-write
//! cursor; here that splits into [`BitCursor`] (shared, decode path) and
//! [`BitCursorMut`] (exclusive, encode path) with identical position
//! accounting, so decode cursors can be formed over borrowed fragment
//! memory.

use thiserror::Error;

use crate::{arena::Arena, selector::DecodeGate};

/// Opaque numeric error code reported by the generated codec.
///
/// The support layer never interprets the code; it is carried through
/// unmodified for the caller to map against the generated schema constants.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("codec error code {code}")]
pub struct CodecError {
    code: i32,
}

impl CodecError {
    /// Wrap a raw code from the generated codec.
    #[must_use]
    pub const fn new(code: i32) -> Self { Self { code } }

    /// Return the raw numeric code.
    #[must_use]
    pub const fn code(&self) -> i32 { self.code }
}

/// Read cursor matching the shape generated PER decoders consume.
///
/// Position is tracked as a byte index plus a bit offset within that byte
/// (`0..8`). The cursor performs no bit-level reads itself; the generated
/// codec owns those semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    byte_pos: usize,
    bit_pos: u8,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self { Self::with_position(data, 0, 0) }

    /// Create a cursor at an explicit byte/bit position.
    #[must_use]
    pub const fn with_position(data: &'a [u8], byte_pos: usize, bit_pos: u8) -> Self {
        Self {
            data,
            byte_pos,
            bit_pos,
        }
    }

    /// Borrow the underlying buffer.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] { self.data }

    /// Buffer capacity in bytes.
    #[must_use]
    pub const fn len(&self) -> usize { self.data.len() }

    /// Report whether the buffer is zero-sized.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Current byte position.
    #[must_use]
    pub const fn byte_pos(&self) -> usize { self.byte_pos }

    /// Current bit position within the current byte.
    #[must_use]
    pub const fn bit_pos(&self) -> u8 { self.bit_pos }

    /// Bits left between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        let total = self.data.len() * 8;
        total.saturating_sub(self.byte_pos * 8 + usize::from(self.bit_pos))
    }

    /// Advance the position by `bits`, clamped to the end of the buffer.
    pub fn advance_bits(&mut self, bits: usize) {
        let total = (self.byte_pos * 8 + usize::from(self.bit_pos))
            .saturating_add(bits)
            .min(self.data.len() * 8);
        self.byte_pos = total / 8;
        #[expect(clippy::cast_possible_truncation, reason = "total % 8 is below 8")]
        {
            self.bit_pos = (total % 8) as u8;
        }
    }
}

/// Write cursor for the encode path.
///
/// Identical position accounting to [`BitCursor`], but over exclusively
/// borrowed memory so the generated encoder can write into it.
#[derive(Debug)]
pub struct BitCursorMut<'a> {
    data: &'a mut [u8],
    byte_pos: usize,
    bit_pos: u8,
}

impl<'a> BitCursorMut<'a> {
    /// Create a cursor at the start of `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Borrow the underlying buffer.
    #[must_use]
    pub fn data(&self) -> &[u8] { self.data }

    /// Mutably borrow the underlying buffer.
    pub fn data_mut(&mut self) -> &mut [u8] { self.data }

    /// Buffer capacity in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.data.len() }

    /// Report whether the buffer is zero-sized.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Current byte position.
    #[must_use]
    pub const fn byte_pos(&self) -> usize { self.byte_pos }

    /// Current bit position within the current byte.
    #[must_use]
    pub const fn bit_pos(&self) -> u8 { self.bit_pos }

    /// Bits left between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        let total = self.data.len() * 8;
        total.saturating_sub(self.byte_pos * 8 + usize::from(self.bit_pos))
    }

    /// Advance the position by `bits`, clamped to the end of the buffer.
    pub fn advance_bits(&mut self, bits: usize) {
        let total = (self.byte_pos * 8 + usize::from(self.bit_pos))
            .saturating_add(bits)
            .min(self.data.len() * 8);
        self.byte_pos = total / 8;
        #[expect(clippy::cast_possible_truncation, reason = "total % 8 is below 8")]
        {
            self.bit_pos = (total % 8) as u8;
        }
    }

    /// Bytes written so far, counting a partially filled final byte.
    #[must_use]
    pub const fn bytes_written(&self) -> usize {
        if self.bit_pos == 0 {
            self.byte_pos
        } else {
            self.byte_pos + 1
        }
    }
}

/// Entry points exposed by every record type the schema compiler generates.
///
/// Implementations wrap the generated routines one-to-one; the support
/// layer only supplies cursors, gates, and scratch memory and passes error
/// codes through untouched.
pub trait PerRecord: Sized {
    /// Reset the record to its schema default values.
    fn initialize(&mut self);

    /// Validate schema constraints.
    ///
    /// # Errors
    ///
    /// Returns the generated constraint error code on violation.
    fn is_constraint_valid(&self) -> Result<(), CodecError>;

    /// Encode the record into `cursor`.
    ///
    /// `finalize` selects whether any pending partial byte is flushed, as
    /// the generated encoder's trailing-bits flag does.
    ///
    /// # Errors
    ///
    /// Returns the generated encoder's error code on failure.
    fn encode(&self, cursor: &mut BitCursorMut<'_>, finalize: bool) -> Result<(), CodecError>;

    /// Decode a record from `cursor`.
    ///
    /// # Errors
    ///
    /// Returns the generated decoder's error code on malformed input or
    /// constraint violation.
    fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, CodecError>;

    /// Decode with an optional field-selection gate and scratch arena.
    ///
    /// A decoder given no gate behaves exactly like [`PerRecord::decode`];
    /// with a gate it must skip fields the gate rejects, and any scratch
    /// sub-objects it materialises come from `arena` rather than a heap.
    ///
    /// # Errors
    ///
    /// Returns the generated decoder's error code on failure.
    fn decode_partial(
        cursor: &mut BitCursor<'_>,
        gate: Option<&mut DecodeGate<'_>>,
        arena: Option<&mut Arena<'_>>,
    ) -> Result<Self, CodecError> {
        let _ = (gate, arena);
        Self::decode(cursor)
    }
}
