//! Bump allocator serving batch-lifetime scratch memory.
//!
//! [`Arena`] binds to a caller-owned byte buffer and hands out 4-byte
//! aligned regions by monotonic bump; release is whole-pool only via
//! [`Arena::reset`]. This trades individual deallocation for O(1) alloc and
//! O(1) bulk release, matching one-decode-per-batch workloads on targets
//! that avoid a general heap.
//!
//! Allocations are returned as generation-checked [`ArenaHandle`]s rather
//! than raw slices, so access through a handle issued before the most
//! recent reset surfaces as [`ArenaError::StaleHandle`] instead of silently
//! reading reused memory.

use log::debug;
use thiserror::Error;

/// Alignment applied to every allocation offset.
pub const ARENA_ALIGN: usize = 4;

/// Errors reported by [`Arena`] operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The rounded allocation size does not fit in the remaining capacity.
    #[error("arena exhausted: requested {requested} bytes, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
    /// The handle was issued before the most recent reset.
    #[error("stale arena handle: issued at generation {issued}, arena at {current}")]
    StaleHandle { issued: u32, current: u32 },
}

/// Region descriptor returned by [`Arena::alloc`].
///
/// A handle is only usable with the arena that issued it and only until
/// that arena is reset. The recorded length is the requested size; the
/// padding added for alignment is never exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaHandle {
    offset: usize,
    len: usize,
    generation: u32,
}

impl ArenaHandle {
    /// Byte offset of the region from the buffer origin.
    #[must_use]
    pub const fn offset(&self) -> usize { self.offset }

    /// Length of the region in bytes.
    #[must_use]
    pub const fn len(&self) -> usize { self.len }

    /// Report whether the region is zero-sized.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }
}

/// Fixed-capacity bump allocator over a borrowed buffer.
///
/// # Examples
///
/// ```
/// use perstream::Arena;
///
/// let mut backing = [0_u8; 64];
/// let mut arena = Arena::new(&mut backing);
/// let handle = arena.alloc(6).expect("fits");
/// assert_eq!(handle.offset() % 4, 0);
/// assert_eq!(arena.bytes(handle).expect("live handle").len(), 6);
/// arena.reset();
/// assert!(arena.bytes(handle).is_err());
/// ```
#[derive(Debug)]
pub struct Arena<'buf> {
    buf: &'buf mut [u8],
    used: usize,
    generation: u32,
}

impl<'buf> Arena<'buf> {
    /// Bind the arena to a caller-owned region with usage reset to zero.
    #[must_use]
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self {
            buf,
            used: 0,
            generation: 0,
        }
    }

    /// Allocate `size` bytes, rounded up to the next multiple of
    /// [`ARENA_ALIGN`].
    ///
    /// Zero-sized requests succeed and yield an empty region. A failed
    /// allocation leaves usage unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] when the rounded size exceeds the
    /// remaining capacity.
    pub fn alloc(&mut self, size: usize) -> Result<ArenaHandle, ArenaError> {
        let remaining = self.remaining();
        let rounded = size
            .checked_add(ARENA_ALIGN - 1)
            .map(|padded| padded & !(ARENA_ALIGN - 1))
            .filter(|rounded| *rounded <= remaining);
        let Some(rounded) = rounded else {
            debug!("arena exhausted: requested {size} bytes, {remaining} remaining");
            return Err(ArenaError::Exhausted {
                requested: size,
                remaining,
            });
        };

        let handle = ArenaHandle {
            offset: self.used,
            len: size,
            generation: self.generation,
        };
        self.used += rounded;
        Ok(handle)
    }

    /// Borrow the region behind `handle`.
    ///
    /// Contents are whatever was last written there; the arena never zeroes
    /// memory, so bytes from a previous batch may still be visible.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`] when the handle predates the most
    /// recent reset.
    pub fn bytes(&self, handle: ArenaHandle) -> Result<&[u8], ArenaError> {
        self.check_generation(handle)?;
        Ok(&self.buf[handle.offset..handle.offset + handle.len])
    }

    /// Mutably borrow the region behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`] when the handle predates the most
    /// recent reset.
    pub fn bytes_mut(&mut self, handle: ArenaHandle) -> Result<&mut [u8], ArenaError> {
        self.check_generation(handle)?;
        Ok(&mut self.buf[handle.offset..handle.offset + handle.len])
    }

    /// Release the whole pool, invalidating every outstanding handle.
    ///
    /// Buffer contents are not altered.
    pub fn reset(&mut self) {
        self.used = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Total capacity of the backing buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize { self.buf.len() }

    /// Bytes currently allocated, including alignment padding.
    #[must_use]
    pub const fn used(&self) -> usize { self.used }

    /// Bytes still available for allocation.
    #[must_use]
    pub fn remaining(&self) -> usize { self.buf.len() - self.used }

    /// Current generation; bumped by every [`Arena::reset`].
    #[must_use]
    pub const fn generation(&self) -> u32 { self.generation }

    fn check_generation(&self, handle: ArenaHandle) -> Result<(), ArenaError> {
        if handle.generation == self.generation {
            Ok(())
        } else {
            Err(ArenaError::StaleHandle {
                issued: handle.generation,
                current: self.generation,
            })
        }
    }
}
