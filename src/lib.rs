//! Support layer between a generated PER codec and a heap-averse caller.
//!
//! `perstream` prepares input for, and adapts memory to, an externally
//! generated Packed Encoding Rules codec running on a constrained target:
//! no dynamic heap, bounded buffers, possibly fragmented input. The codec
//! itself (bit-exact encode/decode over fixed-layout records) is an opaque
//! collaborator described by the [`codec`] contract; everything in this
//! crate is the adaptation around it.
//!
//! - [`arena`] — fixed-capacity bump allocator over a caller-owned buffer,
//!   released in bulk once per message batch.
//! - [`selector`] — allow-list gate telling a structure-aware decoder which
//!   fields to materialise during a partial decode.
//! - [`stream`] — bounded reassembler exposing non-contiguous fragments as
//!   bitstream views, in arrival order, without copying.
//! - [`codec`] — the cursor shapes and entry points the generated codec
//!   exposes, consumed here as black boxes.

pub mod arena;
pub mod codec;
pub mod selector;
pub mod stream;

pub use arena::{ARENA_ALIGN, Arena, ArenaError, ArenaHandle};
pub use codec::{BitCursor, BitCursorMut, CodecError, PerRecord};
pub use selector::{DecodeGate, FieldPath, FieldSelector, MAX_FIELD_DEPTH};
pub use stream::{FragmentStream, MAX_STREAM_FRAGMENTS, StreamError, StreamState, StreamView};
