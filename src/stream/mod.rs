//! Fragment stream reassembly for non-contiguous message input.
//!
//! Telemetry and sensor data frequently arrive in discrete chunks (radio
//! packets, ring-buffer segments) that never share a contiguous buffer.
//! [`FragmentStream`] holds a bounded, ordered table of borrowed byte
//! ranges and hands them out, in arrival order, as [`StreamView`] windows
//! the codec's bitstream cursor can read directly — no copy into one
//! contiguous buffer, which matters when that buffer would not fit the
//! memory budget.

mod fragment;

pub mod error;
pub mod reassembler;
pub mod view;

pub use error::StreamError;
pub use reassembler::{FragmentStream, MAX_STREAM_FRAGMENTS, StreamState};
pub use view::StreamView;
