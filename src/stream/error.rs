//! Errors reported by the fragment stream.

use thiserror::Error;

/// Errors produced by [`FragmentStream`](crate::stream::FragmentStream).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The fragment table is at capacity.
    #[error("fragment table full: capacity {capacity}")]
    TableFull { capacity: usize },
    /// A consume request exceeded the current fragment's undrained
    /// remainder.
    #[error("consume overrun: requested {requested} bytes, {available} available")]
    Overrun { requested: usize, available: usize },
}
