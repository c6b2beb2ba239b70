//! Bounded, ordered reassembler over borrowed fragments.
//!
//! [`FragmentStream`] tracks a small lifecycle state machine
//! (`Init → Processing → Complete | Error`) and drains fragments strictly
//! in append order. The fast path, [`FragmentStream::next_view`], hands out
//! an entire fragment remainder per call for message-aligned deployments;
//! [`FragmentStream::peek`] and [`FragmentStream::consume`] support
//! decoders that stop mid-fragment.

use derive_more::Display;
use log::{debug, warn};

use super::{StreamError, StreamView, fragment::Fragment};

/// Maximum number of fragments one stream can hold.
pub const MAX_STREAM_FRAGMENTS: usize = 16;

/// Lifecycle of a [`FragmentStream`].
///
/// Transitions are monotonic except for [`FragmentStream::reset`]:
/// `Complete` and `Error` are terminal.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum StreamState {
    /// No fragments accepted yet.
    #[display("init")]
    Init,
    /// Fragments queued; undrained bytes may remain.
    #[display("processing")]
    Processing,
    /// Every fragment fully drained.
    #[display("complete")]
    Complete,
    /// A fragment was offered while the table was at capacity.
    #[display("error")]
    Error,
}

/// Multi-fragment stream reassembler producing bitstream views without
/// copying.
///
/// # Examples
///
/// ```
/// use perstream::{FragmentStream, StreamState};
///
/// let first = [1_u8, 2, 3];
/// let second = [4_u8, 5];
/// let mut stream = FragmentStream::new();
/// stream.add_fragment(&first).expect("table has room");
/// stream.add_fragment(&second).expect("table has room");
///
/// assert_eq!(stream.next_view().expect("first window").data(), &[1, 2, 3]);
/// assert_eq!(stream.next_view().expect("second window").data(), &[4, 5]);
/// assert!(stream.next_view().is_none());
/// assert_eq!(stream.state(), StreamState::Complete);
/// ```
#[derive(Debug)]
pub struct FragmentStream<'a> {
    state: StreamState,
    fragments: [Fragment<'a>; MAX_STREAM_FRAGMENTS],
    count: usize,
    current: usize,
}

impl Default for FragmentStream<'_> {
    fn default() -> Self { Self::new() }
}

impl<'a> FragmentStream<'a> {
    /// Create an empty stream in the `Init` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: StreamState::Init,
            fragments: [Fragment::empty(); MAX_STREAM_FRAGMENTS],
            count: 0,
            current: 0,
        }
    }

    /// Append a caller-owned fragment to the table.
    ///
    /// The stream only borrows `data`; the caller must keep it valid and
    /// unmodified while any view derived from it is in use. Zero-length
    /// fragments are accepted. The first successful append moves the
    /// stream from `Init` to `Processing`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::TableFull`] — and transitions to
    /// [`StreamState::Error`] — exactly when the table is at capacity.
    /// Earlier fragments are left untouched.
    pub fn add_fragment(&mut self, data: &'a [u8]) -> Result<(), StreamError> {
        if self.count >= MAX_STREAM_FRAGMENTS {
            warn!("fragment table full at {MAX_STREAM_FRAGMENTS} entries, stream now in error");
            self.state = StreamState::Error;
            return Err(StreamError::TableFull {
                capacity: MAX_STREAM_FRAGMENTS,
            });
        }

        self.fragments[self.count] = Fragment::new(data);
        self.count += 1;

        if self.state == StreamState::Init {
            debug!("stream processing: first fragment, {} bytes", data.len());
            self.state = StreamState::Processing;
        }
        Ok(())
    }

    /// Hand out the next undrained fragment remainder as a bitstream view.
    ///
    /// The entire remainder is marked drained in one step. Drained
    /// fragments are skipped in append order and never revisited. Returns
    /// `None` — transitioning to `Complete` — once nothing undrained
    /// remains, and `None` without side effects in any non-`Processing`
    /// state.
    pub fn next_view(&mut self) -> Option<StreamView<'a>> {
        if self.state != StreamState::Processing {
            return None;
        }

        while self.current < self.count {
            let fragment = &mut self.fragments[self.current];
            if fragment.is_drained() {
                self.current += 1;
                continue;
            }
            let remainder = fragment.remainder();
            fragment.consume(remainder.len());
            return Some(StreamView::new(remainder));
        }

        debug!("stream complete after {} fragments", self.count);
        self.state = StreamState::Complete;
        None
    }

    /// Reveal the current undrained remainder without committing any
    /// consumption.
    ///
    /// Returns `None` when nothing undrained remains or the stream is not
    /// `Processing`. Pair with [`FragmentStream::consume`] for
    /// sub-fragment reads.
    #[must_use]
    pub fn peek(&self) -> Option<&'a [u8]> {
        if self.state != StreamState::Processing {
            return None;
        }
        self.fragments[self.current..self.count]
            .iter()
            .find(|fragment| !fragment.is_drained())
            .map(Fragment::remainder)
    }

    /// Commit `n` bytes of the current fragment as consumed.
    ///
    /// `n` is measured against the remainder [`FragmentStream::peek`]
    /// reports; committing cannot span fragments.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Overrun`] when `n` exceeds the current
    /// fragment's undrained remainder, leaving the stream unchanged.
    pub fn consume(&mut self, n: usize) -> Result<(), StreamError> {
        if self.state != StreamState::Processing {
            return if n == 0 {
                Ok(())
            } else {
                Err(StreamError::Overrun {
                    requested: n,
                    available: 0,
                })
            };
        }

        while self.current < self.count && self.fragments[self.current].is_drained() {
            self.current += 1;
        }

        let available = if self.current < self.count {
            self.fragments[self.current].remaining()
        } else {
            0
        };
        if n > available {
            return Err(StreamError::Overrun {
                requested: n,
                available,
            });
        }
        if n > 0 {
            self.fragments[self.current].consume(n);
        }
        Ok(())
    }

    /// Report whether every fragment has been fully drained and observed.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.state == StreamState::Complete }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> StreamState { self.state }

    /// Number of fragments appended since the last reset.
    #[must_use]
    pub const fn fragment_count(&self) -> usize { self.count }

    /// Undrained bytes across all fragments.
    #[must_use]
    pub fn remaining_bytes(&self) -> usize {
        self.fragments[..self.count]
            .iter()
            .map(Fragment::remaining)
            .sum()
    }

    /// Return to `Init` from any state, clearing the table and cursors.
    ///
    /// Fragment backing memory is untouched; the stream never owned it.
    pub fn reset(&mut self) {
        self.state = StreamState::Init;
        self.fragments = [Fragment::empty(); MAX_STREAM_FRAGMENTS];
        self.count = 0;
        self.current = 0;
    }
}
