//! Table entry tracking one borrowed byte range and its drain position.

/// Caller-owned byte range forming part of one logical message.
///
/// The stream never copies or frees fragment memory; the borrow ties every
/// view derived from it to the caller's allocation.
#[derive(Clone, Copy, Debug)]
pub(super) struct Fragment<'a> {
    data: &'a [u8],
    processed: usize,
}

impl<'a> Fragment<'a> {
    pub(super) const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            processed: 0,
        }
    }

    /// Placeholder for unused table slots.
    pub(super) const fn empty() -> Self { Self::new(&[]) }

    /// The undrained tail of the fragment.
    pub(super) fn remainder(&self) -> &'a [u8] { &self.data[self.processed..] }

    /// Undrained bytes left in the fragment.
    pub(super) const fn remaining(&self) -> usize { self.data.len() - self.processed }

    pub(super) const fn is_drained(&self) -> bool { self.processed >= self.data.len() }

    /// Mark `n` bytes drained. Callers bound `n` by [`Fragment::remaining`].
    pub(super) const fn consume(&mut self, n: usize) { self.processed += n; }
}
