//! Fixed-capacity nesting path identifying a position within a record.

/// Maximum nesting depth a [`FieldPath`] can record.
pub const MAX_FIELD_DEPTH: usize = 8;

/// Sequence of field indices leading from the record root to a nested
/// structure.
///
/// The path is a small inline vector so it stays `Copy` and allocation
/// free. Slots beyond the current depth are always zero, which lets the
/// derived equality compare whole paths directly.
///
/// # Examples
///
/// ```
/// use perstream::FieldPath;
///
/// let mut path = FieldPath::root();
/// assert!(path.push(2));
/// assert_eq!(path.as_slice(), &[2]);
/// assert_eq!(path.pop(), Some(2));
/// assert!(path.is_root());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    indices: [u32; MAX_FIELD_DEPTH],
    depth: usize,
}

impl FieldPath {
    /// The empty path, designating the record root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            indices: [0; MAX_FIELD_DEPTH],
            depth: 0,
        }
    }

    /// Build a path from explicit indices.
    ///
    /// Returns `None` when more than [`MAX_FIELD_DEPTH`] indices are given.
    #[must_use]
    pub fn from_indices(indices: &[u32]) -> Option<Self> {
        if indices.len() > MAX_FIELD_DEPTH {
            return None;
        }
        let mut path = Self::root();
        for &index in indices {
            path.push(index);
        }
        Some(path)
    }

    /// Append `index`, returning `false` when the path is at capacity.
    pub fn push(&mut self, index: u32) -> bool {
        if self.depth == MAX_FIELD_DEPTH {
            return false;
        }
        self.indices[self.depth] = index;
        self.depth += 1;
        true
    }

    /// Remove and return the deepest index, or `None` at the root.
    pub fn pop(&mut self) -> Option<u32> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        let index = self.indices[self.depth];
        // Keep unused slots zeroed so whole-path equality stays valid.
        self.indices[self.depth] = 0;
        Some(index)
    }

    /// Current depth of the path.
    #[must_use]
    pub const fn depth(&self) -> usize { self.depth }

    /// Report whether the path designates the record root.
    #[must_use]
    pub const fn is_root(&self) -> bool { self.depth == 0 }

    /// Borrow the recorded indices, shallowest first.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] { &self.indices[..self.depth] }
}
