//! Allow-list gate consulted during a field-by-field decode.

use super::FieldPath;

/// One allow-list entry: the decode decision for a field at a specific
/// position in the record.
///
/// Field indices are caller-defined and meaningful only for one specific
/// structure shape; the label exists purely for diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct FieldSelector {
    path: FieldPath,
    index: u32,
    label: &'static str,
    decode: bool,
}

impl FieldSelector {
    /// Entry for a top-level field.
    #[must_use]
    pub const fn new(index: u32, label: &'static str, decode: bool) -> Self {
        Self::nested(FieldPath::root(), index, label, decode)
    }

    /// Entry for a nested field, disambiguated by its parent path.
    #[must_use]
    pub const fn nested(path: FieldPath, index: u32, label: &'static str, decode: bool) -> Self {
        Self {
            path,
            index,
            label,
            decode,
        }
    }

    /// Nesting path of the structure containing the field.
    #[must_use]
    pub const fn path(&self) -> FieldPath { self.path }

    /// Index of the field within its containing structure.
    #[must_use]
    pub const fn index(&self) -> u32 { self.index }

    /// Human-readable label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str { self.label }

    /// Whether the field should be materialised.
    #[must_use]
    pub const fn decode(&self) -> bool { self.decode }
}

/// Cursor-tracking gate a structure-aware decoder consults while walking a
/// nested record.
///
/// Lookup is fail-open when no entries are configured (no filter means
/// decode everything, matching a decoder that was handed no gate at all)
/// and fail-closed otherwise: a field is materialised only when an entry
/// matching the current nesting path and field index says so. The asymmetry
/// bounds decode cost and memory on the constrained target once filtering
/// is requested.
///
/// # Examples
///
/// ```
/// use perstream::{DecodeGate, FieldSelector};
///
/// let fields = [FieldSelector::new(3, "payload", true)];
/// let gate = DecodeGate::new(&fields);
/// assert!(gate.should_decode(3));
/// assert!(!gate.should_decode(0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeGate<'sel> {
    fields: &'sel [FieldSelector],
    current_field: u32,
    path: FieldPath,
    /// Levels entered beyond the path capacity. While non-zero, the current
    /// position cannot be expressed and configured lookups fail closed.
    overflow: usize,
}

impl<'sel> DecodeGate<'sel> {
    /// Bind the gate to a caller-owned entry slice with cursors at zero.
    #[must_use]
    pub const fn new(fields: &'sel [FieldSelector]) -> Self {
        Self {
            fields,
            current_field: 0,
            path: FieldPath::root(),
            overflow: 0,
        }
    }

    /// Decide whether the decoder should materialise `field_index` at the
    /// current nesting position.
    #[must_use]
    pub fn should_decode(&self, field_index: u32) -> bool {
        if self.fields.is_empty() {
            return true;
        }
        if self.overflow > 0 {
            return false;
        }
        self.fields
            .iter()
            .find(|entry| entry.path() == self.path && entry.index() == field_index)
            .is_some_and(FieldSelector::decode)
    }

    /// Move the field cursor to the next sibling.
    pub fn advance_field(&mut self) {
        self.current_field = self.current_field.saturating_add(1);
    }

    /// Descend into the structure at the current field.
    pub fn enter_level(&mut self) {
        if self.overflow > 0 || !self.path.push(self.current_field) {
            self.overflow += 1;
        }
        self.current_field = 0;
    }

    /// Ascend to the containing structure, restoring its field cursor.
    ///
    /// Saturates at the record root.
    pub fn exit_level(&mut self) {
        if self.overflow > 0 {
            self.overflow -= 1;
            self.current_field = 0;
        } else if let Some(parent) = self.path.pop() {
            self.current_field = parent;
        }
    }

    /// Index of the field the decoder is currently positioned on.
    #[must_use]
    pub const fn current_field(&self) -> u32 { self.current_field }

    /// Current nesting depth, counting levels beyond the path capacity.
    #[must_use]
    pub const fn depth(&self) -> usize { self.path.depth() + self.overflow }

    /// Current nesting path (truncated if the traversal overflowed it).
    #[must_use]
    pub const fn path(&self) -> FieldPath { self.path }

    /// Report whether an allow-list is configured.
    #[must_use]
    pub const fn is_filtering(&self) -> bool { !self.fields.is_empty() }
}
