//! Field-selection gate for partial decoding of nested records.
//!
//! A structure-aware decoder walks a record field by field and asks the
//! gate which fields to materialise. The gate is purely an index-keyed
//! allow-list plus a traversal cursor; it knows nothing about the record
//! shape itself. Entries are keyed by (nesting path, field index) so two
//! nested fields sharing a local index gate independently, while flat
//! schemas keep the plain index semantics.

pub mod gate;
pub mod path;

pub use gate::{DecodeGate, FieldSelector};
pub use path::{FieldPath, MAX_FIELD_DEPTH};

#[cfg(test)]
mod tests;
