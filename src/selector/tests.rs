//! Unit tests for allow-list lookup and traversal bookkeeping.

use rstest::rstest;

use super::{DecodeGate, FieldPath, FieldSelector, MAX_FIELD_DEPTH};

#[rstest]
#[case(0)]
#[case(3)]
#[case(17)]
fn empty_allow_list_decodes_everything(#[case] index: u32) {
    let gate = DecodeGate::new(&[]);
    assert!(gate.should_decode(index));
    assert!(!gate.is_filtering());
}

#[test]
fn configured_gate_is_a_strict_allow_list() {
    let fields = [FieldSelector::new(3, "timestamp", true)];
    let gate = DecodeGate::new(&fields);

    assert!(gate.should_decode(3));
    for other in [0, 1, 2, 4, 100] {
        assert!(!gate.should_decode(other), "index {other} is not listed");
    }
}

#[test]
fn explicit_skip_entry_is_honoured() {
    let fields = [
        FieldSelector::new(0, "header", true),
        FieldSelector::new(1, "payload", false),
    ];
    let gate = DecodeGate::new(&fields);

    assert!(gate.should_decode(0));
    assert!(!gate.should_decode(1));
}

#[test]
fn nested_entries_with_equal_indices_gate_independently() {
    let under_header = FieldPath::from_indices(&[0]).expect("fits");
    let under_body = FieldPath::from_indices(&[1]).expect("fits");
    let fields = [
        FieldSelector::nested(under_header, 0, "header.seconds", true),
        FieldSelector::nested(under_body, 0, "body.reading", false),
    ];
    let mut gate = DecodeGate::new(&fields);

    // Walk into field 0 (header): its local field 0 is allowed.
    gate.enter_level();
    assert!(gate.should_decode(0));
    gate.exit_level();

    // Walk into field 1 (body): same local index, explicitly skipped.
    gate.advance_field();
    gate.enter_level();
    assert!(!gate.should_decode(0));
}

#[test]
fn flat_entries_do_not_match_nested_positions() {
    let fields = [FieldSelector::new(2, "status", true)];
    let mut gate = DecodeGate::new(&fields);

    assert!(gate.should_decode(2));
    gate.enter_level();
    assert!(!gate.should_decode(2), "entry is keyed to the root path");
}

#[test]
fn exit_level_restores_parent_cursor_and_saturates_at_root() {
    let mut gate = DecodeGate::new(&[]);

    gate.advance_field();
    gate.advance_field();
    assert_eq!(gate.current_field(), 2);

    gate.enter_level();
    assert_eq!(gate.depth(), 1);
    assert_eq!(gate.current_field(), 0);
    assert_eq!(gate.path().as_slice(), &[2]);

    gate.exit_level();
    assert_eq!(gate.depth(), 0);
    assert_eq!(gate.current_field(), 2);

    gate.exit_level();
    assert_eq!(gate.depth(), 0, "exit at the root is a no-op");
}

#[test]
fn depth_overflow_fails_closed_and_recovers() {
    let fields = [FieldSelector::new(0, "root.first", true)];
    let mut gate = DecodeGate::new(&fields);

    for _ in 0..=MAX_FIELD_DEPTH {
        gate.enter_level();
    }
    assert_eq!(gate.depth(), MAX_FIELD_DEPTH + 1);
    assert!(!gate.should_decode(0), "unrepresentable depth fails closed");

    for _ in 0..=MAX_FIELD_DEPTH {
        gate.exit_level();
    }
    assert_eq!(gate.depth(), 0);
    assert!(gate.should_decode(0));
}

#[test]
fn selector_accessors_expose_entry_fields() {
    let entry = FieldSelector::new(5, "battery", true);
    assert_eq!(entry.index(), 5);
    assert_eq!(entry.label(), "battery");
    assert!(entry.decode());
    assert!(entry.path().is_root());
}

#[test]
fn field_path_rejects_overlong_input() {
    let too_deep = vec![0_u32; MAX_FIELD_DEPTH + 1];
    assert!(FieldPath::from_indices(&too_deep).is_none());

    let exact = vec![1_u32; MAX_FIELD_DEPTH];
    let path = FieldPath::from_indices(&exact).expect("capacity fits");
    assert_eq!(path.depth(), MAX_FIELD_DEPTH);

    let mut full = path;
    assert!(!full.push(9), "push at capacity is rejected");
}

#[test]
fn popped_paths_compare_equal_to_freshly_built_ones() {
    let mut walked = FieldPath::root();
    walked.push(7);
    walked.push(3);
    walked.pop();

    assert_eq!(walked, FieldPath::from_indices(&[7]).expect("fits"));
}
