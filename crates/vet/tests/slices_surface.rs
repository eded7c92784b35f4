mod common;

use std::cell::{Cell, RefCell};

use common::{last_line, quiet, Release};
use vet::{
    contains, contains_cmp, contains_equals, contains_func, empty_slice, eq_slice_func,
    equals_slice, len_slice, VetError, BANNER,
};

#[test]
fn reflexive_predicate_passes() -> Result<(), VetError> {
    let mut rec = quiet();
    let items = vec![3, 1, 4, 1, 5];
    eq_slice_func(&mut rec, &items, &items, |a, b| a == b);
    eq_slice_func::<u8, _>(&mut rec, &[], &[], |_, _| false);
    rec.finish()
}

#[test]
fn length_mismatch_short_circuits() {
    let mut rec = quiet();
    let calls = Cell::new(0);
    eq_slice_func(&mut rec, &[1, 2, 3], &[1, 2], |a, b| {
        calls.set(calls.get() + 1);
        a == b
    });
    assert_eq!(calls.get(), 0);
    assert!(rec.logged("len(slice a): 3"));
    assert!(rec.logged("len(slice b): 2"));
    assert_eq!(last_line(&rec), ";; expected slices of same length\n");
    assert!(!rec.logged("via 'eq' function"));
}

#[test]
fn length_mismatch_logs_lengths_before_diff() {
    let mut rec = quiet();
    equals_slice(
        &mut rec,
        &[Release::new(1, 0, "a")],
        &[Release::new(1, 0, "a"), Release::new(2, 0, "b")],
    );
    let lines = rec.lines();
    assert_eq!(lines.len(), 4, "{lines:?}");
    assert!(lines[0].starts_with("len(slice a): 1"));
    assert!(lines[1].starts_with("len(slice b): 2"));
    assert!(lines[2].starts_with(BANNER));
    assert_eq!(lines[3], ";; expected slices of same length\n");
}

#[test]
fn element_mismatch_is_distinct() {
    let mut rec = quiet();
    eq_slice_func(&mut rec, &[1, 2, 3], &[1, 9, 3], |a, b| a == b);
    assert!(rec.logged("first mismatch at index 1"));
    assert_eq!(last_line(&rec), ";; expected slice equality via 'eq' function\n");
    assert!(!rec.logged("same length"));
}

#[test]
fn equals_slice_uses_capability() {
    let mut rec = quiet();
    let a = [Release::new(1, 0, "x"), Release::new(2, 1, "y")];
    let b = [Release::new(1, 0, "p"), Release::new(2, 1, "q")];
    equals_slice(&mut rec, &a, &b);
    assert!(!rec.failed());

    equals_slice(&mut rec, &a, &b[..1]);
    assert_eq!(last_line(&rec), ";; expected slices of same length\n");

    let c = [Release::new(1, 0, "p"), Release::new(2, 2, "q")];
    equals_slice(&mut rec, &a, &c);
    assert_eq!(last_line(&rec), ";; expected slice equality via .equals method\n");
    assert_eq!(rec.failures(), 2);
}

#[test]
fn length_assertions() {
    let mut rec = quiet();
    empty_slice::<u8>(&mut rec, &[]);
    len_slice(&mut rec, 3, &["a", "b", "c"]);
    assert!(!rec.failed());

    empty_slice(&mut rec, &[0]);
    assert!(rec.logged("len(slice): 1"));
    assert_eq!(last_line(&rec), ";; expected slice to be empty\n");

    len_slice(&mut rec, 2, &[1, 2, 3]);
    assert!(rec.logged("len(slice): 3, expected: 2"));
    assert_eq!(last_line(&rec), ";; expected slice of length 2\n");
}

#[test]
fn containment_by_operator() {
    let mut rec = quiet();
    contains_cmp(&mut rec, &[1, 2, 3], &2);
    assert!(!rec.failed());
    contains_cmp(&mut rec, &[1, 2, 3], &4);
    assert!(rec.logged("slice is missing 4"));
    assert_eq!(last_line(&rec), ";; expected slice to contain missing item via == operator\n");
}

#[test]
fn containment_variants() {
    let mut rec = quiet();
    let words = vec!["alpha".to_string(), "Beta".to_string()];
    contains(&mut rec, &words, &"alpha".to_string());
    contains_func(&mut rec, &words, &"beta".to_string(), |a, b| {
        a.eq_ignore_ascii_case(b)
    });
    contains_equals(
        &mut rec,
        &[Release::new(3, 1, "a")],
        &Release::new(3, 1, "other"),
    );
    assert!(!rec.failed());

    contains(&mut rec, &words, &"gamma".to_string());
    assert_eq!(
        last_line(&rec),
        ";; expected slice to contain missing item via structural comparison\n"
    );
    contains_func(&mut rec, &words, &"delta".to_string(), |a, b| a == b);
    assert_eq!(last_line(&rec), ";; expected slice to contain missing item via 'eq' function\n");
    contains_equals(&mut rec, &[Release::new(3, 1, "a")], &Release::new(3, 2, "a"));
    assert_eq!(last_line(&rec), ";; expected slice to contain missing item via .equals method\n");
}

#[test]
fn containment_stops_at_first_match() {
    let mut rec = quiet();
    let seen = RefCell::new(Vec::new());
    contains_func(&mut rec, &[1, 2, 3, 2], &2, |a, b| {
        seen.borrow_mut().push(*a);
        a == b
    });
    assert_eq!(seen.into_inner(), vec![1, 2]);
}
