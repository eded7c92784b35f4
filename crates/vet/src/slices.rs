use std::fmt::Debug;

use vet_cmp::equal;
use vet_core::Reporter;

use crate::capability::Equals;
use crate::{log_diff, same_slice_len};

/// Asserts `a` and `b` have the same length and every index pair satisfies `eq`.
#[track_caller]
pub fn eq_slice_func<A, F>(t: &mut dyn Reporter, a: &[A], b: &[A], eq: F)
where
    A: Debug,
    F: Fn(&A, &A) -> bool,
{
    if !same_slice_len(t, a, b) {
        return;
    }
    if let Some(idx) = a.iter().zip(b).position(|(x, y)| !eq(x, y)) {
        logf!(t, "first mismatch at index {idx}");
        log_diff(t, a, b);
        fail!(t, ";; expected slice equality via 'eq' function");
    }
}

/// Asserts `a[n].equals(&b[n])` for every index `n`.
#[track_caller]
pub fn equals_slice<E: Equals + Debug>(t: &mut dyn Reporter, a: &[E], b: &[E]) {
    if !same_slice_len(t, a, b) {
        return;
    }
    if let Some(idx) = a.iter().zip(b).position(|(x, y)| !x.equals(y)) {
        logf!(t, "first mismatch at index {idx}");
        log_diff(t, &a[idx], &b[idx]);
        fail!(t, ";; expected slice equality via .equals method");
    }
}

/// Asserts `slice` is empty.
#[track_caller]
pub fn empty_slice<A>(t: &mut dyn Reporter, slice: &[A]) {
    if !slice.is_empty() {
        logf!(t, "len(slice): {}", slice.len());
        fail!(t, ";; expected slice to be empty");
    }
}

/// Asserts `slice` has exactly `n` elements.
#[track_caller]
pub fn len_slice<A>(t: &mut dyn Reporter, n: usize, slice: &[A]) {
    let len = slice.len();
    if len != n {
        logf!(t, "len(slice): {len}, expected: {n}");
        fail!(t, ";; expected slice of length {n}");
    }
}

/// Asserts `item` is in `slice` under the structural comparator.
#[track_caller]
pub fn contains<A>(t: &mut dyn Reporter, slice: &[A], item: &A)
where
    A: PartialEq + Debug,
{
    if !slice.iter().any(|candidate| equal(candidate, item)) {
        logf!(t, "slice is missing {item:?}");
        fail!(t, ";; expected slice to contain missing item via structural comparison");
    }
}

/// Asserts `item` is in `slice` under `==`.
#[track_caller]
pub fn contains_cmp<C>(t: &mut dyn Reporter, slice: &[C], item: &C)
where
    C: PartialEq + Debug,
{
    if !slice.iter().any(|candidate| candidate == item) {
        logf!(t, "slice is missing {item:?}");
        fail!(t, ";; expected slice to contain missing item via == operator");
    }
}

/// Asserts `item` is in `slice`, comparing elements with `eq`.
#[track_caller]
pub fn contains_func<A, F>(t: &mut dyn Reporter, slice: &[A], item: &A, eq: F)
where
    A: Debug,
    F: Fn(&A, &A) -> bool,
{
    if !slice.iter().any(|candidate| eq(candidate, item)) {
        logf!(t, "slice is missing {item:?}");
        fail!(t, ";; expected slice to contain missing item via 'eq' function");
    }
}

/// Asserts `item` is in `slice`, comparing elements with [`Equals::equals`].
#[track_caller]
pub fn contains_equals<E: Equals + Debug>(t: &mut dyn Reporter, slice: &[E], item: &E) {
    if !slice.iter().any(|candidate| candidate.equals(item)) {
        logf!(t, "slice is missing {item:?}");
        fail!(t, ";; expected slice to contain missing item via .equals method");
    }
}
