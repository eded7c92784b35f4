use std::fmt::Debug;

use vet_core::Reporter;

use crate::numeric::{numeric, Number};
use crate::same_len;

/// Asserts `a < b`.
#[track_caller]
pub fn less<O: PartialOrd + Debug + ?Sized>(t: &mut dyn Reporter, a: &O, b: &O) {
    if !(a < b) {
        fail!(t, ";; expected {a:?} < {b:?}");
    }
}

/// Asserts `a <= b`.
#[track_caller]
pub fn less_eq<O: PartialOrd + Debug + ?Sized>(t: &mut dyn Reporter, a: &O, b: &O) {
    if !(a <= b) {
        fail!(t, ";; expected {a:?} <= {b:?}");
    }
}

/// Asserts `a > b`.
#[track_caller]
pub fn greater<O: PartialOrd + Debug + ?Sized>(t: &mut dyn Reporter, a: &O, b: &O) {
    if !(a > b) {
        fail!(t, ";; expected {a:?} > {b:?}");
    }
}

/// Asserts `a >= b`.
#[track_caller]
pub fn greater_eq<O: PartialOrd + Debug + ?Sized>(t: &mut dyn Reporter, a: &O, b: &O) {
    if !(a >= b) {
        fail!(t, ";; expected {a:?} >= {b:?}");
    }
}

/// Asserts `a` and `b` are within `delta` of each other, bounds inclusive.
///
/// `delta` must be finite and strictly positive and both operands finite;
/// each violation is reported with its own message before any comparison.
#[track_caller]
pub fn in_delta<N: Number>(t: &mut dyn Reporter, a: N, b: N, delta: N) {
    if !numeric(delta) {
        fail!(t, ";; expected delta to be numeric; got {delta:?}");
        return;
    }
    if delta <= N::zero() {
        fail!(t, ";; expected delta to be positive; got {delta:?}");
        return;
    }
    if !numeric(a) {
        fail!(t, ";; expected first argument to be numeric; got {a:?}");
        return;
    }
    if !numeric(b) {
        fail!(t, ";; expected second argument to be numeric; got {b:?}");
        return;
    }
    if !a.within(b, delta) {
        fail!(t, ";; expected {a:?} and {b:?} to be within {delta:?}");
    }
}

/// Asserts `a` and `b` have the same length and each pair is within `delta`.
#[track_caller]
pub fn in_delta_slice<N: Number>(t: &mut dyn Reporter, a: &[N], b: &[N], delta: N) {
    if !same_len(t, "slice", a.len(), b.len()) {
        return;
    }
    for (x, y) in a.iter().zip(b) {
        in_delta(t, *x, *y, delta);
    }
}
