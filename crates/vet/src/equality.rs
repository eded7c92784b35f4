use std::fmt::Debug;

use vet_cmp::{equal, json_diff, json_equal, parse_json};
use vet_core::serde::canonicalize;
use vet_core::Reporter;

use crate::capability::{Equals, LessThan};
use crate::log_diff;

/// Asserts `a` and `b` are equal under the structural comparator.
#[track_caller]
pub fn eq<A>(t: &mut dyn Reporter, a: &A, b: &A)
where
    A: PartialEq + Debug + ?Sized,
{
    if !equal(a, b) {
        log_diff(t, a, b);
        fail!(t, ";; expected equality via structural comparison");
    }
}

/// Asserts `a == b` using the type's equality operator directly.
#[track_caller]
pub fn eq_cmp<C>(t: &mut dyn Reporter, a: &C, b: &C)
where
    C: PartialEq + Debug + ?Sized,
{
    if a != b {
        log_diff(t, a, b);
        fail!(t, ";; expected equality via ==");
    }
}

/// Asserts `a` and `b` are equal according to `eq`.
#[track_caller]
pub fn eq_func<A, F>(t: &mut dyn Reporter, a: &A, b: &A, eq: F)
where
    A: Debug + ?Sized,
    F: Fn(&A, &A) -> bool,
{
    if !eq(a, b) {
        log_diff(t, a, b);
        fail!(t, ";; expected equality via 'eq' function");
    }
}

/// Asserts `a != b`.
#[track_caller]
pub fn not_eq<C>(t: &mut dyn Reporter, a: &C, b: &C)
where
    C: PartialEq + ?Sized,
{
    if a == b {
        fail!(t, ";; expected inequality via !=");
    }
}

/// Asserts `a` and `b` are not equal according to `eq`.
#[track_caller]
pub fn not_eq_func<A, F>(t: &mut dyn Reporter, a: &A, b: &A, eq: F)
where
    A: ?Sized,
    F: Fn(&A, &A) -> bool,
{
    if eq(a, b) {
        fail!(t, ";; expected inequality via 'eq' function");
    }
}

/// Asserts `a` and `b` hold equivalent JSON documents.
///
/// Both arguments must parse; a parse failure is reported on its own and no
/// comparison happens. Numbers compare by value and key order is ignored.
#[track_caller]
pub fn eq_json(t: &mut dyn Reporter, a: &str, b: &str) {
    let left = match parse_json(a) {
        Ok(value) => value,
        Err(err) => {
            fail!(t, ";; expected first argument to be valid json: {}", err.info().message);
            return;
        }
    };
    let right = match parse_json(b) {
        Ok(value) => value,
        Err(err) => {
            fail!(t, ";; expected second argument to be valid json: {}", err.info().message);
            return;
        }
    };
    if !json_equal(&left, &right) {
        for difference in json_diff(&left, &right) {
            logf!(t, "{difference}");
        }
        logf!(t, "a: {}", canonicalize(left));
        logf!(t, "b: {}", canonicalize(right));
        fail!(t, ";; expected equality via json decoding");
    }
}

/// Asserts `a.equals(b)`.
#[track_caller]
pub fn equals<E: Equals + Debug>(t: &mut dyn Reporter, a: &E, b: &E) {
    if !a.equals(b) {
        log_diff(t, a, b);
        fail!(t, ";; expected equality via .equals method");
    }
}

/// Asserts `!a.equals(b)`.
#[track_caller]
pub fn not_equals<E: Equals + Debug>(t: &mut dyn Reporter, a: &E, b: &E) {
    if a.equals(b) {
        log_diff(t, a, b);
        fail!(t, ";; expected inequality via .equals method");
    }
}

/// Asserts `a.less(b)`.
#[track_caller]
pub fn lesser<L: LessThan + Debug>(t: &mut dyn Reporter, a: &L, b: &L) {
    if !a.less(b) {
        log_diff(t, a, b);
        fail!(t, ";; expected to be less via .less method");
    }
}
