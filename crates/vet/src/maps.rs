use std::fmt::Debug;

use vet_cmp::equal;
use vet_core::Reporter;

use crate::capability::{Equals, MapLike};
use crate::{log_diff, same_len};

/// Asserts `a` and `b` hold the same key/value pairs, comparing values structurally.
///
/// The two maps may be different container types over the same key and value.
#[track_caller]
pub fn map_eq<M1, M2>(t: &mut dyn Reporter, a: &M1, b: &M2)
where
    M1: MapLike + Debug,
    M2: MapLike<Key = M1::Key, Value = M1::Value> + Debug,
    M1::Key: Debug,
    M1::Value: PartialEq + Debug,
{
    if !same_len(t, "map", a.len(), b.len()) {
        return;
    }
    for (key, value_a) in a.entries() {
        let Some(value_b) = b.get(key) else {
            logf!(t, "map b is missing key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same keys");
            return;
        };
        if !equal(value_a, value_b) {
            logf!(t, "values differ at key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same values via structural comparison");
            return;
        }
    }
}

/// Asserts `a` and `b` hold the same key/value pairs, comparing values with `eq`.
#[track_caller]
pub fn map_eq_func<M, F>(t: &mut dyn Reporter, a: &M, b: &M, eq: F)
where
    M: MapLike + Debug,
    M::Key: Debug,
    F: Fn(&M::Value, &M::Value) -> bool,
{
    if !same_len(t, "map", a.len(), b.len()) {
        return;
    }
    for (key, value_a) in a.entries() {
        let Some(value_b) = b.get(key) else {
            logf!(t, "map b is missing key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same keys");
            return;
        };
        if !eq(value_a, value_b) {
            logf!(t, "values differ at key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same values via 'eq' function");
            return;
        }
    }
}

/// Asserts `a` and `b` hold the same key/value pairs, comparing values with [`Equals::equals`].
#[track_caller]
pub fn map_equals<M>(t: &mut dyn Reporter, a: &M, b: &M)
where
    M: MapLike + Debug,
    M::Key: Debug,
    M::Value: Equals,
{
    if !same_len(t, "map", a.len(), b.len()) {
        return;
    }
    for (key, value_a) in a.entries() {
        let Some(value_b) = b.get(key) else {
            logf!(t, "map b is missing key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same keys");
            return;
        };
        if !value_b.equals(value_a) {
            logf!(t, "values differ at key {key:?}");
            log_diff(t, a, b);
            fail!(t, ";; expected maps of same values via .equals method");
            return;
        }
    }
}

/// Asserts `m` has exactly `n` entries.
#[track_caller]
pub fn map_len<M: MapLike>(t: &mut dyn Reporter, n: usize, m: &M) {
    let len = m.len();
    if len != n {
        logf!(t, "len(map): {len}, expected: {n}");
        fail!(t, ";; expected map of length {n}");
    }
}

/// Asserts `m` has no entries.
#[track_caller]
pub fn map_empty<M: MapLike>(t: &mut dyn Reporter, m: &M) {
    if !m.is_empty() {
        logf!(t, "len(map): {}", m.len());
        fail!(t, ";; expected map to be empty");
    }
}
