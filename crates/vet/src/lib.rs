#![deny(missing_docs)]
#![doc = "Soft-fail assertions for test suites. Every assertion reports through a borrowed [`Reporter`], logs context, marks the test failed, and returns so later assertions still run."]

use std::fmt::Debug;

use vet_cmp::debug_diff;

macro_rules! logf {
    ($t:expr, $($arg:tt)*) => {
        $t.log(format_args!($($arg)*))
    };
}

macro_rules! fail {
    ($t:expr, $($arg:tt)*) => {
        ::vet_core::fail($t, format_args!($($arg)*))
    };
}

/// Nil, boolean, and error assertions.
pub mod basic;
/// Capability traits consumed by the assertion families.
pub mod capability;
/// Equality assertions over values, predicates, and JSON text.
pub mod equality;
/// Keyed-container assertions.
pub mod maps;
/// Numeric validity guard and the `Number` capability.
pub mod numeric;
/// Ordering and tolerance assertions.
pub mod ordering;
/// Slice length, element, and containment assertions.
pub mod slices;

pub use basic::{eq_error, error, error_is, is_false, is_true, nil, no_error, not_nil};
pub use capability::{Equals, LessThan, MapLike};
pub use equality::{
    eq, eq_cmp, eq_func, eq_json, equals, lesser, not_eq, not_eq_func, not_equals,
};
pub use maps::{map_empty, map_eq, map_eq_func, map_equals, map_len};
pub use numeric::{numeric, Number};
pub use ordering::{greater, greater_eq, in_delta, in_delta_slice, less, less_eq};
pub use slices::{
    contains, contains_cmp, contains_equals, contains_func, empty_slice, eq_slice_func,
    equals_slice, len_slice,
};
pub use vet_cmp::{diff, equal, BANNER};
pub use vet_core::{FailureReport, Policy, Recorder, Reporter, VetError};

/// Logs the structural diff of `a` and `b` under the reporter's policy, if any.
fn log_diff<A, B>(t: &mut dyn Reporter, a: &A, b: &B)
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    let policy = t.policy();
    let rendered = debug_diff(a, b, &policy);
    if !rendered.is_empty() {
        logf!(t, "{rendered}");
    }
}

/// Reports a size mismatch between two collections of `kind`; returns whether sizes agree.
#[track_caller]
fn same_len(t: &mut dyn Reporter, kind: &str, len_a: usize, len_b: usize) -> bool {
    if len_a == len_b {
        return true;
    }
    logf!(t, "len({kind} a): {len_a}");
    logf!(t, "len({kind} b): {len_b}");
    fail!(t, ";; expected {kind}s of same length");
    false
}

/// Like [`same_len`] for slices, logging the diff of both slices after the lengths.
#[track_caller]
fn same_slice_len<A: Debug>(t: &mut dyn Reporter, a: &[A], b: &[A]) -> bool {
    if a.len() == b.len() {
        return true;
    }
    logf!(t, "len(slice a): {}", a.len());
    logf!(t, "len(slice b): {}", b.len());
    log_diff(t, a, b);
    fail!(t, ";; expected slices of same length");
    false
}
