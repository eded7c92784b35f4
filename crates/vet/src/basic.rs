use std::error::Error;
use std::fmt::Display;

use vet_core::Reporter;

/// Asserts `a` is `None`.
#[track_caller]
pub fn nil<A>(t: &mut dyn Reporter, a: &Option<A>) {
    if a.is_some() {
        fail!(t, ";; expected to be None; is Some");
    }
}

/// Asserts `a` is `Some`.
#[track_caller]
pub fn not_nil<A>(t: &mut dyn Reporter, a: &Option<A>) {
    if a.is_none() {
        fail!(t, ";; expected to be Some; is None");
    }
}

/// Asserts `condition` is true.
#[track_caller]
pub fn is_true(t: &mut dyn Reporter, condition: bool) {
    if !condition {
        fail!(t, ";; expected condition to be true; is false");
    }
}

/// Asserts `condition` is false.
#[track_caller]
pub fn is_false(t: &mut dyn Reporter, condition: bool) {
    if condition {
        fail!(t, ";; expected condition to be false; is true");
    }
}

/// Asserts `result` holds an error.
#[track_caller]
pub fn error<T, E>(t: &mut dyn Reporter, result: &Result<T, E>) {
    if result.is_ok() {
        fail!(t, ";; expected an error; result is Ok");
    }
}

/// Asserts `result` holds no error, logging the error otherwise.
#[track_caller]
pub fn no_error<T, E: Display>(t: &mut dyn Reporter, result: &Result<T, E>) {
    if let Err(err) = result {
        logf!(t, "error: {err}");
        fail!(t, ";; expected no error");
    }
}

/// Asserts the rendered message of `err` is exactly `msg`.
#[track_caller]
pub fn eq_error<E: Display + ?Sized>(t: &mut dyn Reporter, err: &E, msg: &str) {
    let rendered = err.to_string();
    if rendered != msg {
        logf!(t, "msg: {msg:?}");
        logf!(t, "err: {rendered:?}");
        fail!(t, ";; expected matching error strings");
    }
}

/// Asserts `target` appears somewhere in the `source()` chain of `err`, including `err` itself.
#[track_caller]
pub fn error_is<T>(t: &mut dyn Reporter, err: &(dyn Error + 'static), target: &T)
where
    T: Error + PartialEq + 'static,
{
    if !chain_contains(err, target) {
        logf!(t, "error: {err}");
        logf!(t, "target: {target}");
        fail!(t, ";; expected error chain to contain target");
    }
}

fn chain_contains<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    let mut current = Some(err);
    while let Some(link) = current {
        if link.downcast_ref::<T>() == Some(target) {
            return true;
        }
        current = link.source();
    }
    false
}
