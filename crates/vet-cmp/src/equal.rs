use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::debug;

use crate::render::render;

/// Reports whether `a` and `b` are structurally equal.
///
/// The primary strategy is the value's own `PartialEq`, which for derived
/// impls walks every field and for std containers compares element-wise. It
/// runs inside a fault boundary: if it panics, the full `Debug` renderings of
/// both values are compared instead. A fault in that fallback as well yields
/// `false`. No panic escapes this function.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    match catch_unwind(AssertUnwindSafe(|| a.eq(b))) {
        Ok(result) => result,
        Err(_) => {
            debug!(
                target: "vet::cmp",
                "structural equality faulted, comparing debug renderings"
            );
            rendered_equal(a, b)
        }
    }
}

fn rendered_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    match (render(a, false), render(b, false)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
