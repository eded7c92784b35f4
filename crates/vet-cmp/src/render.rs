use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub(crate) const UNPRINTABLE: &str = "<unprintable>";

/// Formats `value` with its `Debug` impl, returning `None` if formatting faults.
pub(crate) fn render<T: Debug + ?Sized>(value: &T, pretty: bool) -> Option<String> {
    catch_unwind(AssertUnwindSafe(|| {
        if pretty {
            format!("{value:#?}")
        } else {
            format!("{value:?}")
        }
    }))
    .ok()
}
