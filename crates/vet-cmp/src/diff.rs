use std::fmt::Debug;
use std::fmt::Write as _;
use std::panic::{catch_unwind, AssertUnwindSafe};

use similar::{ChangeTag, TextDiff};
use tracing::debug;
use vet_core::Policy;

use crate::equal::equal;
use crate::render::{render, UNPRINTABLE};

/// First line of every non-empty diff.
pub const BANNER: &str = "difference!";

/// Renders a structural diff of `a` and `b` using the default [`Policy`].
pub fn diff<A, B>(a: &A, b: &B) -> String
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    diff_with(a, b, &Policy::default())
}

/// Renders a structural diff of `a` and `b`.
///
/// Values that [`equal`] accepts yield an empty string even when their
/// renderings differ, as with `0.0` and `-0.0`. Otherwise this is
/// [`debug_diff`].
pub fn diff_with<A, B>(a: &A, b: &B, policy: &Policy) -> String
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    if equal(a, b) {
        return String::new();
    }
    debug_diff(a, b, policy)
}

/// Diffs the `Debug` renderings of `a` and `b` without consulting equality.
///
/// Both values are pretty-printed, which places every field and element on
/// its own line, and the renderings are diffed line by line. Identical
/// renderings yield an empty string. If either rendering faults the result is
/// the banner followed by compact renderings of both values.
pub fn debug_diff<A, B>(a: &A, b: &B, policy: &Policy) -> String
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    let (Some(left), Some(right)) = (render(a, true), render(b, true)) else {
        debug!(target: "vet::cmp", "debug rendering faulted, dumping raw values");
        return dump(a, b);
    };
    if left == right {
        return String::new();
    }
    match catch_unwind(AssertUnwindSafe(|| line_diff(&left, &right, policy))) {
        Ok(body) => format!("{BANNER}\n{body}"),
        Err(_) => dump(a, b),
    }
}

fn dump<A, B>(a: &A, b: &B) -> String
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    let left = render(a, false).unwrap_or_else(|| UNPRINTABLE.to_string());
    let right = render(b, false).unwrap_or_else(|| UNPRINTABLE.to_string());
    format!("{BANNER}\na: {left}\nb: {right}\n")
}

fn line_diff(left: &str, right: &str, policy: &Policy) -> String {
    let text = TextDiff::from_lines(left, right);
    let mut unified = text.unified_diff();
    unified.context_radius(policy.diff_context);

    let mut out = String::from("--- a\n+++ b\n");
    let mut emitted = 0usize;
    for hunk in unified.iter_hunks() {
        let _ = writeln!(out, "{}", hunk.header());
        for change in hunk.iter_changes() {
            if policy.max_diff_lines != 0 && emitted >= policy.max_diff_lines {
                let _ = writeln!(out, "... truncated after {emitted} lines");
                return out;
            }
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            out.push(sign);
            out.push_str(change.value());
            if change.missing_newline() {
                out.push('\n');
            }
            emitted += 1;
        }
    }
    out
}
