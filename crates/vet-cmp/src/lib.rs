#![deny(missing_docs)]
#![doc = "Structural comparator for the vet assertion toolkit: equality, diffs, and JSON normalization."]

/// Line-oriented structural diff over `Debug` renderings.
pub mod diff;
/// Two-tier structural equality.
pub mod equal;
/// JSON parsing and numeric-tolerant tree comparison.
pub mod json;
mod render;

pub use diff::{debug_diff, diff, diff_with, BANNER};
pub use equal::equal;
pub use json::{json_diff, json_equal, parse_json, JsonPathDiff};
