use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use vet_core::{ErrorInfo, VetError};

const UNDEFINED: &str = "undefined";

/// A single path-level difference between two JSON trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPathDiff {
    /// JSON path of the difference, e.g. `$.body.items[0]`.
    pub path: String,
    /// Left value rendered as JSON, or `undefined` when absent.
    pub left: String,
    /// Right value rendered as JSON, or `undefined` when absent.
    pub right: String,
}

impl Display for JsonPathDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} != {}", self.path, self.left, self.right)
    }
}

/// Parses `input` into a generic JSON tree.
pub fn parse_json(input: &str) -> Result<Value, VetError> {
    serde_json::from_str(input).map_err(|err| {
        VetError::Serde(
            ErrorInfo::new("json_parse", err.to_string())
                .with_context("line", err.line().to_string())
                .with_context("column", err.column().to_string()),
        )
    })
}

/// Permissive deep equality over JSON trees.
///
/// Numbers compare by value regardless of representation, so `1` and `1.0`
/// are equal. Object key order is irrelevant.
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| json_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(p), Some(q)) = (x.as_i64(), y.as_i64()) {
        return p == q;
    }
    if let (Some(p), Some(q)) = (x.as_u64(), y.as_u64()) {
        return p == q;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(p), Some(q)) => p == q,
        _ => false,
    }
}

/// Lists every path at which `a` and `b` differ under [`json_equal`] rules.
pub fn json_diff(a: &Value, b: &Value) -> Vec<JsonPathDiff> {
    let mut diffs = Vec::new();
    walk(a, b, "$".to_string(), &mut diffs);
    diffs
}

fn walk(a: &Value, b: &Value, path: String, diffs: &mut Vec<JsonPathDiff>) {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            for (key, x) in left {
                let child = format!("{path}.{key}");
                match right.get(key) {
                    Some(y) => walk(x, y, child, diffs),
                    None => diffs.push(JsonPathDiff {
                        path: child,
                        left: x.to_string(),
                        right: UNDEFINED.to_string(),
                    }),
                }
            }
            for (key, y) in right {
                if !left.contains_key(key) {
                    diffs.push(JsonPathDiff {
                        path: format!("{path}.{key}"),
                        left: UNDEFINED.to_string(),
                        right: y.to_string(),
                    });
                }
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            for idx in 0..left.len().max(right.len()) {
                let child = format!("{path}[{idx}]");
                match (left.get(idx), right.get(idx)) {
                    (Some(x), Some(y)) => walk(x, y, child, diffs),
                    (x, y) => diffs.push(JsonPathDiff {
                        path: child,
                        left: x.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string()),
                        right: y.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string()),
                    }),
                }
            }
        }
        _ => {
            if !json_equal(a, b) {
                diffs.push(JsonPathDiff {
                    path,
                    left: a.to_string(),
                    right: b.to_string(),
                });
            }
        }
    }
}
