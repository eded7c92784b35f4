use serde::{Deserialize, Serialize};

use crate::errors::VetError;
use crate::serde::to_canonical_json_bytes;

/// Where and why a single assertion marked its test failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureSite {
    /// `file:line:column` of the assertion call, when the reporter was told.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Last line logged before the failure was marked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Serializable snapshot of everything a recorder has seen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureReport {
    /// Optional name of the test the recorder belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether any assertion failed.
    pub failed: bool,
    /// Every logged diagnostic line, in order.
    pub lines: Vec<String>,
    /// One entry per failure, in order.
    pub failures: Vec<FailureSite>,
}

impl FailureReport {
    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, VetError> {
        to_canonical_json_bytes(self)
    }

    /// Renders the log as a single block, one diagnostic per line.
    pub fn transcript(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
