use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VetError};
use crate::serde::{from_json_slice, from_yaml_slice};

/// Rendering and echo policy consulted by reporters and the structural diff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Policy {
    /// Unchanged lines shown around each changed hunk of a structural diff.
    #[serde(default = "Policy::default_diff_context")]
    pub diff_context: usize,
    /// Upper bound on rendered diff lines; `0` disables truncation.
    #[serde(default = "Policy::default_max_diff_lines")]
    pub max_diff_lines: usize,
    /// Mirror recorded lines and failures into `tracing` events.
    #[serde(default = "Policy::default_echo")]
    pub echo: bool,
}

impl Policy {
    const fn default_diff_context() -> usize {
        3
    }

    const fn default_max_diff_lines() -> usize {
        200
    }

    const fn default_echo() -> bool {
        true
    }

    /// Loads a policy from a YAML (`.yaml`/`.yml`) or JSON file and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            VetError::Config(
                ErrorInfo::new("policy_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let policy: Policy = if is_yaml {
            from_yaml_slice(&bytes)?
        } else {
            from_json_slice(&bytes)?
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects truncation limits too small to show a single hunk with its context.
    pub fn validate(&self) -> Result<(), VetError> {
        let minimum = self.diff_context.saturating_mul(2).saturating_add(1);
        if self.max_diff_lines != 0 && self.max_diff_lines < minimum {
            return Err(VetError::Config(
                ErrorInfo::new(
                    "max-diff-lines",
                    format!(
                        "max_diff_lines {} cannot fit a hunk of {} lines",
                        self.max_diff_lines, minimum
                    ),
                )
                .with_hint("raise max_diff_lines or set it to 0 for no limit"),
            ));
        }
        Ok(())
    }

    /// Returns a copy with truncation disabled.
    pub fn unlimited(mut self) -> Self {
        self.max_diff_lines = 0;
        self
    }

    /// Returns a copy with tracing echo toggled.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            diff_context: Self::default_diff_context(),
            max_diff_lines: Self::default_max_diff_lines(),
            echo: Self::default_echo(),
        }
    }
}
