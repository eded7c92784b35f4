//! The reporting handle contract and the soft-fail recorder.

use std::fmt;
use std::panic::Location;

use tracing::{debug, warn};

use crate::errors::{ErrorInfo, VetError};
use crate::policy::Policy;
use crate::report::{FailureReport, FailureSite};

/// Capability every assertion reports through.
///
/// Implementations must never unwind from [`Reporter::fail`]: control returns
/// to the assertion, and then to the test body, so later assertions still run.
pub trait Reporter {
    /// Writes one diagnostic line.
    fn log(&mut self, args: fmt::Arguments<'_>);

    /// Marks the enclosing test as failed without aborting it.
    fn fail(&mut self);

    /// Records the call site of the assertion about to report.
    fn helper(&mut self, _caller: &'static Location<'static>) {}

    /// Rendering policy for diffs attached to failures.
    fn policy(&self) -> Policy {
        Policy::default()
    }
}

/// Logs a trimmed failure message through `t` and marks it failed.
///
/// This is the single funnel every assertion uses; it never returns an error
/// and never stops the caller.
#[track_caller]
pub fn fail(t: &mut dyn Reporter, args: fmt::Arguments<'_>) {
    t.helper(Location::caller());
    let message = args.to_string();
    t.log(format_args!("{}\n", message.trim()));
    t.fail();
}

/// Soft-fail reporter backed by a failed flag and an append-only log.
#[derive(Debug, Default)]
pub struct Recorder {
    name: Option<String>,
    policy: Policy,
    lines: Vec<String>,
    failures: Vec<FailureSite>,
    caller: Option<&'static Location<'static>>,
}

impl Recorder {
    /// Creates an anonymous recorder with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder labelled with the test it belongs to.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Replaces the policy used for diffs and echo.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether any assertion has failed so far.
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of failures recorded so far.
    pub fn failures(&self) -> usize {
        self.failures.len()
    }

    /// Every logged line, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns whether any logged line contains `needle`.
    pub fn logged(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Forgets everything recorded so far, keeping name and policy.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.failures.clear();
        self.caller = None;
    }

    /// Snapshots the recorder state.
    pub fn report(&self) -> FailureReport {
        FailureReport {
            name: self.name.clone(),
            failed: self.failed(),
            lines: self.lines.clone(),
            failures: self.failures.clone(),
        }
    }

    /// Consumes the recorder, turning accumulated failures into an error.
    pub fn finish(self) -> Result<(), VetError> {
        if !self.failed() {
            return Ok(());
        }
        let report = self.report();
        let mut info = ErrorInfo::new(
            "assertions-failed",
            format!("{} assertion(s) failed", report.failures.len()),
        )
        .with_context("failures", report.failures.len().to_string())
        .with_context("log", report.transcript());
        if let Some(name) = &report.name {
            info = info.with_context("test", name.clone());
        }
        if let Some(location) = report.failures.first().and_then(|site| site.location.clone()) {
            info = info.with_context("first_failure", location);
        }
        Err(VetError::Assertion(info))
    }
}

impl Reporter for Recorder {
    fn log(&mut self, args: fmt::Arguments<'_>) {
        let line = args.to_string();
        if self.policy.echo {
            debug!(target: "vet", recorder = self.name.as_deref().unwrap_or(""), "{}", line.trim_end());
        }
        self.lines.push(line);
    }

    fn fail(&mut self) {
        let site = FailureSite {
            location: self.caller.take().map(|caller| caller.to_string()),
            message: self.lines.last().map(|line| line.trim_end().to_string()),
        };
        if self.policy.echo {
            warn!(
                target: "vet",
                recorder = self.name.as_deref().unwrap_or(""),
                location = site.location.as_deref().unwrap_or("unknown"),
                "assertion failed"
            );
        }
        self.failures.push(site);
    }

    fn helper(&mut self, caller: &'static Location<'static>) {
        self.caller = Some(caller);
    }

    fn policy(&self) -> Policy {
        self.policy
    }
}
