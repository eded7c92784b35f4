#![deny(missing_docs)]
#![doc = "Reporting handle, soft-fail recorder, policy, and error types shared by the vet crates."]

pub mod errors;
/// Rendering policy and its loaders.
pub mod policy;
/// Serializable recorder snapshots.
pub mod report;
pub mod reporter;
/// Canonical JSON and YAML helpers.
pub mod serde;

pub use errors::{ErrorInfo, VetError};
pub use policy::Policy;
pub use report::{FailureReport, FailureSite};
pub use reporter::{fail, Recorder, Reporter};
