//! Core library for Playbill application metadata.
//!
//! A host runtime uses this crate to load an application descriptor,
//! resolve it into an immutable [`AppInfo`] record, and install a
//! [`StaticAppInfo`] provider that answers metadata queries for the
//! lifetime of the process. Installation writes the deployment type into
//! the host-owned property store exactly once.

pub mod deploy;
pub mod descriptor;
pub mod error;
pub mod info;

pub use deploy::DeployType;
pub use descriptor::{
    find_descriptor, load_descriptor, load_from_dir, validate_descriptor, Descriptor,
    ValidationIssue, ValidationReport,
};
pub use error::{DescriptorError, PlaybillError};
pub use info::{AppInfo, AppInfoProvider, StaticAppInfo, DEPLOY_TYPE_PROPERTY};

/// Result type alias using PlaybillError.
pub type Result<T> = std::result::Result<T, PlaybillError>;
