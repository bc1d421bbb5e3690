//! Site Errors

use thiserror::Error;

/// Failures surfaced while loading site resources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// Transport failure or non-success HTTP status
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// Body was fetched but is not the expected JSON shape
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Configuration parsed but breaks a structural rule
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
