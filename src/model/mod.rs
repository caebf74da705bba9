//! Records returned by the Eclipse Foundation account service.
//!
//! These are read-only copies of remote state; the account service owns the
//! shape, so deserialization is tolerant of fields we do not model.

use serde::{Deserialize, Serialize};

/// An Eclipse Foundation user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EclipseUser {
    pub uid: String,
    pub name: String,
    pub mail: String,
    #[serde(default)]
    pub eca: EcaStatus,
    #[serde(default)]
    pub is_committer: bool,
}

/// Contributor agreement state for an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcaStatus {
    #[serde(default)]
    pub signed: bool,
    #[serde(default)]
    pub can_contribute_spec_project: bool,
}
