//! Domain model for the `/version` endpoint.

use serde::{Deserialize, Serialize};

/// API version information for a Proxmox manager.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VersionInfo {
    /// Release series (e.g., "8.1").
    pub release: String,
    /// Full version string (e.g., "8.1.4").
    pub version: String,
    /// Repository build id, when the server reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repoid: Option<String>,
}
