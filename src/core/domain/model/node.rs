//! Domain model for node list items from the `/nodes` endpoint.

use serde::{Deserialize, Serialize};

/// A node in the Proxmox cluster, as returned by `/nodes`.
///
/// The list keeps the server's ordering. Offline nodes omit most
/// resource fields; uptime defaults to zero for them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeSummary {
    /// The node name (e.g., "pve1").
    pub node: String,
    /// Current node status (e.g., "online", "offline", "unknown").
    pub status: String,
    /// System uptime in seconds.
    #[serde(default)]
    pub uptime: u64,
    /// CPU usage fraction (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
}
