//! Domain model for QEMU virtual machines listed under a node.

use serde::{Deserialize, Serialize};

/// A virtual machine as returned by the `/nodes/{node}/qemu` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmSummary {
    /// The VM identifier (unique per cluster).
    pub vmid: u32,
    /// Human-readable name.
    pub name: String,
    /// Current status (e.g., "running", "stopped").
    pub status: String,
    /// Uptime in seconds, when running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
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
