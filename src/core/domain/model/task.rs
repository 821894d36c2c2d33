//! Acceptance handle for server-side lifecycle tasks.

use serde::{Deserialize, Serialize};

/// The result of a VM lifecycle request.
///
/// Start, reboot, and shutdown are asynchronous on the server: a 2xx
/// acceptance means the task was enqueued, not that it completed. The
/// UPID identifies the task when the server returned one; completion is
/// never polled here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskHandle {
    /// HTTP status of the acceptance response.
    pub status: u16,
    /// Server-assigned unique process id, when the body carried one.
    pub upid: Option<String>,
}
