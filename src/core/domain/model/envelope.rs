//! The PVE response envelope and the shared decode policy.
//!
//! Every API response wraps its payload in a JSON object with a `data`
//! field; error reports add `success`, `status`, and `message`. Read
//! endpoints usually omit `success` entirely, so the presence of `data`
//! is what marks success there.

use crate::core::domain::error::{ProxmoxError, ProxmoxResult};
use crate::core::domain::model::task::TaskHandle;
use crate::core::infrastructure::session::RawResponse;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    data: Option<T>,
    // The API reports `success` as a bool or as 0/1 depending on the
    // endpoint, so it is kept as a raw value until checked.
    success: Option<Value>,
    status: Option<u16>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// Converts a present-and-falsy `success` field into an `Api` error.
    fn check_success(&self) -> ProxmoxResult<()> {
        let falsy = match &self.success {
            Some(Value::Bool(b)) => !b,
            Some(Value::Number(n)) => n.as_i64() == Some(0),
            Some(Value::Null) => true,
            _ => false,
        };
        if falsy {
            return Err(ProxmoxError::Api {
                status: self.status.unwrap_or(0),
                message: self.message.clone().unwrap_or_default(),
            });
        }
        Ok(())
    }
}

/// Decodes a read response: 2xx, valid JSON, truthy envelope, `data`
/// present.
pub(crate) fn decode_data<T: DeserializeOwned>(raw: &RawResponse) -> ProxmoxResult<T> {
    if !raw.status.is_success() {
        return Err(ProxmoxError::Http {
            status: raw.status.as_u16(),
            body: raw.body.clone(),
        });
    }
    let envelope: Envelope<T> = serde_json::from_str(&raw.body)
        .map_err(|e| ProxmoxError::Decode(format!("Invalid JSON response: {}", e)))?;
    envelope.check_success()?;
    envelope
        .data
        .ok_or_else(|| ProxmoxError::Decode("Response lacks a 'data' field".to_string()))
}

/// Decodes a lifecycle acceptance response into a task handle.
///
/// A 2xx status means the task was enqueued, not completed. The UPID is
/// only available when the body is JSON with a `data` field; anything
/// else still counts as acceptance.
pub(crate) fn decode_task(raw: &RawResponse) -> ProxmoxResult<TaskHandle> {
    if !raw.status.is_success() {
        return Err(ProxmoxError::Http {
            status: raw.status.as_u16(),
            body: raw.body.clone(),
        });
    }
    let upid = match serde_json::from_str::<Envelope<String>>(&raw.body) {
        Ok(envelope) => {
            envelope.check_success()?;
            envelope.data
        }
        Err(_) => None,
    };
    Ok(TaskHandle {
        status: raw.status.as_u16(),
        upid,
    })
}
