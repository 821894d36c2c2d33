use crate::core::domain::error::ValidationError;
use std::time::SystemTime;

/// A Proxmox authentication ticket.
///
/// The value is opaque to the client; the server defines its format and
/// expiry (typically around two hours). Expiry is not tracked here, only
/// the acquisition time.
#[derive(Debug, Clone)]
pub struct Ticket {
    value: String,
    acquired_at: SystemTime,
}

impl Ticket {
    /// Wraps a server-issued ticket value, stamping the acquisition time.
    pub(crate) fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Field {
                field: "ticket".to_string(),
                message: "Ticket cannot be empty".to_string(),
            });
        }
        Ok(Self {
            value,
            acquired_at: SystemTime::now(),
        })
    }

    /// Returns the ticket value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the time the ticket was acquired.
    #[must_use]
    pub fn acquired_at(&self) -> SystemTime {
        self.acquired_at
    }

    /// Formats the ticket as a `Cookie` header value.
    #[must_use]
    pub fn as_cookie_header(&self) -> String {
        format!("PVEAuthCookie={}", self.value)
    }
}
