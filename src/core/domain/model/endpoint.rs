//! Endpoint descriptor for a Proxmox VE API server.

use crate::core::domain::error::{ProxmoxResult, ValidationError};
use url::Url;

/// An immutable record of where the Proxmox API lives.
///
/// Composes absolute resource URLs as
/// `{scheme}://{host}:{port}{api_prefix}{resource}` by plain string
/// concatenation. No URL-template expansion is performed: callers compose
/// paths including node names and numeric VM ids themselves.
///
/// # Examples
///
/// ```
/// use comal_proxmox::Endpoint;
///
/// let endpoint = Endpoint::new("pve.example.com", 8006, "/api2/json").unwrap();
/// assert_eq!(
///     endpoint.resolve("/version").unwrap(),
///     "https://pve.example.com:8006/api2/json/version"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    api_prefix: String,
    secure: bool,
}

impl Endpoint {
    /// Creates a validated HTTPS endpoint.
    ///
    /// The host must be non-empty, the port non-zero, and the API prefix
    /// must begin with `/` and not end with `/` (typically `/api2/json`).
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Validation` when any field is malformed.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        api_prefix: impl Into<String>,
    ) -> ProxmoxResult<Self> {
        let host = host.into();
        let api_prefix = api_prefix.into();

        if host.is_empty() {
            return Err(ValidationError::Field {
                field: "host".to_string(),
                message: "Host cannot be empty".to_string(),
            }
            .into());
        }
        if port == 0 {
            return Err(ValidationError::Field {
                field: "port".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            }
            .into());
        }
        if !api_prefix.starts_with('/') {
            return Err(ValidationError::Format(
                "API prefix must begin with '/'".to_string(),
            )
            .into());
        }
        if api_prefix.ends_with('/') {
            return Err(ValidationError::Format(
                "API prefix must not end with '/'".to_string(),
            )
            .into());
        }

        let endpoint = Self {
            host,
            port,
            api_prefix,
            secure: true,
        };

        // A full parse catches anything the field checks above let through
        // (embedded whitespace, stray scheme separators, bad IPv6 forms).
        Url::parse(&endpoint.base_url()).map_err(|e| {
            ValidationError::Format(format!("Invalid endpoint: {}", e))
        })?;

        Ok(endpoint)
    }

    /// Switches between `https` (default) and plain `http`.
    ///
    /// Plain HTTP exists for lab and mock-server use; production Proxmox
    /// managers only speak HTTPS.
    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Returns the host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the TCP port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the API path prefix.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Returns `{scheme}://{host}:{port}` without the API prefix.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    /// Resolves a resource path to an absolute URL.
    ///
    /// The resource must be non-empty and begin with `/`. Node names and
    /// VM ids are inserted verbatim by callers; VM ids render as base-10
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Validation` when the resource is malformed.
    pub fn resolve(&self, resource: &str) -> ProxmoxResult<String> {
        if resource.is_empty() {
            return Err(ValidationError::Field {
                field: "resource".to_string(),
                message: "Resource cannot be empty".to_string(),
            }
            .into());
        }
        if !resource.starts_with('/') {
            return Err(ValidationError::Format(
                "Resource must begin with '/'".to_string(),
            )
            .into());
        }
        Ok(format!("{}{}{}", self.base_url(), self.api_prefix, resource))
    }
}
