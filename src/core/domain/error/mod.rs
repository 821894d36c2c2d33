use thiserror::Error;

/// The main error type for Proxmox VE operations.
///
/// Every failure the crate can surface maps to exactly one variant, so
/// callers can report or branch on the kind without string matching.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// Ticket acquisition failed or the credential shape was invalid.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// DNS, TCP, TLS, or timeout failure before an HTTP status was seen.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response was received but its status is not 2xx.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON or lacked expected fields.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The API's own envelope reported `success` as falsy.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A descriptor or resource path failed shape validation.
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

/// Specialized error type for validation failures.
///
/// Provides context about why a validation failed, including
/// field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A validation failure for a specific field.
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Format/syntax validation failures.
    #[error("Format error: {0}")]
    Format(String),

    /// Violations of domain constraints.
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
