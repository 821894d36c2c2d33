//! Tagged credential for the two Proxmox authentication schemes.

use crate::core::domain::error::{ProxmoxError, ProxmoxResult};
use std::fmt;

/// A credential for authenticating against a Proxmox server.
///
/// Exactly one of two mutually exclusive variants:
///
/// - *Password*: exchanged for a short-lived ticket during session
///   construction, presented afterwards as the `PVEAuthCookie` cookie.
/// - *Token*: a long-lived API token of the form
///   `user@realm!name=secret`, presented on every request in an
///   `Authorization` header. No login round-trip is needed.
///
/// Both constructors validate that every field is non-empty; the variant
/// is explicit rather than inferred from which fields happen to be set.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Username, realm, and password for ticket-based authentication.
    Password {
        username: String,
        realm: String,
        password: String,
    },
    /// Username, realm, token name, and token secret for header-based
    /// authentication.
    Token {
        username: String,
        realm: String,
        token_name: String,
        token_secret: String,
    },
}

impl Credential {
    /// Creates a password credential.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Authentication` when any field is empty.
    pub fn password(
        username: impl Into<String>,
        realm: impl Into<String>,
        password: impl Into<String>,
    ) -> ProxmoxResult<Self> {
        let credential = Self::Password {
            username: username.into(),
            realm: realm.into(),
            password: password.into(),
        };
        credential.validate()?;
        Ok(credential)
    }

    /// Creates an API token credential.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Authentication` when any field is empty.
    pub fn token(
        username: impl Into<String>,
        realm: impl Into<String>,
        token_name: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> ProxmoxResult<Self> {
        let credential = Self::Token {
            username: username.into(),
            realm: realm.into(),
            token_name: token_name.into(),
            token_secret: token_secret.into(),
        };
        credential.validate()?;
        Ok(credential)
    }

    /// Returns the username part of the credential.
    #[must_use]
    pub fn username(&self) -> &str {
        match self {
            Self::Password { username, .. } | Self::Token { username, .. } => username,
        }
    }

    /// Returns the realm part of the credential.
    #[must_use]
    pub fn realm(&self) -> &str {
        match self {
            Self::Password { realm, .. } | Self::Token { realm, .. } => realm,
        }
    }

    fn validate(&self) -> ProxmoxResult<()> {
        match self {
            Self::Password {
                username,
                realm,
                password,
            } => {
                require("username", username)?;
                require("realm", realm)?;
                require("password", password)
            }
            Self::Token {
                username,
                realm,
                token_name,
                token_secret,
            } => {
                require("username", username)?;
                require("realm", realm)?;
                require("token_name", token_name)?;
                require("token_secret", token_secret)
            }
        }
    }
}

fn require(name: &str, value: &str) -> ProxmoxResult<()> {
    if value.is_empty() {
        return Err(ProxmoxError::Authentication(format!(
            "Credential field '{}' cannot be empty",
            name
        )));
    }
    Ok(())
}

// Manual Debug so passwords and token secrets never reach log output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password {
                username, realm, ..
            } => f
                .debug_struct("Credential::Password")
                .field("username", username)
                .field("realm", realm)
                .field("password", &"<redacted>")
                .finish(),
            Self::Token {
                username,
                realm,
                token_name,
                ..
            } => f
                .debug_struct("Credential::Token")
                .field("username", username)
                .field("realm", realm)
                .field("token_name", token_name)
                .field("token_secret", &"<redacted>")
                .finish(),
        }
    }
}
