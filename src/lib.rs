mod auth;
mod core;

pub use crate::core::domain::error::{ProxmoxError, ProxmoxResult, ValidationError};
pub use crate::core::domain::model::credential::Credential;
pub use crate::core::domain::model::endpoint::Endpoint;
pub use crate::core::domain::model::node::NodeSummary;
pub use crate::core::domain::model::task::TaskHandle;
pub use crate::core::domain::model::version::VersionInfo;
pub use crate::core::domain::model::vm::VmSummary;
pub use crate::core::domain::value_object::ticket::Ticket;
pub use crate::core::infrastructure::session::{
    RateLimitConfig, RawResponse, Session, SessionOptions,
};

use crate::core::domain::model::envelope;

/// A client for the Proxmox VE API.
///
/// Construction opens an authenticated session: a password credential is
/// exchanged for a ticket cookie on the spot, a token credential installs
/// its `Authorization` header without a network call. The typed
/// operations then cover version, node, and VM inventory reads plus the
/// VM lifecycle transitions.
///
/// # Examples
///
/// ```no_run
/// use comal_proxmox::{ProxmoxClient, ProxmoxResult};
///
/// #[tokio::main]
/// async fn main() -> ProxmoxResult<()> {
///     let client = ProxmoxClient::builder()
///         .host("proxmox.example.com")
///         .port(8006)
///         .password_auth("root", "pam", "password")?
///         .connect()
///         .await?;
///
///     let version = client.version().await?;
///     println!("{} v{}", version.release, version.version);
///     Ok(())
/// }
/// ```
pub struct ProxmoxClient {
    session: Session,
}

/// Builder for ProxmoxClient configuration
#[derive(Debug, Default)]
pub struct ProxmoxClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    api_prefix: Option<String>,
    credential: Option<Credential>,
    secure: Option<bool>,
    options: SessionOptions,
}

impl ProxmoxClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Defaults to 8006, the Proxmox management port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Defaults to `/api2/json`.
    pub fn api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(api_prefix.into());
        self
    }

    /// Installs a password credential for the ticket-cookie scheme.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Authentication` when any field is empty.
    pub fn password_auth(
        mut self,
        username: impl Into<String>,
        realm: impl Into<String>,
        password: impl Into<String>,
    ) -> ProxmoxResult<Self> {
        self.credential = Some(Credential::password(username, realm, password)?);
        Ok(self)
    }

    /// Installs an API token credential for the header scheme.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Authentication` when any field is empty.
    pub fn token_auth(
        mut self,
        username: impl Into<String>,
        realm: impl Into<String>,
        token_name: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> ProxmoxResult<Self> {
        self.credential = Some(Credential::token(username, realm, token_name, token_secret)?);
        Ok(self)
    }

    /// Switches between `https` (default) and plain `http` for lab use.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Accept self-signed certificate chains (default `true`).
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.options.accept_invalid_certs = accept;
        self
    }

    /// Enables client-side request pacing.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.options.rate_limit = Some(rate_limit);
        self
    }

    /// Validates the descriptors and opens the authenticated session.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed endpoint fields, `Authentication` for
    /// missing credentials or a failed ticket exchange, `Transport` when
    /// the server cannot be reached. No client is produced on error.
    pub async fn connect(self) -> ProxmoxResult<ProxmoxClient> {
        let host = self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?;
        let credential = self.credential.ok_or_else(|| {
            ProxmoxError::Authentication("Credentials are required".to_string())
        })?;

        let endpoint = Endpoint::new(
            host,
            self.port.unwrap_or(8006),
            self.api_prefix.unwrap_or_else(|| "/api2/json".to_string()),
        )?
        .secure(self.secure.unwrap_or(true));

        let session = Session::open(endpoint, credential, self.options).await?;
        Ok(ProxmoxClient { session })
    }
}

impl ProxmoxClient {
    /// Creates a new builder for ProxmoxClient configuration
    pub fn builder() -> ProxmoxClientBuilder {
        ProxmoxClientBuilder::default()
    }

    /// Opens a client over pre-built descriptors, bypassing the builder.
    pub async fn connect_with(
        endpoint: Endpoint,
        credential: Credential,
        options: SessionOptions,
    ) -> ProxmoxResult<Self> {
        let session = Session::open(endpoint, credential, options).await?;
        Ok(Self { session })
    }

    /// Returns the underlying session for raw requests.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the session ticket, when the password scheme is in use.
    #[must_use]
    pub fn ticket(&self) -> Option<&Ticket> {
        self.session.ticket()
    }

    /// Fetches API version information from `/version`.
    pub async fn version(&self) -> ProxmoxResult<VersionInfo> {
        let raw = self.session.get("/version").await?;
        envelope::decode_data(&raw)
    }

    /// Lists cluster nodes from `/nodes`, in the server's order.
    pub async fn nodes(&self) -> ProxmoxResult<Vec<NodeSummary>> {
        let raw = self.session.get("/nodes").await?;
        envelope::decode_data(&raw)
    }

    /// Lists QEMU VMs on a node from `/nodes/{node}/qemu`.
    ///
    /// The node name is inserted verbatim: PVE node names are constrained
    /// to a safe character set, so no percent-encoding is applied.
    pub async fn node_vms(&self, node: &str) -> ProxmoxResult<Vec<VmSummary>> {
        Self::require_node(node)?;
        let raw = self.session.get(&format!("/nodes/{}/qemu", node)).await?;
        envelope::decode_data(&raw)
    }

    /// Starts a stopped VM. The returned handle identifies the enqueued
    /// server-side task; completion is not polled.
    pub async fn start_vm(&self, node: &str, vmid: u32) -> ProxmoxResult<TaskHandle> {
        self.vm_power(node, vmid, "start").await
    }

    /// Reboots a running VM.
    pub async fn reboot_vm(&self, node: &str, vmid: u32) -> ProxmoxResult<TaskHandle> {
        self.vm_power(node, vmid, "reboot").await
    }

    /// Cleanly shuts down a running VM.
    pub async fn shutdown_vm(&self, node: &str, vmid: u32) -> ProxmoxResult<TaskHandle> {
        self.vm_power(node, vmid, "shutdown").await
    }

    async fn vm_power(&self, node: &str, vmid: u32, action: &str) -> ProxmoxResult<TaskHandle> {
        Self::require_node(node)?;
        let resource = format!("/nodes/{}/qemu/{}/status/{}", node, vmid, action);
        let raw = self.session.post(&resource, &[]).await?;
        envelope::decode_task(&raw)
    }

    fn require_node(node: &str) -> ProxmoxResult<()> {
        if node.is_empty() {
            return Err(ValidationError::Field {
                field: "node".to_string(),
                message: "Node name cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
