//! Authenticated HTTP session against a Proxmox endpoint.

use crate::{
    auth::application::{
        request::login_request::LoginRequest, service::login_service::LoginService,
    },
    core::domain::{
        error::{ProxmoxError, ProxmoxResult},
        model::{credential::Credential, endpoint::Endpoint},
        value_object::ticket::Ticket,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, Method, StatusCode};
use std::num::NonZeroU32;
use tracing::debug;

/// A raw HTTP response: status code plus body text.
///
/// The session never parses JSON itself; operations decode the envelope.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Client-side request pacing, expressed as a governor quota.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub requests_per_second: NonZeroU32,
    pub burst_size: NonZeroU32,
}

/// Tunables applied when a session is opened.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Accept self-signed certificate chains. Defaults to `true`: Proxmox
    /// deployments typically present self-signed certificates, and
    /// accepting them is a deliberate, documented trust decision that a
    /// deployment can reverse here.
    pub accept_invalid_certs: bool,
    /// Optional request pacing; `None` disables it.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            rate_limit: None,
        }
    }
}

/// The single installed authentication artifact of a session.
enum AuthArtifact {
    /// `Cookie: PVEAuthCookie=<ticket>` (password credential).
    TicketCookie(Ticket),
    /// Full `Authorization` header value (token credential).
    TokenHeader(String),
}

/// An authenticated session: one HTTPS client, one endpoint, exactly one
/// auth artifact for its whole lifetime.
///
/// One logical caller drives a session sequentially. The underlying
/// client pools connections and releases them when the session drops.
pub struct Session {
    endpoint: Endpoint,
    http_client: Client,
    artifact: AuthArtifact,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl Session {
    /// Opens a session, installing the auth artifact that matches the
    /// credential variant.
    ///
    /// A password credential triggers a ticket fetch against
    /// `/access/ticket`; a token credential installs its header without
    /// any network call.
    ///
    /// # Errors
    ///
    /// `Transport` when the server cannot be reached, `Authentication`
    /// when the ticket exchange fails. No session is produced on error.
    pub async fn open(
        endpoint: Endpoint,
        credential: Credential,
        options: SessionOptions,
    ) -> ProxmoxResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(|e| ProxmoxError::Transport(e.to_string()))?;

        let artifact = match &credential {
            Credential::Password {
                username,
                realm,
                password,
            } => {
                let request = LoginRequest {
                    username: username.clone(),
                    realm: realm.clone(),
                    password: password.clone(),
                };
                let ticket = LoginService::new()
                    .execute(&http_client, &endpoint, &request)
                    .await?;
                AuthArtifact::TicketCookie(ticket)
            }
            Credential::Token {
                username,
                realm,
                token_name,
                token_secret,
            } => AuthArtifact::TokenHeader(format!(
                "PVEAPIToken={}@{}!{}={}",
                username, realm, token_name, token_secret
            )),
        };

        let rate_limiter = options.rate_limit.map(|rl| {
            let quota = Quota::per_second(rl.requests_per_second).allow_burst(rl.burst_size);
            DefaultDirectRateLimiter::direct(quota)
        });

        Ok(Self {
            endpoint,
            http_client,
            artifact,
            rate_limiter,
        })
    }

    /// Returns the endpoint this session talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the session ticket, when the password scheme is in use.
    #[must_use]
    pub fn ticket(&self) -> Option<&Ticket> {
        match &self.artifact {
            AuthArtifact::TicketCookie(ticket) => Some(ticket),
            AuthArtifact::TokenHeader(_) => None,
        }
    }

    /// Issues an authenticated GET and returns the raw response.
    pub async fn get(&self, resource: &str) -> ProxmoxResult<RawResponse> {
        self.execute(Method::GET, resource, None).await
    }

    /// Issues an authenticated POST with a URL-encoded form body (empty
    /// by default) and returns the raw response.
    pub async fn post(
        &self,
        resource: &str,
        form: &[(&str, &str)],
    ) -> ProxmoxResult<RawResponse> {
        self.execute(Method::POST, resource, Some(form)).await
    }

    /// One-shot dispatch: resolve, pace, attach the auth artifact, send.
    /// No retries, no added timeout, no re-authentication on 401.
    async fn execute(
        &self,
        method: Method,
        resource: &str,
        form: Option<&[(&str, &str)]>,
    ) -> ProxmoxResult<RawResponse> {
        let url = self.endpoint.resolve(resource)?;

        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let mut builder = self.http_client.request(method.clone(), &url);
        builder = match &self.artifact {
            AuthArtifact::TicketCookie(ticket) => {
                builder.header("Cookie", ticket.as_cookie_header())
            }
            AuthArtifact::TokenHeader(value) => builder.header("Authorization", value),
        };
        if let Some(form) = form {
            builder = builder.form(form);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProxmoxError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProxmoxError::Transport(e.to_string()))?;

        debug!(%method, resource, status = status.as_u16(), "dispatched request");
        Ok(RawResponse { status, body })
    }
}
