use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::domain::{
        error::{ProxmoxError, ProxmoxResult},
        model::endpoint::Endpoint,
        value_object::ticket::Ticket,
    },
};

use reqwest::{Client, StatusCode};
use tracing::debug;

/// Exchanges a password credential for an authentication ticket.
pub(crate) struct LoginService;

impl LoginService {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Posts the URL-encoded login form to `/access/ticket` and mints a
    /// ticket from the response.
    ///
    /// # Errors
    ///
    /// `Transport` when no HTTP status was seen; `Authentication` for a
    /// non-2xx status, an unparseable body, or a missing/empty ticket.
    pub(crate) async fn execute(
        &self,
        client: &Client,
        endpoint: &Endpoint,
        request: &LoginRequest,
    ) -> ProxmoxResult<Ticket> {
        let url = endpoint.resolve("/access/ticket")?;

        let response = client
            .post(&url)
            .form(request)
            .send()
            .await
            .map_err(|e| ProxmoxError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => self.handle_successful_login(response).await,
            StatusCode::UNAUTHORIZED => Err(ProxmoxError::Authentication(
                "Invalid credentials provided".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(ProxmoxError::Authentication(
                "Ticket endpoint not found".to_string(),
            )),
            status => Err(ProxmoxError::Authentication(format!(
                "Ticket request rejected with status {}",
                status
            ))),
        }
    }

    async fn handle_successful_login(&self, response: reqwest::Response) -> ProxmoxResult<Ticket> {
        let login_response = response.json::<LoginResponse>().await.map_err(|e| {
            ProxmoxError::Authentication(format!("Failed to parse ticket response: {}", e))
        })?;

        let value = login_response
            .data
            .and_then(|data| data.ticket)
            .filter(|ticket| !ticket.is_empty())
            .ok_or_else(|| {
                ProxmoxError::Authentication(
                    "Ticket response lacks a 'data.ticket' value".to_string(),
                )
            })?;

        debug!(ticket_len = value.len(), "acquired authentication ticket");
        Ticket::new(value).map_err(|e| ProxmoxError::Authentication(e.to_string()))
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
