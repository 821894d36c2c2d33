use serde::Serialize;

/// Form body for `POST /access/ticket`.
///
/// Sent URL-encoded. The API accepts either a combined
/// `username=user@realm` or split fields; the split form is sent here.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub realm: String,
    pub password: String,
}
