use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    pub data: Option<LoginResponseData>,
}

#[derive(Deserialize)]
pub(crate) struct LoginResponseData {
    pub ticket: Option<String>,
    /// Required alongside the ticket for write operations on clusters in
    /// strict mode. Captured but not yet presented.
    // TODO: send CSRFPreventionToken on POST requests for clusters that enforce it.
    #[serde(rename = "CSRFPreventionToken")]
    #[allow(dead_code)]
    pub csrf_token: Option<String>,
}
