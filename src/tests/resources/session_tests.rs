use crate::{
    Credential, Endpoint, ProxmoxClient, ProxmoxError, RateLimitConfig, SessionOptions,
};
use std::num::NonZeroU32;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

fn test_endpoint(server_uri: &str) -> Endpoint {
    let url = url::Url::parse(server_uri).unwrap();
    Endpoint::new(url.host_str().unwrap(), url.port().unwrap(), "/api2/json")
        .unwrap()
        .secure(false)
}

fn mount_ticket_endpoint(ticket: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=root"))
        .and(body_string_contains("realm=pam"))
        .and(body_string_contains("password=x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"ticket": ticket, "CSRFPreventionToken": "4EEC61E2:token"}
        })))
}

#[tokio::test]
async fn test_ticket_acquisition_installs_cookie() {
    let mock_server = MockServer::start().await;
    mount_ticket_endpoint("PVE:root@pam:ABCDEF")
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .and(header("Cookie", "PVEAuthCookie=PVE:root@pam:ABCDEF"))
        .and(|req: &wiremock::Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"release": "8.1", "version": "8.1.4"}
        })))
        .mount(&mock_server)
        .await;

    let client = ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::password("root", "pam", "x").unwrap(),
        SessionOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        client.ticket().map(|t| t.as_str()),
        Some("PVE:root@pam:ABCDEF")
    );

    let version = client.version().await.unwrap();
    assert_eq!(version.release, "8.1");
}

#[tokio::test]
async fn test_token_session_makes_no_login_call() {
    let mock_server = MockServer::start().await;

    let client = ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::token("root", "pam", "ci", "secret").unwrap(),
        SessionOptions::default(),
    )
    .await
    .unwrap();

    assert!(client.ticket().is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_ticket_request_surfaces_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::password("root", "pam", "x").unwrap(),
        SessionOptions::default(),
    )
    .await;

    assert!(matches!(result, Err(ProxmoxError::Authentication(_))));
}

#[tokio::test]
async fn test_malformed_ticket_responses_surface_authentication_error() {
    let bodies = [
        serde_json::json!("not an object"),
        serde_json::json!({"data": {}}),
        serde_json::json!({"data": {"ticket": ""}}),
        serde_json::json!({"data": null}),
    ];

    for body in bodies {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&mock_server)
            .await;

        let result = ProxmoxClient::connect_with(
            test_endpoint(&mock_server.uri()),
            Credential::password("root", "pam", "x").unwrap(),
            SessionOptions::default(),
        )
        .await;

        assert!(
            matches!(result, Err(ProxmoxError::Authentication(_))),
            "body {} should fail ticket acquisition",
            body
        );
    }
}

#[tokio::test]
async fn test_connection_refused_surfaces_transport_error() {
    // Bind then drop a listener so the port is closed when we connect.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let endpoint = Endpoint::new("127.0.0.1", port, "/api2/json")
        .unwrap()
        .secure(false);

    let result = ProxmoxClient::connect_with(
        endpoint,
        Credential::password("root", "pam", "x").unwrap(),
        SessionOptions::default(),
    )
    .await;

    assert!(matches!(result, Err(ProxmoxError::Transport(_))));
}

#[tokio::test]
async fn test_raw_get_returns_unparsed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::token("root", "pam", "ci", "secret").unwrap(),
        SessionOptions::default(),
    )
    .await
    .unwrap();

    let raw = client.session().get("/version").await.unwrap();
    assert_eq!(raw.status.as_u16(), 200);
    assert_eq!(raw.body, "not json at all");
}

#[tokio::test]
async fn test_rate_limiting_delays_requests() {
    use std::time::{Duration, Instant};

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"release": "8.1", "version": "8.1.4"}
        })))
        .expect(4)
        .mount(&mock_server)
        .await;

    let options = SessionOptions {
        rate_limit: Some(RateLimitConfig {
            requests_per_second: NonZeroU32::new(2).unwrap(),
            burst_size: NonZeroU32::new(2).unwrap(),
        }),
        ..Default::default()
    };
    let client = ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::token("root", "pam", "ci", "secret").unwrap(),
        options,
    )
    .await
    .unwrap();

    // The burst passes immediately.
    let start = Instant::now();
    client.version().await.unwrap();
    client.version().await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(500));

    // The next two wait for the 2/sec quota to replenish.
    let start = Instant::now();
    client.version().await.unwrap();
    client.version().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(900));
}
