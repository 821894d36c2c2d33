use crate::{Credential, Endpoint, ProxmoxClient, SessionOptions};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn test_endpoint(server_uri: &str) -> Endpoint {
    let url = url::Url::parse(server_uri).unwrap();
    Endpoint::new(url.host_str().unwrap(), url.port().unwrap(), "/api2/json")
        .unwrap()
        .secure(false)
}

async fn token_client(mock_server: &MockServer) -> ProxmoxClient {
    ProxmoxClient::connect_with(
        test_endpoint(&mock_server.uri()),
        Credential::token("root", "pam", "ci", "secret").unwrap(),
        SessionOptions::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_nodes_keep_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"node": "tortilla", "status": "online", "uptime": 3600},
                {"node": "burrito", "status": "offline", "uptime": 0}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let nodes = client.nodes().await.unwrap();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].node, "tortilla");
    assert_eq!(nodes[0].status, "online");
    assert_eq!(nodes[0].uptime, 3600);
    assert_eq!(nodes[1].node, "burrito");
    assert_eq!(nodes[1].status, "offline");
    assert_eq!(nodes[1].uptime, 0);
}

#[tokio::test]
async fn test_offline_node_defaults_missing_uptime_to_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"node": "burrito", "status": "offline"}]
        })))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes[0].uptime, 0);
    assert_eq!(nodes[0].cpu, None);
}

#[tokio::test]
async fn test_node_resource_fields_are_carried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{
                "node": "tortilla",
                "status": "online",
                "uptime": 1234567,
                "cpu": 0.15,
                "mem": 8589934592_i64,
                "maxmem": 17179869184_i64,
                "ssl_fingerprint": "AA:BB:CC"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes[0].cpu, Some(0.15));
    assert_eq!(nodes[0].mem, Some(8589934592));
    assert_eq!(nodes[0].maxmem, Some(17179869184));
}

#[tokio::test]
async fn test_empty_cluster_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    assert!(client.nodes().await.unwrap().is_empty());
}
