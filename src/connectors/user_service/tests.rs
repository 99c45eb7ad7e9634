use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::mock;
use super::{init, UserProfile, UserServiceClient, UserServiceConnector};
use crate::connectors::config::{ConnectorConfig, UserServiceConfig};
use crate::connectors::errors::ConnectorError;

fn client_for(base_url: &str) -> UserServiceClient {
    UserServiceClient::new(UserServiceConfig {
        enabled: true,
        base_url: base_url.to_string(),
        timeout_secs: 1,
    })
    .unwrap()
}

#[test]
fn test_user_url_appends_api_prefix() {
    let client = client_for("http://users.local:8082/");
    assert_eq!(client.user_url(42), "http://users.local:8082/api/users/42");
}

#[tokio::test]
async fn test_client_returns_profile_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "jdoe",
            "fullName": "John Doe",
            "email": "ignored@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client_for(&server.uri()).get_user_by_id(7).await.unwrap();

    assert_eq!(
        profile,
        Some(UserProfile {
            id: 7,
            username: "jdoe".to_string(),
            full_name: Some("John Doe".to_string()),
        })
    );
}

#[tokio::test]
async fn test_client_accepts_missing_full_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/8"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 8, "username": "anon"})),
        )
        .mount(&server)
        .await;

    let profile = client_for(&server.uri())
        .get_user_by_id(8)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(profile.username, "anon");
    assert!(profile.full_name.is_none());
}

#[tokio::test]
async fn test_client_maps_404_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let profile = client_for(&server.uri()).get_user_by_id(404).await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_client_maps_null_body_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let profile = client_for(&server.uri()).get_user_by_id(3).await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_client_server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_user_by_id(5).await.unwrap_err();
    match err {
        ConnectorError::HttpError(msg) => assert!(msg.contains("500")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_client_other_client_error_is_not_treated_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/9"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).get_user_by_id(9).await;
    assert!(matches!(result, Err(ConnectorError::HttpError(_))));
}

#[tokio::test]
async fn test_client_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/6"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).get_user_by_id(6).await;
    assert!(matches!(result, Err(ConnectorError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_client_connection_refused_is_service_unavailable() {
    // nothing listens on the discard port
    let result = client_for("http://127.0.0.1:9").get_user_by_id(1).await;
    assert!(matches!(result, Err(ConnectorError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_client_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 2, "username": "slow"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).get_user_by_id(2).await;
    assert!(matches!(result, Err(ConnectorError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_mock_knows_only_registered_users() {
    let connector = mock::MockUserServiceConnector::default()
        .with_user(UserProfile {
            id: 1,
            username: "alice".to_string(),
            full_name: Some("Alice Liddell".to_string()),
        })
        .with_unreachable(13);

    assert_eq!(
        connector.get_user_by_id(1).await.unwrap().unwrap().username,
        "alice"
    );
    assert!(connector.get_user_by_id(2).await.unwrap().is_none());
    assert!(connector.get_user_by_id(13).await.is_err());
    assert_eq!(connector.lookups(), 3);
}

#[tokio::test]
async fn test_init_uses_mock_when_disabled() {
    let connector = init(&ConnectorConfig::default()).unwrap();
    // the mock has no users, so any lookup resolves to "not found"
    assert!(connector.get_user_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_init_uses_http_client_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "username": "bob"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ConnectorConfig {
        user_service: Some(UserServiceConfig {
            enabled: true,
            base_url: server.uri(),
            timeout_secs: 5,
        }),
    };
    let connector = init(&config).unwrap();

    assert_eq!(
        connector.get_user_by_id(1).await.unwrap().unwrap().username,
        "bob"
    );
}
