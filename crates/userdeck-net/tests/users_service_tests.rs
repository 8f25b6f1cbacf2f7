//! Integration tests for the users wire client.

use std::time::Duration;

use serde_json::json;
use userdeck_net::http::HttpClient;
use userdeck_net::users::{UsersApi, UsersService, UNKNOWN_ERROR_MESSAGE};
use userdeck_net::NetworkError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(id: i64, name: &str, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "email": format!("{}@example.com", username.to_lowercase()),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

fn service_for(server: &MockServer) -> UsersService {
    let client = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build client");
    UsersService::new(client, &server.uri()).expect("Failed to build service")
}

#[tokio::test]
async fn test_fetch_users_success_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "Leanne Graham", "Bret"),
            user_json(2, "Ervin Howell", "Antonette"),
            user_json(3, "Clementine Bauch", "Samantha"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = service_for(&server).fetch_users().await.expect("fetch failed");

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[1].username, "Antonette");
}

#[tokio::test]
async fn test_fetch_users_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let users = service_for(&server).fetch_users().await.expect("fetch failed");
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_fetch_users_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_users().await.unwrap_err();
    assert_eq!(err, NetworkError::Unauthorized);
}

#[tokio::test]
async fn test_fetch_users_bad_response_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "timestamp": 1724567890,
            "status": "503",
            "message": "Service under maintenance"
        })))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_users().await.unwrap_err();
    assert_eq!(
        err,
        NetworkError::BadResponse {
            status: 503,
            message: "Service under maintenance".into()
        }
    );
}

#[tokio::test]
async fn test_fetch_users_bad_response_without_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_users().await.unwrap_err();
    match err {
        NetworkError::BadResponse { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, UNKNOWN_ERROR_MESSAGE);
        }
        other => panic!("Expected BadResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_users_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_users().await.unwrap_err();
    assert!(err.is_decode(), "Expected decode error, got {err:?}");
}

#[tokio::test]
async fn test_fetch_users_transport_error() {
    // Bind and drop a listener so its port is closed.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
        format!("http://{}", listener.local_addr().expect("no local addr"))
    };

    let client = HttpClient::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Failed to build client");
    let service = UsersService::new(client, &uri).expect("Failed to build service");

    let err = service.fetch_users().await.unwrap_err();
    assert!(err.is_transport(), "Expected transport error, got {err:?}");
}

#[tokio::test]
async fn test_service_endpoint_resolution() {
    let server = MockServer::start().await;
    let service = service_for(&server);
    assert_eq!(service.endpoint().as_str(), format!("{}/users", server.uri()));
}
