use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use ribbon_helix::{HelixClient, OAuth, StreamDirectory};
use ribbon_serve::router;

async fn token() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "access_token": "testtoken", "expires_in": 3600 }))
}

async fn streams() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "data": [
        {
            "id": "1",
            "user_id": "10",
            "user_login": "login_10",
            "user_name": "name_10",
            "game_name": "Grand Theft Auto V",
            "title": "blueribbon late night",
            "viewer_count": 12,
            "started_at": "2021-03-10T15:04:21Z",
            "thumbnail_url": ""
        },
        {
            "id": "2",
            "user_id": "20",
            "user_login": "login_20",
            "user_name": "name_20",
            "game_name": "Grand Theft Auto V",
            "title": "BlueRibbon RP - heists",
            "viewer_count": 340,
            "started_at": "2021-03-10T16:20:00Z",
            "thumbnail_url": ""
        }
    ] }))
}

async fn users() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "data": [
        { "id": "20", "profile_image_url": "https://cdn.example/20.png" }
    ] }))
}

async fn broken_streams() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded: boom")
}

async fn serve(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

async fn serve_api(upstream: Router) -> SocketAddr {
    let upstream_addr = serve(upstream).await;

    let oauth = OAuth::new_with_ep(
        format!("http://{upstream_addr}/oauth2/token"),
        "client-id",
        "shh",
    );
    let client = HelixClient::new_with_ep(format!("http://{upstream_addr}/helix"), oauth);
    let directory = StreamDirectory::new(client);

    serve(router(directory, None).unwrap()).await
}

#[tokio::test]
async fn streams_endpoint_returns_the_ranked_list() {
    let upstream = Router::new()
        .route("/oauth2/token", post(token))
        .route("/helix/streams", get(streams))
        .route("/helix/users", get(users));
    let addr = serve_api(upstream).await;

    let resp = reqwest::get(format!("http://{addr}/api/streams"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    let streams = body["streams"].as_array().unwrap();
    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0]["viewer_count"], 340);
    assert_eq!(streams[0]["profile_image_url"], "https://cdn.example/20.png");
    assert_eq!(streams[1]["viewer_count"], 12);
    assert_eq!(streams[1]["profile_image_url"], serde_json::Value::Null);
}

#[tokio::test]
async fn upstream_failure_is_a_generic_500() {
    let upstream = Router::new()
        .route("/oauth2/token", post(token))
        .route("/helix/streams", get(broken_streams));
    let addr = serve_api(upstream).await;

    let resp = reqwest::get(format!("http://{addr}/api/streams"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body = resp.text().await.unwrap();
    assert_eq!(body, r#"{"error":"could not fetch streams"}"#);
    assert!(!body.contains("boom"));
}

#[tokio::test]
async fn auth_failure_is_also_a_generic_500() {
    let upstream = Router::new().route("/helix/streams", get(streams));
    let addr = serve_api(upstream).await;

    let resp = reqwest::get(format!("http://{addr}/api/streams"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "could not fetch streams");
}
