use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use interconnect_model::{AntennaType, Transceiver};
use interconnect_server::{AppState, create_app, infra::config::Config};
use tower::ServiceExt;

mod common;
use common::{build_engine, build_test_server, transceiver_json};

#[tokio::test]
async fn snapshot_only_stream_ends_after_marker() {
    let server = build_test_server();
    server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/api/v1/events")
        .add_query_param("snapshot_only", "true")
        .await;
    response.assert_status_ok();
    let text = response.text();

    assert_eq!(text.matches("event: snapshot\n").count(), 3);
    assert!(text.contains("transceivers/t1"));
    assert!(text.contains("contactWindow/t1mysat"));
    assert!(text.contains("target/mysat"));

    let marker = text
        .find("event: snapshot_complete")
        .expect("snapshot marker present");
    assert!(text[marker..].contains("id: 2"));
    assert!(text.rfind("event: snapshot\n").unwrap() < marker);
}

#[tokio::test]
async fn snapshot_reflects_engine_state_before_request() {
    let engine = build_engine();
    engine
        .transceivers()
        .create("t9", Transceiver::symmetric(AntennaType::Optical))
        .unwrap();
    let app = create_app(AppState::new(engine, Arc::new(Config::default())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/events?snapshot_only=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/event-stream"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("transceivers/t9"));
    assert!(text.contains("event: snapshot_complete"));
}
