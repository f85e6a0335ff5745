use axum::http::StatusCode;
use serde_json::{Value, json};

mod common;
use common::{bearer_json, build_test_server, circuit_json, transceiver_json};

const GHZ: u64 = 1_000_000_000;

#[tokio::test]
async fn health_reports_engine() {
    let server = build_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["engine"]["targets"], 1);
}

#[tokio::test]
async fn transceiver_lifecycle() {
    let server = build_test_server();

    let created = server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    assert_eq!(body["name"], "transceivers/t1");

    let fetched = server.get("/api/v1/transceivers/t1").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["name"], "transceivers/t1");

    let listed: Value = server.get("/api/v1/transceivers").await.json();
    assert_eq!(listed["transceivers"].as_array().unwrap().len(), 1);

    let windows: Value = server.get("/api/v1/contact-windows").await.json();
    let windows = windows["contact_windows"].as_array().unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0]["name"], "contactWindow/t1mysat");

    let updated = server
        .put("/api/v1/transceivers/t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await;
    updated.assert_status_ok();

    server
        .delete("/api/v1/transceivers/t1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get("/api/v1/transceivers/t1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let windows: Value = server.get("/api/v1/contact-windows").await.json();
    assert!(windows["contact_windows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rejections_use_error_envelope() {
    let server = build_test_server();

    let incompatible = server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "RF"))
        .await;
    incompatible.assert_status(StatusCode::PRECONDITION_FAILED);
    let body: Value = incompatible.json();
    assert_eq!(body["error"]["code"], "FAILED_PRECONDITION");
    assert_eq!(body["error"]["status"], 412);
    assert_eq!(
        body["error"]["message"],
        "transceiver is not compatible, see ListCompatibleTransceiverTypes for details"
    );

    let missing_id = server
        .post("/api/v1/transceivers")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await;
    missing_id.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(missing_id.json::<Value>()["error"]["code"], "INVALID_ARGUMENT");

    server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await
        .assert_status(StatusCode::CREATED);
    let duplicate = server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await;
    duplicate.assert_status(StatusCode::CONFLICT);

    let filtered = server
        .get("/api/v1/bearers")
        .add_query_param("filter", "target = \"target/mysat\"")
        .await;
    filtered.assert_status(StatusCode::NOT_IMPLEMENTED);
    assert_eq!(filtered.json::<Value>()["error"]["code"], "UNIMPLEMENTED");
}

#[tokio::test]
async fn bearer_and_circuit_flow() {
    let server = build_test_server();
    server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await
        .assert_status(StatusCode::CREATED);

    let bearer = server
        .post("/api/v1/bearers")
        .add_query_param("bearer_id", "b1")
        .json(&bearer_json("transceivers/t1", 2, 5, 16 * GHZ))
        .await;
    bearer.assert_status(StatusCode::CREATED);
    assert_eq!(bearer.json::<Value>()["name"], "bearers/b1");

    server
        .post("/api/v1/bearers")
        .add_query_param("bearer_id", "b2")
        .json(&bearer_json("transceivers/t1", 1, 3, 16 * GHZ))
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);

    server
        .post("/api/v1/bearers")
        .add_query_param("bearer_id", "late")
        .json(&bearer_json("transceivers/t1", 40, 41, 16 * GHZ))
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);

    server
        .post("/api/v1/bearers")
        .add_query_param("bearer_id", "inverted")
        .json(&bearer_json("transceivers/t1", 9, 8, 16 * GHZ))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let circuit = server
        .post("/api/v1/attachment-circuits")
        .add_query_param("attachment_circuit_id", "ac1")
        .json(&circuit_json("bearers/b1", 3, 4))
        .await;
    circuit.assert_status(StatusCode::CREATED);
    assert_eq!(circuit.json::<Value>()["name"], "attachmentCircuits/ac1");

    server
        .post("/api/v1/attachment-circuits")
        .add_query_param("attachment_circuit_id", "ac2")
        .json(&circuit_json("bearers/b1", 1, 4))
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);

    // Dependents block deletes up the chain.
    server
        .delete("/api/v1/bearers/b1")
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);
    server
        .delete("/api/v1/transceivers/t1")
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);

    server
        .delete("/api/v1/attachment-circuits/ac1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/api/v1/bearers/b1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/api/v1/transceivers/t1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let bearers: Value = server.get("/api/v1/bearers").await.json();
    assert_eq!(bearers, json!({ "bearers": [] }));
}

#[tokio::test]
async fn targets_and_compatible_types() {
    let server = build_test_server();

    let targets: Value = server.get("/api/v1/targets").await.json();
    assert_eq!(targets["targets"][0]["name"], "target/mysat");

    server.get("/api/v1/targets/mysat").await.assert_status_ok();
    server
        .get("/api/v1/targets/unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let types: Value = server
        .get("/api/v1/compatible-transceiver-types")
        .await
        .json();
    assert_eq!(
        types["compatible_transceiver_types"][0]["transceiver_filter"],
        "transmit_signal_chain.antenna.type = OPTICAL AND receive_signal_chain.antenna.type = OPTICAL"
    );
}

#[tokio::test]
async fn update_path_wins_over_payload_name() {
    let server = build_test_server();
    server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await
        .assert_status(StatusCode::CREATED);

    let mut payload = transceiver_json("OPTICAL", "OPTICAL");
    payload["name"] = json!("transceivers/other");
    let updated = server.put("/api/v1/transceivers/t1").json(&payload).await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["name"], "transceivers/t1");

    server
        .put("/api/v1/transceivers/missing")
        .json(&transceiver_json("OPTICAL", "OPTICAL"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn undecodable_bodies_use_error_envelope() {
    let server = build_test_server();

    let laser = server
        .post("/api/v1/transceivers")
        .add_query_param("transceiver_id", "t1")
        .json(&transceiver_json("LASER", "OPTICAL"))
        .await;
    laser.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = laser.json();
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(body["error"]["status"], 400);

    let mut bearer = bearer_json("transceivers/t1", 2, 3, 16 * GHZ);
    bearer["rx_bandwidth_hz"] = json!("wide");
    let rejected = server
        .post("/api/v1/bearers")
        .add_query_param("bearer_id", "b1")
        .json(&bearer)
        .await;
    rejected.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(rejected.json::<Value>()["error"]["code"], "INVALID_ARGUMENT");

    let listed: Value = server.get("/api/v1/transceivers").await.json();
    assert!(listed["transceivers"].as_array().unwrap().is_empty());
}
