#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};
use interconnect_core::{FixedClock, InterconnectEngine};
use interconnect_server::{AppState, create_app, infra::config::Config};
use serde_json::{Value, json};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap()
}

pub fn at(hours: i64) -> String {
    (epoch() + Duration::hours(hours)).to_rfc3339()
}

pub fn build_engine() -> InterconnectEngine {
    InterconnectEngine::builder()
        .clock(Arc::new(FixedClock::new(epoch())))
        .build()
        .expect("engine builds with defaults")
}

pub fn build_test_server() -> TestServer {
    let state = AppState::new(build_engine(), Arc::new(Config::default()));
    TestServer::new(create_app(state)).expect("test server starts")
}

pub fn transceiver_json(transmit: &str, receive: &str) -> Value {
    json!({
        "transmit_signal_chain": { "antenna": { "type": transmit } },
        "receive_signal_chain": { "antenna": { "type": receive } },
    })
}

pub fn bearer_json(transceiver: &str, start_h: i64, end_h: i64, center_hz: u64) -> Value {
    json!({
        "target": "target/mysat",
        "transceiver": transceiver,
        "interval": { "start": at(start_h), "end": at(end_h) },
        "rx_center_frequency_hz": center_hz,
        "rx_bandwidth_hz": 30_000_000u64,
        "tx_center_frequency_hz": center_hz,
        "tx_bandwidth_hz": 30_000_000u64,
    })
}

pub fn circuit_json(bearer: &str, start_h: i64, end_h: i64) -> Value {
    json!({
        "bearer": bearer,
        "interval": { "start": at(start_h), "end": at(end_h) },
    })
}
