//! Load Testing Suite for the production plan service
//!
//! Verifies that the service handles:
//! - Many concurrent clients posting the same payload
//! - The largest fleet the service accepts
//!
//! Plans are pure functions of their payload, so every concurrent response
//! must be byte-identical.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use production_plan::{
    api::{router, AppState},
    config::Config,
};
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tower::ServiceExt;

const PAYLOAD3: &str = include_str!("../data/payload3.json");

async fn post(app: Router, body: String) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/productionplan")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn large_fleet_payload(size: usize) -> Value {
    let plants: Vec<Value> = (0..size)
        .map(|i| match i % 3 {
            0 => json!({"name": format!("wind{i}"), "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 50}),
            1 => json!({"name": format!("gas{i}"), "type": "gasfired", "efficiency": 0.4 + (i % 10) as f64 / 100.0, "pmin": 50, "pmax": 300}),
            _ => json!({"name": format!("jet{i}"), "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 20}),
        })
        .collect();

    json!({
        "load": 2000,
        "fuels": {"gas(euro/MWh)": 13.4, "kerosine(euro/MWh)": 50.8, "co2(euro/ton)": 20, "wind(%)": 60},
        "powerplants": plants
    })
}

/// Test: Concurrent identical requests
///
/// 50 clients each post the same payload 10 times; all responses must be
/// successful and identical.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // Ignore by default as this is a slow test
async fn test_concurrent_requests_are_deterministic() {
    let app = router(AppState::new(Config::default()));
    let (_, expected) = post(app.clone(), PAYLOAD3.to_string()).await;

    let mut clients = JoinSet::new();
    for _ in 0..50 {
        let app = app.clone();
        clients.spawn(async move {
            let mut bodies = Vec::with_capacity(10);
            for _ in 0..10 {
                bodies.push(post(app.clone(), PAYLOAD3.to_string()).await);
            }
            bodies
        });
    }

    while let Some(result) = clients.join_next().await {
        for (status, body) in result.expect("client task should complete") {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, expected);
        }
    }
}

/// Test: Large fleet latency
///
/// A fleet at the plant limit is searched exhaustively and must still
/// answer within the request timeout.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // Ignore by default as this is a slow test
async fn test_large_fleet_latency() {
    let cfg = Config::default();
    let timeout = Duration::from_secs(cfg.server.request_timeout_secs);
    let payload = large_fleet_payload(cfg.dispatch.max_plants).to_string();
    let app = router(AppState::new(cfg));

    let start = Instant::now();
    let (status, body) = post(app, payload).await;
    let elapsed = start.elapsed();

    println!("Large fleet plan computed in {:?}", elapsed);

    assert_eq!(status, StatusCode::OK);
    let output: Value = serde_json::from_slice(&body).unwrap();
    let total: f64 = output
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["p"].as_f64().unwrap())
        .sum();
    assert!((total - 2000.0).abs() < 1e-6, "total was {total}");
    assert!(
        elapsed < timeout,
        "Large fleet plan took {:?}",
        elapsed
    );
}
