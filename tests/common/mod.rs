//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ahp_report::config::ServiceConfig;
use ahp_report::domain::upload::{FileHandle, SlotManager};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One file entry of a v2 response with a single engineer and an aggregate.
pub fn file_entry(filename: &str) -> serde_json::Value {
    json!({
        "filename": filename,
        "results": [{
            "engineer": "Alice",
            "matrix": [[1.0, 3.0], [0.333, 1.0]],
            "weights": [0.75, 0.25],
            "max_eigenvalue": 2.0,
            "ci": 0.0,
            "cr": 0.0,
            "ri": 0.0
        }],
        "aggregate_result": {
            "aggregate_matrix": [[1.0, 3.0], [0.333, 1.0]],
            "weights": [0.75, 0.25],
            "max_eigenvalue": 2.0,
            "ci": 0.0,
            "cr": 0.0,
            "ri": 0.0
        }
    })
}

/// Starts a server answering the upload endpoint with `body` and `status`.
pub async fn mock_upload_server(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uploadfile/"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    server
}

pub fn service_config(server: &MockServer) -> ServiceConfig {
    ServiceConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    }
}

pub fn filled_slots(names: &[&str]) -> SlotManager {
    let mut slots = SlotManager::with_slots(names.len());
    for (i, name) in names.iter().enumerate() {
        slots
            .set_file(i, FileHandle::new(*name, format!("{}-bytes", name).into_bytes()))
            .unwrap();
    }
    slots
}
