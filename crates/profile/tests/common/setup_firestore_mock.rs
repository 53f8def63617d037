// crates/profile/tests/common/setup_firestore_mock.rs

use std::sync::Arc;
use profile::infrastructure::firestore::repositories::FirestoreProfileRepository;
use shared_kernel::infrastructure::firestore::auth::StaticTokenProvider;
use shared_kernel::infrastructure::firestore::FirestoreClient;
use wiremock::MockServer;

pub const PROJECT_ID: &str = "demo-project";

pub fn commit_path() -> String {
    format!("/v1/projects/{PROJECT_ID}/databases/(default)/documents:commit")
}

pub fn commit_ok_body(server_time: &str) -> serde_json::Value {
    serde_json::json!({
        "writeResults": [{
            "updateTime": server_time,
            "transformResults": [{ "timestampValue": server_time }]
        }],
        "commitTime": server_time
    })
}

/// Repository branché sur un faux Firestore (wiremock) avec un token statique.
pub async fn setup_firestore_repository(collection: &str) -> (FirestoreProfileRepository, MockServer) {
    let server = MockServer::start().await;

    let client = FirestoreClient::new(
        reqwest::Client::new(),
        server.uri(),
        PROJECT_ID,
        "(default)",
        Arc::new(StaticTokenProvider::emulator()),
    );

    (FirestoreProfileRepository::new(Arc::new(client), collection), server)
}
