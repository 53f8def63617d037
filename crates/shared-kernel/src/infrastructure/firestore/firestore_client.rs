// crates/shared-kernel/src/infrastructure/firestore/firestore_client.rs

use std::sync::Arc;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::firestore::auth::AccessTokenProvider;
use crate::infrastructure::firestore::documents::{CommitRequest, CommitResponse, Write};
use crate::infrastructure::firestore::mappers::{app_error_from_status, FirestoreErrorBody};

/// Client REST Firestore partagé par toutes les invocations du process.
/// `reqwest::Client` est déjà `Clone + Send + Sync` (pool de connexions interne).
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    database_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl FirestoreClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        database_id: impl Into<String>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            database_id: database_id.into(),
            tokens,
        }
    }

    /// `projects/{project}/databases/{database}`
    pub fn database_path(&self) -> String {
        format!("projects/{}/databases/{}", self.project_id, self.database_id)
    }

    /// Nom de ressource complet d'un document de premier niveau.
    pub fn document_name(&self, collection: &str, document_id: &str) -> String {
        format!("{}/documents/{}/{}", self.database_path(), collection, document_id)
    }

    /// Commit atomique d'un lot d'écritures. Ne rend la main qu'après l'acquittement du store.
    pub async fn commit(&self, writes: Vec<Write>) -> AppResult<CommitResponse> {
        let url = format!("{}/v1/{}/documents:commit", self.base_url, self.database_path());
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&CommitRequest { writes })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return response.json::<CommitResponse>().await.map_err(|e| {
                AppError::new(
                    ErrorCode::InfrastructureFailure,
                    format!("Unreadable Firestore commit response: {e}"),
                )
            });
        }

        // Le corps d'erreur n'est pas garanti (proxy, timeout LB) : défaut vide
        let raw = response.text().await.unwrap_or_default();
        let body: FirestoreErrorBody = serde_json::from_str(&raw).unwrap_or_default();
        let err = app_error_from_status(status.as_u16(), &body);

        tracing::warn!(
            http_status = status.as_u16(),
            grpc_status = %body.error.status,
            "Firestore commit rejected: {}",
            err.message
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::firestore::auth::StaticTokenProvider;
    use crate::infrastructure::firestore::documents::{Document, FirestoreValue};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str) -> FirestoreClient {
        FirestoreClient::new(
            reqwest::Client::new(),
            format!("{base_url}/"),
            "demo-project",
            "(default)",
            Arc::new(StaticTokenProvider::new("test-token")),
        )
    }

    #[test]
    fn test_document_name() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.document_name("users", "abc123"),
            "projects/demo-project/databases/(default)/documents/users/abc123"
        );
    }

    #[tokio::test]
    async fn test_commit_sends_bearer_and_parses_results() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/projects/demo-project/databases/(default)/documents:commit"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "writes": [{ "update": { "fields": { "coin": { "integerValue": "0" } } } }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "writeResults": [{
                    "updateTime": "2025-03-01T10:15:30.000001Z",
                    "transformResults": [{ "timestampValue": "2025-03-01T10:15:30.000001Z" }]
                }],
                "commitTime": "2025-03-01T10:15:30.000001Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let write = Write::set(
            Document::new(client.document_name("users", "u1")).with_field("coin", FirestoreValue::integer(0)),
        )
        .with_server_timestamp("createdAt");

        let response = client.commit(vec![write]).await.unwrap();

        assert_eq!(response.write_results.len(), 1);
        assert!(response.write_results[0].transform_timestamp(0).is_some());
        assert!(response.commit_time().is_some());
    }

    #[tokio::test]
    async fn test_commit_maps_google_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {
                    "code": 403,
                    "message": "Missing or insufficient permissions.",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(&server)
            .await;

        let err = client(&server.uri()).commit(vec![]).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.message, "Missing or insufficient permissions.");
    }

    #[tokio::test]
    async fn test_commit_unreachable_store_is_unavailable() {
        // Port fermé : la connexion échoue immédiatement
        let err = client("http://127.0.0.1:1").commit(vec![]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
    }
}
