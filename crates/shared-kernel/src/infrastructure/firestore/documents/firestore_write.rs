// crates/shared-kernel/src/infrastructure/firestore/documents/firestore_write.rs

use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::infrastructure::firestore::documents::firestore_value::parse_timestamp;
use crate::infrastructure::firestore::documents::FirestoreValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub name: String,
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: FirestoreValue) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerValue {
    /// Horodatage attribué par le store au moment du commit
    RequestTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: String,
    pub set_to_server_value: ServerValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Precondition {
    pub exists: bool,
}

/// Une écriture `update` sans `updateMask` remplace le document entier (sémantique "set").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    pub update: Document,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_transforms: Vec<FieldTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_document: Option<Precondition>,
}

impl Write {
    pub fn set(document: Document) -> Self {
        Self {
            update: document,
            update_transforms: Vec::new(),
            current_document: None,
        }
    }

    pub fn with_server_timestamp(mut self, field_path: impl Into<String>) -> Self {
        self.update_transforms.push(FieldTransform {
            field_path: field_path.into(),
            set_to_server_value: ServerValue::RequestTime,
        });
        self
    }

    /// Transforme le "set" en création conditionnelle (échec ALREADY_EXISTS si présent).
    pub fn must_not_exist(mut self) -> Self {
        self.current_document = Some(Precondition { exists: false });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub update_time: Option<String>,
    #[serde(default)]
    pub transform_results: Vec<FirestoreValue>,
}

impl WriteResult {
    pub fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time.as_deref().and_then(parse_timestamp)
    }

    /// Valeur calculée par le serveur pour le transform d'index `index`.
    pub fn transform_timestamp(&self, index: usize) -> Option<DateTime<Utc>> {
        self.transform_results.get(index).and_then(FirestoreValue::as_timestamp)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    #[serde(default)]
    pub write_results: Vec<WriteResult>,
    pub commit_time: Option<String>,
}

impl CommitResponse {
    pub fn commit_time(&self) -> Option<DateTime<Utc>> {
        self.commit_time.as_deref().and_then(parse_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_with_server_timestamp_shape() {
        let write = Write::set(
            Document::new("projects/p/databases/(default)/documents/users/u1")
                .with_field("coin", FirestoreValue::integer(0)),
        )
        .with_server_timestamp("createdAt");

        assert_eq!(
            serde_json::to_value(&write).unwrap(),
            json!({
                "update": {
                    "name": "projects/p/databases/(default)/documents/users/u1",
                    "fields": { "coin": { "integerValue": "0" } }
                },
                "updateTransforms": [
                    { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
                ]
            })
        );
    }

    #[test]
    fn test_must_not_exist_adds_precondition() {
        let write = Write::set(Document::new("doc")).must_not_exist();
        let body = serde_json::to_value(&write).unwrap();

        assert_eq!(body["currentDocument"], json!({ "exists": false }));
        assert!(body.get("updateTransforms").is_none());
    }
}
