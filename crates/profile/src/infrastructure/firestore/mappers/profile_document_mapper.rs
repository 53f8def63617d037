// crates/profile/src/infrastructure/firestore/mappers/profile_document_mapper.rs

use shared_kernel::infrastructure::firestore::documents::{Document, FirestoreValue, Write, WriteResult};
use crate::domain::entities::Profile;
use crate::domain::repositories::{WriteMode, WriteReceipt};
use crate::domain::value_objects::CreatedAt;

pub struct ProfileDocumentMapper;

impl ProfileDocumentMapper {
    pub const FIELD_EMAIL: &'static str = "email";
    pub const FIELD_DISPLAY_NAME: &'static str = "displayName";
    pub const FIELD_COIN: &'static str = "coin";
    pub const FIELD_CREATED_AT: &'static str = "createdAt";

    /// `email` et `displayName` absents deviennent des `nullValue` explicites.
    pub fn to_write(document_name: String, profile: &Profile, mode: WriteMode) -> Write {
        let mut document = Document::new(document_name)
            .with_field(Self::FIELD_EMAIL, FirestoreValue::string_or_null(profile.email().map(|e| e.as_str())))
            .with_field(
                Self::FIELD_DISPLAY_NAME,
                FirestoreValue::string_or_null(profile.display_name().map(|d| d.as_str())),
            )
            .with_field(Self::FIELD_COIN, FirestoreValue::integer(profile.coin().value()));

        let created_at = profile.created_at();
        if let CreatedAt::At(ts) = created_at {
            document = document.with_field(
                Self::FIELD_CREATED_AT,
                FirestoreValue::TimestampValue(ts.to_rfc3339()),
            );
        }

        let mut write = Write::set(document);
        if created_at.is_server_assigned() {
            write = write.with_server_timestamp(Self::FIELD_CREATED_AT);
        }

        match mode {
            WriteMode::Overwrite => write,
            WriteMode::CreateIfAbsent => write.must_not_exist(),
        }
    }

    /// Le premier (et unique) transform est celui de `createdAt`.
    pub fn to_receipt(profile: &Profile, result: Option<&WriteResult>) -> WriteReceipt {
        let created_at = match profile.created_at() {
            CreatedAt::At(ts) => Some(ts),
            CreatedAt::ServerTimestamp => result.and_then(|r| r.transform_timestamp(0)),
        };

        WriteReceipt {
            created_at,
            update_time: result.and_then(WriteResult::update_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DisplayName, Email, UserId};
    use serde_json::json;

    const NAME: &str = "projects/p/databases/(default)/documents/users/abc123";

    #[test]
    fn test_full_profile_document() {
        let profile = Profile::new_default(
            UserId::try_new("abc123").unwrap(),
            Some(Email::from_raw("a@example.com")),
            Some(DisplayName::from_raw("Ada")),
        );

        let write = ProfileDocumentMapper::to_write(NAME.into(), &profile, WriteMode::Overwrite);

        assert_eq!(
            serde_json::to_value(&write).unwrap(),
            json!({
                "update": {
                    "name": NAME,
                    "fields": {
                        "email": { "stringValue": "a@example.com" },
                        "displayName": { "stringValue": "Ada" },
                        "coin": { "integerValue": "0" }
                    }
                },
                "updateTransforms": [
                    { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
                ]
            })
        );
    }

    #[test]
    fn test_absent_fields_are_explicit_nulls() {
        let profile = Profile::new_default(UserId::try_new("xyz789").unwrap(), None, None);

        let write = ProfileDocumentMapper::to_write(NAME.into(), &profile, WriteMode::CreateIfAbsent);
        let body = serde_json::to_value(&write).unwrap();

        assert_eq!(body["update"]["fields"]["email"], json!({ "nullValue": null }));
        assert_eq!(body["update"]["fields"]["displayName"], json!({ "nullValue": null }));
        assert_eq!(body["currentDocument"], json!({ "exists": false }));
    }

    #[test]
    fn test_resolved_timestamp_is_written_as_value() {
        use crate::domain::builders::ProfileBuilder;
        use crate::domain::value_objects::{CoinBalance, CreatedAt};
        use chrono::{TimeZone, Utc};

        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let profile = ProfileBuilder::restore(
            UserId::try_new("abc123").unwrap(),
            None,
            None,
            CoinBalance::from_raw(0),
            CreatedAt::At(ts),
        );

        let write = ProfileDocumentMapper::to_write(NAME.into(), &profile, WriteMode::Overwrite);
        let body = serde_json::to_value(&write).unwrap();

        assert_eq!(body["update"]["fields"]["createdAt"], json!({ "timestampValue": "2025-03-01T10:00:00+00:00" }));
        assert!(body.get("updateTransforms").is_none());
        assert_eq!(ProfileDocumentMapper::to_receipt(&profile, None).created_at, Some(ts));
    }

    #[test]
    fn test_receipt_without_write_result() {
        let profile = Profile::new_default(UserId::try_new("abc123").unwrap(), None, None);
        assert_eq!(ProfileDocumentMapper::to_receipt(&profile, None), WriteReceipt::default());
    }
}
