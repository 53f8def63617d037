// crates/profile/src/infrastructure/events/account_event_consumer.rs

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use shared_kernel::errors::{DomainError, Result};
use crate::application::provision_profile::{ProvisionOutcome, ProvisionProfileCommand, ProvisionProfileUseCase};
use crate::domain::value_objects::{DisplayName, Email, UserId};

/// Types d'événements "compte créé" acceptés (legacy trigger, CloudEvents, bus interne).
pub const ACCOUNT_CREATED_EVENT_TYPES: [&str; 3] = [
    "providers/firebase.auth/eventTypes/user.create",
    "google.firebase.auth.user.v1.created",
    "account.created",
];

/// Le contrat local : on ne définit que ce qui nous intéresse.
/// Le type peut arriver en `eventType`, en `type` ou sous `context.eventType`
/// (enveloppe des background functions).
#[derive(Debug, Deserialize)]
struct IncomingEnvelope {
    #[serde(rename = "eventType")]
    event_type: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    context: Option<EventContext>,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct EventContext {
    #[serde(rename = "eventType")]
    event_type: Option<String>,
}

impl IncomingEnvelope {
    fn resolved_event_type(&self) -> Option<&str> {
        [
            self.event_type.as_deref(),
            self.kind.as_deref(),
            self.context.as_ref().and_then(|c| c.event_type.as_deref()),
        ]
        .into_iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
    }
}

fn missing_event_type() -> DomainError {
    DomainError::Validation {
        field: "eventType",
        reason: "Event type is missing, refusing to acknowledge an unclassified event".into(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthUserRecord {
    uid: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeOutcome {
    Handled(ProvisionOutcome),
    /// Événement hors périmètre : acquitté pour ne pas être redélivré
    Ignored { event_type: String },
}

pub struct AccountEventConsumer {
    use_case: Arc<ProvisionProfileUseCase>,
}

impl AccountEventConsumer {
    pub fn new(use_case: Arc<ProvisionProfileUseCase>) -> Self {
        Self { use_case }
    }

    /// Payload "structuré" : le type d'événement est dans le corps.
    pub async fn on_message_received(&self, payload: &[u8]) -> Result<ConsumeOutcome> {
        // 1. On vérifie d'abord si c'est un JSON valide
        let envelope: IncomingEnvelope = serde_json::from_slice(payload).map_err(|e| DomainError::Validation {
            field: "payload",
            reason: format!("Malformed event payload: {e}"),
        })?;

        let event_type = envelope.resolved_event_type().ok_or_else(missing_event_type)?.to_string();
        self.dispatch(&event_type, envelope.data).await
    }

    /// Payload "binaire" (CloudEvents) : le type arrive via l'en-tête `ce-type`,
    /// le corps ne contient que `data`.
    pub async fn on_cloud_event(&self, event_type: &str, payload: &[u8]) -> Result<ConsumeOutcome> {
        if event_type.trim().is_empty() {
            return Err(missing_event_type());
        }

        let data: Value = serde_json::from_slice(payload).map_err(|e| DomainError::Validation {
            field: "payload",
            reason: format!("Malformed event data: {e}"),
        })?;

        self.dispatch(event_type, data).await
    }

    async fn dispatch(&self, event_type: &str, data: Value) -> Result<ConsumeOutcome> {
        // 2. Très important : tous les autres événements sont acquittés sans effet
        if !ACCOUNT_CREATED_EVENT_TYPES.contains(&event_type) {
            tracing::warn!(event_type, "Ignoring unsupported event type");
            return Ok(ConsumeOutcome::Ignored {
                event_type: event_type.to_string(),
            });
        }

        let record: AuthUserRecord = serde_json::from_value(data).map_err(|e| DomainError::Validation {
            field: "data",
            reason: format!("Invalid account record: {e}"),
        })?;

        let command = ProvisionProfileCommand {
            user_id: UserId::try_new(record.uid)?,
            email: record.email.map(Email::from),
            display_name: record.display_name.map(DisplayName::from),
        };

        tracing::debug!(event_type, uid = %command.user_id, "📥 Account created event received");

        let outcome = self.use_case.execute(command).await?;
        Ok(ConsumeOutcome::Handled(outcome))
    }
}
