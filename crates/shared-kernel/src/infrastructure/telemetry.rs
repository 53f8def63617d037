// crates/shared-kernel/src/infrastructure/telemetry.rs

use tracing_subscriber::EnvFilter;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Initialise le subscriber global une seule fois par process.
/// `RUST_LOG` pilote le filtre (défaut `info`), `LOG_FORMAT=json` active la sortie structurée.
pub fn init_tracing(service_name: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| AppError::new(ErrorCode::InternalError, format!("Tracing init failed: {e}")))?;

    tracing::info!(service = service_name, json, "📝 Tracing initialized");
    Ok(())
}
