// crates/profile/src/infrastructure/bootstrap/provisioner.rs

use std::sync::Arc;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::firestore::factories::FirestoreContext;
use shared_kernel::infrastructure::telemetry::init_tracing;
use crate::application::provision_profile::ProvisionProfileUseCase;
use crate::infrastructure::api::http::router;
use crate::infrastructure::bootstrap::ProvisionerConfig;
use crate::infrastructure::events::AccountEventConsumer;
use crate::infrastructure::firestore::repositories::FirestoreProfileRepository;

pub async fn run_provisioner(service_name: &str) -> AppResult<()> {
    // 1. Initialisation des logs
    init_tracing(service_name)?;
    tracing::info!("🚀 Starting {} Provisioner...", service_name);

    // 2. Configuration via Environnement (avec valeurs par défaut)
    let config = ProvisionerConfig::from_env()?;

    // 3. Client Firestore : une seule fois pour toute la durée du process
    let firestore_ctx = FirestoreContext::builder()?.build()?;
    tracing::info!(
        project = %firestore_ctx.config().project_id,
        database = %firestore_ctx.config().database_id,
        emulator = firestore_ctx.config().emulator,
        "✅ Firestore client ready"
    );

    // 4. Montage : repository -> use case -> consumer
    let repo = Arc::new(FirestoreProfileRepository::new(firestore_ctx.client(), config.collection.clone()));
    let use_case = Arc::new(ProvisionProfileUseCase::new(repo).with_write_mode(config.write_mode));
    let consumer = Arc::new(AccountEventConsumer::new(use_case));

    // 5. Serveur HTTP
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::new(ErrorCode::InternalError, format!("Unable to bind {addr}: {e}")))?;

    tracing::info!(
        %addr,
        collection = %config.collection,
        write_mode = %config.write_mode,
        "📡 Provisioner listening"
    );

    axum::serve(listener, router(consumer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::new(ErrorCode::InternalError, format!("HTTP server error: {e}")))?;

    tracing::info!("👋 {} provisioner exited clean", service_name);
    Ok(())
}

/// Ctrl+C ou SIGTERM (arrêt d'instance par la plateforme)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("❌ Unable to listen for SIGTERM: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received, draining in-flight events...");
}
