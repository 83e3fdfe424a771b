pub mod config;
pub mod db;
pub mod decision;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod messages;
pub mod models;
pub mod recorder;
pub mod rules;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and harnesses embedding the engine.
/// Respects RUST_LOG; falls back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Attesta engine v{}", config::APP_VERSION);
}
