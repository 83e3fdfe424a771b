//! Error taxonomy for collaborator calls.
//!
//! The engine performs a single attempt per collaborator call and surfaces
//! failures as one of these categories; retry policy belongs to the caller.
//! Date-parse failures and fraud-case insert failures recover locally and
//! never appear here.

use thiserror::Error;

use crate::db::DatabaseError;

/// Collaborator name used when classifying doctor registry failures.
pub const DOCTOR_REGISTRY: &str = "Doctor Registry";

/// Collaborator name used when classifying fraud case store failures.
pub const FRAUD_CASE_STORE: &str = "Fraud Case Store";

/// Collaborator call timeout reported when a failure is classified as such.
pub const SERVICE_TIMEOUT_SECONDS: u64 = 30;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{service}: service call timed out after {seconds} seconds")]
    Timeout { service: String, seconds: u64 },

    #[error("{service}: failed to connect to service: {details}")]
    Connection { service: String, details: String },

    #[error("{service}: {message}")]
    Service { service: String, message: String },
}

impl EngineError {
    /// Category label for rendering ("configuration" / "timeout" /
    /// "connection" / "error").
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::Configuration(_) => "configuration",
            EngineError::Timeout { .. } => "timeout",
            EngineError::Connection { .. } => "connection",
            EngineError::Service { .. } => "error",
        }
    }
}

/// Adapter at the database boundary: convert a native failure into the
/// engine taxonomy. Timeout and connection failures are recognized by the
/// driver's failure text; everything else is a generic service error.
pub fn classify_database_error(service: &str, error: DatabaseError) -> EngineError {
    let message = error.to_string();
    let lower = message.to_lowercase();

    if lower.contains("timed out") || lower.contains("timeout") {
        tracing::error!(service, error = %message, "collaborator call timed out");
        return EngineError::Timeout {
            service: service.to_string(),
            seconds: SERVICE_TIMEOUT_SECONDS,
        };
    }

    if lower.contains("connection") || lower.contains("connect") || lower.contains("network") {
        tracing::error!(service, error = %message, "collaborator connection failed");
        return EngineError::Connection {
            service: service.to_string(),
            details: message,
        };
    }

    tracing::error!(service, error = %message, "collaborator call failed");
    EngineError::Service {
        service: service.to_string(),
        message,
    }
}
