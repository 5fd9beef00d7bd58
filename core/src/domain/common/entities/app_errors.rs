use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid ingredient catalog: {0}")]
    InvalidCatalog(String),

    #[error("Settings store error: {0}")]
    SettingsStore(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
