use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Preference storage is unavailable")]
    Unavailable,
    #[error("Failed to read preference: {0}")]
    Read(String),
    #[error("Failed to write preference: {0}")]
    Write(String),
}
