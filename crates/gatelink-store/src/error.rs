use thiserror::Error;

/// Persistence error types for the GateLink configuration store.
///
/// These errors cover filesystem access, JSON encoding, and the
/// integrity checks applied when importing a backup document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Backup document was produced by a different application
    #[error("Backup belongs to '{found}', expected '{expected}'")]
    ForeignBackup { expected: String, found: String },

    /// Backup schema version this build does not understand
    #[error("Unsupported backup version: {found}")]
    UnsupportedVersion { found: u32 },
}

/// Specialized result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
