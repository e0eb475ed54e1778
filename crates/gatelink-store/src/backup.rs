use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use gatelink_core::DeviceConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Application identifier stamped into every backup document.
pub const BACKUP_APP_NAME: &str = "gatelink";

/// Envelope schema version this build writes and understands.
pub const BACKUP_VERSION: u32 = 1;

/// Portable wrapper around a full configuration profile.
///
/// A backup travels between installs as a single JSON document. The
/// envelope records who wrote it and when, so an import can refuse
/// documents from other applications or from a newer schema instead of
/// silently loading garbage into the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupEnvelope {
    pub app_name: String,
    pub version: u32,
    pub timestamp: DateTime<Utc>,
    pub data: DeviceConfig,
}

impl BackupEnvelope {
    /// Wrap a configuration profile, stamped with the current time.
    #[must_use]
    pub fn wrap(config: DeviceConfig) -> Self {
        Self {
            app_name: BACKUP_APP_NAME.to_string(),
            version: BACKUP_VERSION,
            timestamp: Utc::now(),
            data: config,
        }
    }

    /// Serialize the envelope to its portable JSON form.
    ///
    /// # Errors
    ///
    /// Returns error if the profile cannot be encoded.
    pub fn export(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and verify a backup document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ForeignBackup`] for documents stamped by a
    /// different application and [`StoreError::UnsupportedVersion`] for
    /// schema versions this build does not know.
    pub fn parse(raw: &str) -> StoreResult<Self> {
        let envelope: BackupEnvelope = serde_json::from_str(raw)?;

        if envelope.app_name != BACKUP_APP_NAME {
            return Err(StoreError::ForeignBackup {
                expected: BACKUP_APP_NAME.to_string(),
                found: envelope.app_name,
            });
        }
        if envelope.version != BACKUP_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: envelope.version,
            });
        }

        Ok(envelope)
    }
}

/// Write a backup document for the given profile.
///
/// # Errors
///
/// Returns error if the document cannot be encoded or written.
pub fn write_backup(path: impl AsRef<Path>, config: &DeviceConfig) -> StoreResult<()> {
    let path = path.as_ref();
    let envelope = BackupEnvelope::wrap(config.clone());
    fs::write(path, envelope.export()?)?;
    info!("Wrote backup to {}", path.display());
    Ok(())
}

/// Read and verify a backup document.
///
/// # Errors
///
/// Returns error if the file cannot be read or fails envelope checks.
pub fn read_backup(path: impl AsRef<Path>) -> StoreResult<BackupEnvelope> {
    let path = path.as_ref();
    let envelope = BackupEnvelope::parse(&fs::read_to_string(path)?)?;
    info!(
        "Read backup from {} (taken {})",
        path.display(),
        envelope.timestamp
    );
    Ok(envelope)
}
