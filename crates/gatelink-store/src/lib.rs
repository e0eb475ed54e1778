//! Configuration persistence for GateLink installations.
//!
//! The relay board keeps the authoritative state; there is no way to read
//! it back over SMS. This crate owns the local mirror of that state: the
//! JSON profile a phone or workstation keeps between sessions, plus the
//! portable backup envelope used to move a profile to another install.
//!
//! # Components
//!
//! - [`ConfigStore`] - file-backed load/save with atomic replacement
//! - [`BackupEnvelope`] - versioned wrapper for export and import
//!
//! # Examples
//!
//! ```no_run
//! use gatelink_store::{ConfigStore, backup};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::new("gatelink.json");
//!
//! // First run yields factory defaults; saving creates the file.
//! let mut config = store.load()?;
//! config.unit_number = Some("0412000000".to_string());
//! store.save(&config)?;
//!
//! // Move the profile to another install.
//! backup::write_backup("gatelink-backup.json", &config)?;
//! let envelope = backup::read_backup("gatelink-backup.json")?;
//! assert_eq!(envelope.data, config);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod error;
pub mod store;

pub use backup::{BACKUP_APP_NAME, BACKUP_VERSION, BackupEnvelope, read_backup, write_backup};
pub use error::{StoreError, StoreResult};
pub use store::ConfigStore;
