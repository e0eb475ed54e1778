use crate::error::StoreResult;
use gatelink_core::DeviceConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed configuration store.
///
/// One JSON document per device profile. The phone keypad is the only
/// other place this state lives, so the document is written atomically:
/// a temporary sibling file first, then a rename into place, which keeps
/// the previous profile intact if a write is interrupted.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; the first [`save`] creates it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gatelink_store::ConfigStore;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = ConfigStore::new("gatelink.json");
    /// let mut config = store.load()?;
    /// config.unit_number = Some("0412000000".to_string());
    /// store.save(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`save`]: ConfigStore::save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration.
    ///
    /// A missing file is first-run, not an error: factory defaults are
    /// returned and nothing is written until the next [`save`].
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or does not
    /// parse as a configuration document.
    ///
    /// [`save`]: ConfigStore::save
    pub fn load(&self) -> StoreResult<DeviceConfig> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No config at {}, starting from factory defaults",
                    self.path.display()
                );
                return Ok(DeviceConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = serde_json::from_str(&raw)?;
        debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    /// Persist the configuration.
    ///
    /// Creates parent directories as needed. The document is pretty-printed
    /// JSON so a profile stays inspectable and hand-editable.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or the document
    /// cannot be written.
    pub fn save(&self, config: &DeviceConfig) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
