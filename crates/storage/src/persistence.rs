//! Data persistence layer
//!
//! This module provides versioned, checksummed serialization of application
//! state with atomic writes and recovery on first launch.

use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Persistence error types
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// State not initialized
    #[error("State not initialized")]
    NotInitialized,

    /// Corruption detected
    #[error("Corruption detected: {0}")]
    Corruption(String),

    /// Version mismatch
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Found version
        found: u32,
    },
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Versioned state container written to disk
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
struct VersionedState<T> {
    /// Schema version number
    version: u32,
    /// Checksum for corruption detection
    checksum: String,
    /// The actual state data
    data: T,
}

impl<T: Serialize> VersionedState<T> {
    fn new(version: u32, data: T) -> Result<Self> {
        let data_json = serde_json::to_string(&data)?;
        let checksum = format!("{:x}", md5::compute(&data_json));

        Ok(Self { version, checksum, data })
    }

    fn verify_checksum(&self) -> Result<()> {
        let data_json = serde_json::to_string(&self.data)?;
        let computed = format!("{:x}", md5::compute(&data_json));

        if computed != self.checksum {
            return Err(PersistenceError::Corruption(format!(
                "Checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }

        Ok(())
    }
}

/// Persistence configuration
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Path to the persistence file
    pub path: PathBuf,
    /// Current schema version
    pub version: u32,
    /// Enable atomic writes with temp files
    pub atomic_writes: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("state.json"),
            version: 1,
            atomic_writes: true,
        }
    }
}

impl PersistenceConfig {
    /// Create a new configuration
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable atomic writes
    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }
}

/// Persisted state manager
///
/// Holds an in-memory copy of the state and writes every update through to
/// disk. Cloning shares the same underlying state.
#[derive(Clone)]
pub struct PersistedState<T> {
    config: PersistenceConfig,
    state: Arc<RwLock<Option<T>>>,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned + Clone + Default,
{
    /// Create a new persisted state manager
    pub fn new(config: PersistenceConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(None)),
        }
    }

    /// Initialize by loading from disk
    ///
    /// A missing file is not an error: the state starts from `T::default()`
    /// and the file is created on the first write.
    pub async fn init(&self) -> Result<()> {
        match self.load_from_disk().await {
            Ok(data) => {
                let mut state = self.state.write().await;
                *state = Some(data);
                Ok(())
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut state = self.state.write().await;
                *state = Some(T::default());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Get the current state
    pub async fn get(&self) -> Result<T> {
        let state = self.state.read().await;
        state.clone().ok_or(PersistenceError::NotInitialized)
    }

    /// Update the state and persist to disk
    pub async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.state.write().await;

        if let Some(current) = state.as_mut() {
            f(current);
            self.write_to_disk(current).await?;
            Ok(())
        } else {
            Err(PersistenceError::NotInitialized)
        }
    }

    /// Set the entire state and persist
    pub async fn set(&self, new_state: T) -> Result<()> {
        let mut state = self.state.write().await;
        *state = Some(new_state.clone());
        self.write_to_disk(&new_state).await
    }

    /// Clear the persisted state
    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        *state = Some(T::default());

        if self.config.path.exists() {
            fs::remove_file(&self.config.path).await?;
        }

        Ok(())
    }

    /// Load state from disk
    async fn load_from_disk(&self) -> Result<T> {
        let contents = fs::read_to_string(&self.config.path).await?;

        let versioned: VersionedState<T> = serde_json::from_str(&contents)?;

        versioned.verify_checksum()?;

        if versioned.version != self.config.version {
            return Err(PersistenceError::VersionMismatch {
                expected: self.config.version,
                found: versioned.version,
            });
        }

        Ok(versioned.data)
    }

    /// Write state to disk
    async fn write_to_disk(&self, data: &T) -> Result<()> {
        let versioned = VersionedState::new(self.config.version, data.clone())?;
        let json = serde_json::to_string_pretty(&versioned)?;

        if self.config.atomic_writes {
            self.write_atomic(&json).await?;
        } else {
            fs::write(&self.config.path, json).await?;
        }

        tracing::debug!(path = %self.config.path.display(), "persisted state written");

        Ok(())
    }

    /// Write atomically using temp file + rename
    async fn write_atomic(&self, contents: &str) -> Result<()> {
        let temp_path = self.config.path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.config.path).await?;

        Ok(())
    }
}
