//! Zone definition sources: where raw zone records come from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use zonewalk_core::RawZone;

use crate::error::SourceError;

/// Read-only provider of the full set of raw zone records.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Fetch a complete snapshot of every zone definition.
    async fn snapshot(&self) -> Result<Vec<RawZone>, SourceError>;
}

/// A fixed, in-memory snapshot.
#[async_trait]
impl ZoneSource for Vec<RawZone> {
    async fn snapshot(&self) -> Result<Vec<RawZone>, SourceError> {
        Ok(self.clone())
    }
}

/// A JSON file holding an array of raw zone records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ZoneSource for JsonFileSource {
    async fn snapshot(&self) -> Result<Vec<RawZone>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let zones: Vec<RawZone> =
            serde_json::from_str(&text).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("read {} zone records from {}", zones.len(), self.path.display());
        Ok(zones)
    }
}
