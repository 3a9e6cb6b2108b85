use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to a zone cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("zone {name:?} could not be encoded")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("zone {name:?} could not be decoded")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("zone cache lock poisoned")]
    Poisoned,
    #[error("zone cache backend: {0}")]
    Backend(String),
}

/// Failure fetching the zone definition snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading zone definitions from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing zone definitions from {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("zone definition source: {0}")]
    Backend(String),
}
