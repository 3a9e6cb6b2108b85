//! Bulk initialization of a zone cache from a definition source.

use serde::{Deserialize, Serialize};
use zonewalk_core::build_zone;

use crate::cache::ZoneCache;
use crate::error::SourceError;
use crate::source::ZoneSource;

/// A zone that could not be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedZone {
    pub name: String,
    pub reason: String,
}

/// Outcome of [`initialize`]: which zones made it into the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitReport {
    /// Zone names stored, in snapshot order.
    pub loaded: Vec<String>,
    /// Zones whose `put` failed, in snapshot order.
    pub failed: Vec<FailedZone>,
}

impl InitReport {
    /// Every zone of the snapshot was stored.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Build every zone of the source's snapshot and store it in `cache`.
///
/// Only a failure to read the snapshot is an error. A zone the cache refuses
/// is logged, recorded in the report and skipped; the rest still load.
pub async fn initialize<S, C>(source: &S, cache: &C) -> Result<InitReport, SourceError>
where
    S: ZoneSource + ?Sized,
    C: ZoneCache + ?Sized,
{
    let raw_zones = source.snapshot().await?;
    let mut report = InitReport::default();

    for raw in &raw_zones {
        let zone = build_zone(raw);
        match cache.put(&raw.name, zone).await {
            Ok(()) => report.loaded.push(raw.name.clone()),
            Err(e) => {
                log::warn!("zone {:?} not cached: {}", raw.name, e);
                report.failed.push(FailedZone {
                    name: raw.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "zone cache initialized: {} loaded, {} failed",
        report.loaded.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use zonewalk_core::{RawLocation, RawZone, Zone};

    use super::*;
    use crate::cache::MemoryZoneCache;
    use crate::error::CacheError;

    /// Refuses zones whose name starts with "bad".
    struct PickyCache(MemoryZoneCache);

    #[async_trait]
    impl ZoneCache for PickyCache {
        async fn put(&self, name: &str, zone: Zone) -> Result<(), CacheError> {
            if name.starts_with("bad") {
                return Err(CacheError::Backend("write refused".into()));
            }
            self.0.put(name, zone).await
        }

        async fn get(&self, name: &str) -> Result<Option<Arc<Zone>>, CacheError> {
            self.0.get(name).await
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl ZoneSource for BrokenSource {
        async fn snapshot(&self) -> Result<Vec<RawZone>, SourceError> {
            Err(SourceError::Backend("offline".into()))
        }
    }

    #[tokio::test]
    async fn loads_every_zone() {
        let source = vec![
            RawZone::new("1", "town").with(RawLocation::new("a", "gate")),
            RawZone::new("2", "forest"),
        ];
        let cache = MemoryZoneCache::new();
        let report = initialize(&source, &cache).await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.loaded, vec!["town", "forest"]);
        assert_eq!(cache.get("town").await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reports_refused_zones_and_keeps_going() {
        let source = vec![
            RawZone::new("1", "town"),
            RawZone::new("2", "bad-lands"),
            RawZone::new("3", "forest"),
        ];
        let cache = PickyCache(MemoryZoneCache::new());
        let report = initialize(&source, &cache).await.unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.loaded, vec!["town", "forest"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "bad-lands");
        assert!(report.failed[0].reason.contains("write refused"));
        assert!(cache.get("bad-lands").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn source_failure_is_an_error() {
        let cache = MemoryZoneCache::new();
        assert!(initialize(&BrokenSource, &cache).await.is_err());
        assert!(cache.is_empty());
    }
}
