//! Zone graph cache: built zones keyed by zone name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use zonewalk_core::Zone;

use crate::error::CacheError;

/// Key-value store of built zones, keyed by zone name.
///
/// `put` replaces any previous zone under the same name as a whole; readers
/// holding the old `Arc` keep a consistent view.
#[async_trait]
pub trait ZoneCache: Send + Sync {
    async fn put(&self, name: &str, zone: Zone) -> Result<(), CacheError>;
    async fn get(&self, name: &str) -> Result<Option<Arc<Zone>>, CacheError>;
}

#[async_trait]
impl<C: ZoneCache + ?Sized> ZoneCache for Arc<C> {
    async fn put(&self, name: &str, zone: Zone) -> Result<(), CacheError> {
        (**self).put(name, zone).await
    }

    async fn get(&self, name: &str) -> Result<Option<Arc<Zone>>, CacheError> {
        (**self).get(name).await
    }
}

// ── MemoryZoneCache ──

/// In-process cache handing out shared zones.
pub struct MemoryZoneCache {
    inner: RwLock<HashMap<String, Arc<Zone>>>,
}

impl MemoryZoneCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached zones.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached zone names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .read()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for MemoryZoneCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneCache for MemoryZoneCache {
    async fn put(&self, name: &str, zone: Zone) -> Result<(), CacheError> {
        let mut map = self.inner.write().map_err(|_| CacheError::Poisoned)?;
        map.insert(name.to_string(), Arc::new(zone));
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Arc<Zone>>, CacheError> {
        let map = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        Ok(map.get(name).cloned())
    }
}

// ── SerializedZoneCache ──

/// Cache holding each zone as JSON text, the way a remote key-value hash
/// would. Every `get` decodes a fresh zone.
pub struct SerializedZoneCache {
    inner: RwLock<HashMap<String, String>>,
}

impl SerializedZoneCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Raw stored text for `name`.
    pub fn raw(&self, name: &str) -> Option<String> {
        self.inner.read().ok()?.get(name).cloned()
    }

    /// Store raw text under `name`, bypassing encoding.
    pub fn put_raw(&self, name: &str, text: impl Into<String>) -> Result<(), CacheError> {
        let mut map = self.inner.write().map_err(|_| CacheError::Poisoned)?;
        map.insert(name.to_string(), text.into());
        Ok(())
    }
}

impl Default for SerializedZoneCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneCache for SerializedZoneCache {
    async fn put(&self, name: &str, zone: Zone) -> Result<(), CacheError> {
        let text = serde_json::to_string(&zone).map_err(|source| CacheError::Encode {
            name: name.to_string(),
            source,
        })?;
        self.put_raw(name, text)
    }

    async fn get(&self, name: &str) -> Result<Option<Arc<Zone>>, CacheError> {
        let text = {
            let map = self.inner.read().map_err(|_| CacheError::Poisoned)?;
            match map.get(name) {
                Some(text) => text.clone(),
                None => return Ok(None),
            }
        };
        let zone: Zone = serde_json::from_str(&text).map_err(|source| CacheError::Decode {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(Arc::new(zone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonewalk_core::{Direction, RawLocation, RawZone, build_zone};

    fn town() -> Zone {
        let mut well = RawLocation::new("c", "well");
        well.elevation = Some(-2);
        build_zone(
            &RawZone::new("z1", "town")
                .with(
                    RawLocation::new("a", "gate")
                        .link(Direction::E, "b")
                        .exit_to("forest", "edge"),
                )
                .with(
                    RawLocation::new("b", "square")
                        .link(Direction::W, "a")
                        .link(Direction::SE, "c"),
                )
                .with(well),
        )
    }

    #[tokio::test]
    async fn memory_cache_put_get() {
        let cache = MemoryZoneCache::new();
        assert!(cache.is_empty());
        cache.put("town", town()).await.unwrap();
        let z = cache.get("town").await.unwrap().unwrap();
        assert_eq!(*z, town());
        assert!(cache.get("forest").await.unwrap().is_none());
        assert_eq!(cache.names(), vec!["town".to_string()]);
    }

    #[tokio::test]
    async fn memory_cache_replaces_whole_zone() {
        let cache = MemoryZoneCache::new();
        cache.put("town", town()).await.unwrap();
        let old = cache.get("town").await.unwrap().unwrap();
        cache
            .put("town", build_zone(&RawZone::new("z2", "town")))
            .await
            .unwrap();
        let new = cache.get("town").await.unwrap().unwrap();
        assert_eq!(old.len(), 3);
        assert_eq!(new.len(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn serialized_cache_round_trips_every_field() {
        let cache = SerializedZoneCache::new();
        cache.put("town", town()).await.unwrap();
        assert!(cache.raw("town").unwrap().contains("forest"));
        let z = cache.get("town").await.unwrap().unwrap();
        assert_eq!(*z, town());
        assert_eq!(z.locations()[2].elevation, Some(-2));
        assert_eq!(z.exits(), &[0]);
    }

    #[tokio::test]
    async fn serialized_cache_reports_corrupt_entries() {
        let cache = SerializedZoneCache::new();
        cache.put_raw("town", "{not json").unwrap();
        let err = cache.get("town").await.unwrap_err();
        assert!(matches!(err, CacheError::Decode { ref name, .. } if name == "town"));
    }

    #[tokio::test]
    async fn shared_cache_through_arc() {
        let cache = Arc::new(MemoryZoneCache::new());
        let shared: Arc<MemoryZoneCache> = Arc::clone(&cache);
        shared.put("town", town()).await.unwrap();
        assert!(ZoneCache::get(&cache, "town").await.unwrap().is_some());
    }
}
