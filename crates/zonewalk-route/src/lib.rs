//! Cross-zone routing.
//!
//! Built zones live in a [`ZoneCache`], filled from a [`ZoneSource`] by
//! [`initialize`]. [`RouteFinder`] answers queries by chaining zones with
//! [`zone_route`], searching each zone with `zonewalk-paths` and encoding the
//! result into keypad direction codes.
//!
//! ```no_run
//! # async fn demo() -> Result<(), zonewalk_route::SourceError> {
//! use zonewalk_route::{JsonFileSource, MemoryZoneCache, RouteFinder, initialize};
//!
//! let cache = MemoryZoneCache::new();
//! let report = initialize(&JsonFileSource::new("zones.json"), &cache).await?;
//! assert!(report.is_complete());
//!
//! let finder = RouteFinder::new(cache);
//! let codes = finder.find("town", "gate", "forest", "hut", true).await;
//! println!("{codes}");
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
mod finder;
mod init;
mod router;
mod source;

pub use cache::{MemoryZoneCache, SerializedZoneCache, ZoneCache};
pub use error::{CacheError, SourceError};
pub use finder::{Hop, Reachable, Route, RouteFinder};
pub use init::{FailedZone, InitReport, initialize};
pub use router::zone_route;
pub use source::{JsonFileSource, ZoneSource};
pub use zonewalk_paths::{SearchConfig, Strategy};
