//! End-to-end route queries across zones.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use zonewalk_core::{Zone, encode_path, is_corrupt};
use zonewalk_paths::{LocationSearch, SearchConfig, Strategy};

use crate::cache::ZoneCache;
use crate::router::zone_route;

/// The part of a route inside one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Zone walked through.
    pub zone: String,
    /// Location names visited, first to last.
    pub locations: Vec<String>,
    /// Direction codes for this zone.
    pub codes: String,
}

/// A complete route: one hop per zone, in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub hops: Vec<Hop>,
    /// Every hop's codes concatenated.
    pub codes: String,
}

/// A location found by [`RouteFinder::reachable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reachable {
    pub name: String,
    pub steps: usize,
}

/// Answers route queries against a zone cache.
///
/// Each query owns its own search state, so one finder can serve concurrent
/// queries over a shared cache.
pub struct RouteFinder<C> {
    cache: C,
    config: SearchConfig,
}

impl<C: ZoneCache> RouteFinder<C> {
    pub fn new(cache: C) -> Self {
        Self::with_config(cache, SearchConfig::default())
    }

    pub fn with_config(cache: C, config: SearchConfig) -> Self {
        Self { cache, config }
    }

    #[inline]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Direction codes leading from `from_location` in `from_zone` to
    /// `to_location` in `to_zone`.
    ///
    /// `minimal` selects the min-height search inside each zone instead of
    /// the first path found. An empty string means no route, or that start
    /// and destination are the same location; use
    /// [`find_route`](Self::find_route) to tell the two apart.
    pub async fn find(
        &self,
        from_zone: &str,
        from_location: &str,
        to_zone: &str,
        to_location: &str,
        minimal: bool,
    ) -> String {
        self.find_route(
            from_zone,
            from_location,
            to_zone,
            to_location,
            Strategy::from_minimal(minimal),
        )
        .await
        .map(|r| r.codes)
        .unwrap_or_default()
    }

    /// Full route with per-zone detail, or `None` when unreachable.
    ///
    /// Zones are chained by the zone router. Inside each zone the walk runs
    /// from the arrival location to the exit leading into the next zone (the
    /// first exit targeting it) or, in the last zone, to `to_location`.
    /// Crossing an exit arrives at the location its transition names. Any
    /// zone that cannot be crossed fails the whole route.
    pub async fn find_route(
        &self,
        from_zone: &str,
        from_location: &str,
        to_zone: &str,
        to_location: &str,
        strategy: Strategy,
    ) -> Option<Route> {
        let mut zones = zone_route(&self.cache, from_zone, to_zone).await?;
        zones.reverse();

        let mut search = LocationSearch::with_config(self.config);
        let mut hops = Vec::with_capacity(zones.len());
        let mut arrival = from_location.to_string();

        for (i, zone) in zones.iter().enumerate() {
            let next = zones.get(i + 1).map(Arc::as_ref);
            let crossing = cross_zone(&mut search, strategy, zone, next, &arrival, to_location)?;
            if let Some(t) = zone
                .location(crossing.end)
                .and_then(|l| l.transition.as_ref())
            {
                arrival = t.location.clone();
            }
            hops.push(crossing.hop);
        }

        let codes: String = hops.iter().map(|h| h.codes.as_str()).collect();
        log::debug!(
            "route {}/{} -> {}/{}: {} zones, {} steps",
            from_zone,
            from_location,
            to_zone,
            to_location,
            hops.len(),
            codes.len()
        );
        Some(Route { hops, codes })
    }

    /// Locations of `zone` within `max_steps` of `location`, nearest
    /// discovery first. `None` when the zone or location is unknown.
    pub async fn reachable(
        &self,
        zone: &str,
        location: &str,
        max_steps: usize,
    ) -> Option<Vec<Reachable>> {
        let zone = self.cache.get(zone).await.ok().flatten()?;
        let start = zone.location_by_name(location)?;
        let mut search = LocationSearch::with_config(self.config);
        let found = search
            .reach_map(&*zone, start, max_steps)
            .iter()
            .map(|n| Reachable {
                name: zone.locations()[n.index].name.clone(),
                steps: n.steps,
            })
            .collect();
        Some(found)
    }
}

/// A walked zone and the index of the location it ended on.
struct Crossing {
    hop: Hop,
    end: usize,
}

/// Walk one zone of a route.
fn cross_zone(
    search: &mut LocationSearch,
    strategy: Strategy,
    zone: &Zone,
    next: Option<&Zone>,
    arrival: &str,
    to_location: &str,
) -> Option<Crossing> {
    let Some(start) = zone.location_by_name(arrival) else {
        log::debug!("zone {:?}: no location {:?}", zone.name(), arrival);
        return None;
    };
    let end = match next {
        Some(n) => zone.exit_to(n.name()),
        None => zone.location_by_name(to_location),
    };
    let Some(end) = end else {
        log::debug!(
            "zone {:?}: no {}",
            zone.name(),
            next.map_or_else(
                || format!("location {to_location:?}"),
                |n| format!("exit to {:?}", n.name())
            )
        );
        return None;
    };

    let Some(path) = search.path(strategy, zone, start, end) else {
        log::debug!(
            "zone {:?}: {:?} cannot reach {:?}",
            zone.name(),
            arrival,
            zone.locations()[end].name
        );
        return None;
    };

    let codes = encode_path(zone, &path);
    if is_corrupt(&codes) {
        log::warn!("zone {:?}: path encoded with a missing link: {}", zone.name(), codes);
        return None;
    }

    let locations = path
        .iter()
        .rev()
        .map(|&i| zone.locations()[i].name.clone())
        .collect();
    Some(Crossing {
        hop: Hop {
            zone: zone.name().to_string(),
            locations,
            codes,
        },
        end,
    })
}
