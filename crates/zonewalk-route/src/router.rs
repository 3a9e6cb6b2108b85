//! Zone-level routing over transition points.

use std::collections::HashSet;
use std::sync::Arc;

use zonewalk_core::Zone;

use crate::cache::ZoneCache;

/// A zone on the router's work stack and the next exit to try.
struct ZoneFrame {
    zone: Arc<Zone>,
    next_exit: usize,
}

/// Find a chain of zones leading from `from` to `to`.
///
/// Depth-first over each zone's exits in authoring order, fetching zones
/// from `cache` as they are reached; the first chain found wins, not the
/// shortest. The result is destination-first and ends with `from`. A zone
/// the cache cannot produce is a dead end. Returns `None` when `to` cannot be
/// reached.
pub async fn zone_route<C>(cache: &C, from: &str, to: &str) -> Option<Vec<Arc<Zone>>>
where
    C: ZoneCache + ?Sized,
{
    let mut visited: HashSet<String> = HashSet::new();

    let root = fetch(cache, from).await?;
    visited.insert(from.to_string());
    if root.name() == to {
        return Some(vec![root]);
    }

    let mut stack = vec![ZoneFrame {
        zone: root,
        next_exit: 0,
    }];

    while let Some(top) = stack.last_mut() {
        let Some(&exit) = top.zone.exits().get(top.next_exit) else {
            stack.pop();
            continue;
        };
        top.next_exit += 1;
        let Some(target) = top
            .zone
            .location(exit)
            .and_then(|l| l.transition.as_ref())
            .map(|t| t.zone.clone())
        else {
            continue;
        };

        if visited.contains(&target) {
            continue;
        }
        let Some(zone) = fetch(cache, &target).await else {
            continue;
        };
        visited.insert(target);

        if zone.name() == to {
            let mut route = Vec::with_capacity(stack.len() + 1);
            route.push(zone);
            route.extend(stack.iter().rev().map(|f| Arc::clone(&f.zone)));
            log::debug!("zone route {} -> {}: {} zones", from, to, route.len());
            return Some(route);
        }
        stack.push(ZoneFrame { zone, next_exit: 0 });
    }

    log::debug!("zone route {} -> {}: unreachable", from, to);
    None
}

/// Fetch a zone, treating cache failures as absence.
async fn fetch<C>(cache: &C, name: &str) -> Option<Arc<Zone>>
where
    C: ZoneCache + ?Sized,
{
    if name.is_empty() {
        return None;
    }
    match cache.get(name).await {
        Ok(zone) => zone,
        Err(e) => {
            log::warn!("zone {:?} unavailable: {}", name, e);
            None
        }
    }
}
