//! Zone graph construction from raw records.

use std::collections::HashMap;

use crate::direction::Direction;
use crate::raw::{RawLocation, RawZone};
use crate::zone::{Location, Transition, Zone};

/// Build a [`Zone`] from its raw record.
///
/// Location order is preserved, so a record's position becomes its index.
/// Neighbour references are resolved by id; empty, absent or dangling
/// references become empty slots. When two records share an id, references
/// resolve to the first one. A transition is kept only when it names a
/// target zone. Never fails.
pub fn build_zone(raw: &RawZone) -> Zone {
    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(raw.locations.len());
    for (i, rl) in raw.locations.iter().enumerate() {
        by_id.entry(rl.id.as_str()).or_insert(i);
    }

    let resolve = |r: Option<&str>| -> Option<usize> {
        let id = r.filter(|s| !s.is_empty())?;
        by_id.get(id).copied()
    };

    let locations = raw
        .locations
        .iter()
        .map(|rl| {
            let mut loc = Location::new(rl.id.clone(), rl.name.clone());
            for d in Direction::ALL {
                loc.set_neighbor(d, resolve(rl.reference(d)));
            }
            loc.transition = transition_of(rl);
            loc.elevation = rl.elevation;
            loc
        })
        .collect();

    Zone::from_locations(raw.id.clone(), raw.name.clone(), locations)
}

fn transition_of(rl: &RawLocation) -> Option<Transition> {
    let zone = rl.skip_zone.as_deref().filter(|z| !z.is_empty())?;
    Some(Transition::new(
        zone,
        rl.skip_location.clone().unwrap_or_default(),
    ))
}
