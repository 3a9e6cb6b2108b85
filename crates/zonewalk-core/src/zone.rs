//! Built zone graph: [`Location`], [`Transition`] and [`Zone`].
//!
//! A location refers to its neighbours by their index in the owning zone's
//! location list. Links are directed: `a --E--> b` says nothing about
//! `b --W--> a`, and one-way passages are legal.

use crate::direction::Direction;

/// Where a transition point leads: a location in another zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Name of the target zone.
    pub zone: String,
    /// Name of the location the walker arrives at in the target zone.
    pub location: String,
}

impl Transition {
    pub fn new(zone: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            location: location.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A node of a zone graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Neighbour index per direction, in [`Direction::ALL`] slot order.
    dirs: [Option<usize>; 8],
    /// Set when this location is an exit to another zone.
    pub transition: Option<Transition>,
    /// Carried over from the source records. No search reads it.
    pub elevation: Option<i32>,
}

impl Location {
    /// A location with no neighbours and no transition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dirs: [None; 8],
            transition: None,
            elevation: None,
        }
    }

    /// Neighbour index in direction `d`, if any.
    #[inline]
    pub fn neighbor(&self, d: Direction) -> Option<usize> {
        self.dirs[d.slot()]
    }

    /// Point direction `d` at `target` (or clear it with `None`).
    pub fn set_neighbor(&mut self, d: Direction, target: Option<usize>) {
        self.dirs[d.slot()] = target;
    }

    /// Builder-style variant of [`set_neighbor`](Self::set_neighbor).
    pub fn with_neighbor(mut self, d: Direction, target: usize) -> Self {
        self.set_neighbor(d, Some(target));
        self
    }

    /// Builder-style setter for the transition marker.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Linked neighbours in clockwise search order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::CLOCKWISE
            .into_iter()
            .filter_map(|d| self.neighbor(d).map(|i| (d, i)))
    }

    /// The first direction (in [`Direction::SCAN`] order) whose slot points
    /// at `target`.
    pub fn direction_to(&self, target: usize) -> Option<Direction> {
        Direction::SCAN
            .into_iter()
            .find(|&d| self.neighbor(d) == Some(target))
    }

    /// Whether this location links to another zone.
    #[inline]
    pub fn is_exit(&self) -> bool {
        self.transition.is_some()
    }
}

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// A named, self-contained graph of locations.
///
/// Immutable once constructed; share it behind an `Arc` and replace it
/// wholesale on reload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    id: String,
    name: String,
    locations: Vec<Location>,
    /// Indices of locations carrying a transition, in list order.
    exits: Vec<usize>,
}

impl Zone {
    /// Wrap a location list into a zone, deriving the exit list.
    pub fn from_locations(
        id: impl Into<String>,
        name: impl Into<String>,
        locations: Vec<Location>,
    ) -> Self {
        let exits = locations
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_exit())
            .map(|(i, _)| i)
            .collect();
        Self {
            id: id.into(),
            name: name.into(),
            locations,
            exits,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at `idx`, or `None` when out of range.
    #[inline]
    pub fn location(&self, idx: usize) -> Option<&Location> {
        self.locations.get(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Indices of the exit locations, in list order.
    #[inline]
    pub fn exits(&self) -> &[usize] {
        &self.exits
    }

    /// Transitions of the exit locations, in exit order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.exits
            .iter()
            .filter_map(|&i| self.location(i)?.transition.as_ref())
    }

    /// Index of the first location called `name`.
    pub fn location_by_name(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.locations.iter().position(|l| l.name == name)
    }

    /// Index of the first exit leading to the zone called `zone`.
    pub fn exit_to(&self, zone: &str) -> Option<usize> {
        if zone.is_empty() {
            return None;
        }
        self.exits.iter().copied().find(|&i| {
            self.location(i)
                .and_then(|l| l.transition.as_ref())
                .is_some_and(|t| t.zone == zone)
        })
    }

    /// Neighbour of location `idx` in direction `d`.
    #[inline]
    pub fn neighbor(&self, idx: usize, d: Direction) -> Option<usize> {
        self.location(idx)?.neighbor(d)
    }

    /// Follow a direction-code string from `start`.
    ///
    /// Returns the index reached, or `None` if a code is not a direction or
    /// leads through an empty or out-of-range slot.
    pub fn walk(&self, start: usize, codes: &str) -> Option<usize> {
        let mut cur = start;
        self.location(cur)?;
        for c in codes.chars() {
            let d = Direction::from_char(c)?;
            cur = self.neighbor(cur, d)?;
            self.location(cur)?;
        }
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Zone {
        Zone::from_locations(
            "z1",
            "town",
            vec![
                Location::new("a", "gate").with_neighbor(Direction::E, 1),
                Location::new("b", "square")
                    .with_neighbor(Direction::W, 0)
                    .with_neighbor(Direction::N, 2)
                    .with_transition(Transition::new("forest", "edge")),
                Location::new("c", "well").with_transition(Transition::new("cave", "mouth")),
                Location::new("d", "square"),
            ],
        )
    }

    #[test]
    fn exits_are_derived_in_order() {
        let z = sample();
        assert_eq!(z.exits(), &[1, 2]);
        let targets: Vec<_> = z.transitions().map(|t| t.zone.as_str()).collect();
        assert_eq!(targets, ["forest", "cave"]);
    }

    #[test]
    fn name_lookup_takes_first_match() {
        let z = sample();
        assert_eq!(z.location_by_name("square"), Some(1));
        assert_eq!(z.location_by_name("nowhere"), None);
        assert_eq!(z.location_by_name(""), None);
    }

    #[test]
    fn exit_lookup_by_target_zone() {
        let z = sample();
        assert_eq!(z.exit_to("cave"), Some(2));
        assert_eq!(z.exit_to("forest"), Some(1));
        assert_eq!(z.exit_to("town"), None);
    }

    #[test]
    fn neighbors_in_clockwise_order() {
        let z = sample();
        let n: Vec<_> = z.locations()[1].neighbors().collect();
        assert_eq!(n, vec![(Direction::N, 2), (Direction::W, 0)]);
        assert_eq!(z.locations()[1].direction_to(0), Some(Direction::W));
        assert_eq!(z.locations()[1].direction_to(3), None);
    }

    #[test]
    fn walk_follows_codes() {
        let z = sample();
        assert_eq!(z.walk(0, ""), Some(0));
        assert_eq!(z.walk(0, "6"), Some(1));
        assert_eq!(z.walk(0, "68"), Some(2));
        assert_eq!(z.walk(0, "64"), Some(0));
        // Link missing, sentinel, and out-of-range start.
        assert_eq!(z.walk(0, "2"), None);
        assert_eq!(z.walk(0, "-1"), None);
        assert_eq!(z.walk(9, ""), None);
    }
}
