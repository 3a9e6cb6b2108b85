//! Raw zone records as served by the zone definition source.
//!
//! Neighbours and transitions are named by reference here, not resolved.
//! Every reference is optional and may be dangling; the builder sorts that
//! out.

use crate::direction::Direction;

/// One location record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawLocation {
    pub id: String,
    pub name: String,
    pub n: Option<String>,
    pub s: Option<String>,
    pub e: Option<String>,
    pub w: Option<String>,
    pub ne: Option<String>,
    pub nw: Option<String>,
    pub se: Option<String>,
    pub sw: Option<String>,
    /// Name of the zone this location leads to.
    pub skip_zone: Option<String>,
    /// Name of the location arrived at in `skip_zone`.
    pub skip_location: Option<String>,
    pub elevation: Option<i32>,
}

impl RawLocation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Id referenced in direction `d`.
    pub fn reference(&self, d: Direction) -> Option<&str> {
        let r = match d {
            Direction::N => &self.n,
            Direction::S => &self.s,
            Direction::E => &self.e,
            Direction::W => &self.w,
            Direction::NE => &self.ne,
            Direction::NW => &self.nw,
            Direction::SE => &self.se,
            Direction::SW => &self.sw,
        };
        r.as_deref()
    }

    /// Set the id referenced in direction `d`.
    pub fn set_reference(&mut self, d: Direction, id: impl Into<String>) {
        let r = match d {
            Direction::N => &mut self.n,
            Direction::S => &mut self.s,
            Direction::E => &mut self.e,
            Direction::W => &mut self.w,
            Direction::NE => &mut self.ne,
            Direction::NW => &mut self.nw,
            Direction::SE => &mut self.se,
            Direction::SW => &mut self.sw,
        };
        *r = Some(id.into());
    }

    /// Builder-style variant of [`set_reference`](Self::set_reference).
    pub fn link(mut self, d: Direction, id: impl Into<String>) -> Self {
        self.set_reference(d, id);
        self
    }

    /// Builder-style setter for the transition fields.
    pub fn exit_to(mut self, zone: impl Into<String>, location: impl Into<String>) -> Self {
        self.skip_zone = Some(zone.into());
        self.skip_location = Some(location.into());
        self
    }
}

/// One zone record: identity plus its locations in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawZone {
    pub id: String,
    pub name: String,
    pub locations: Vec<RawLocation>,
}

impl RawZone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            locations: Vec::new(),
        }
    }

    /// Builder-style location append.
    pub fn with(mut self, location: RawLocation) -> Self {
        self.locations.push(location);
        self
    }
}
