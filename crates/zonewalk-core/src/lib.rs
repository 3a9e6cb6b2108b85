//! **zonewalk-core**: zone graph model.
//!
//! A game world is a set of named zones. Each zone is a graph of locations
//! linked in up to eight compass directions; some locations are transition
//! points leading into another zone. This crate holds the immutable graph
//! types, the builder turning raw records into graphs, and the encoder
//! turning a location path into keypad direction codes.

pub mod builder;
pub mod direction;
pub mod encode;
pub mod raw;
pub mod zone;

pub use builder::build_zone;
pub use direction::{Direction, NO_DIRECTION};
pub use encode::{encode_path, is_corrupt};
pub use raw::{RawLocation, RawZone};
pub use zone::{Location, Transition, Zone};
