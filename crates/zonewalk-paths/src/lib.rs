//! Location searches inside a single zone.
//!
//! All searches run through [`LocationSearch`], which owns the visited marks,
//! the explicit work stack and the result buffers, so repeated queries reuse
//! their allocations and deep graphs never recurse on the native stack.
//!
//! - **Any-path**: first path found, clockwise depth-first
//!   ([`LocationSearch::any_path`])
//! - **Min-height**: height-bounded search favouring short paths
//!   ([`LocationSearch::min_height_path`])
//! - **Reach map**: everything reachable within a step budget
//!   ([`LocationSearch::reach_map`])
//!
//! Paths are returned destination-first, the order
//! [`zonewalk_core::encode_path`] expects.

mod any_path;
mod min_height;
mod reach;
mod search;
mod traits;

pub use search::{LocationSearch, MAX_HEIGHT, ReachNode, SearchConfig, Strategy};
pub use traits::Pather;
