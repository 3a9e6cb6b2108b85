//! Path encoding into direction-code strings.

use crate::direction::NO_DIRECTION;
use crate::zone::Zone;

/// Encode a path of location indices into keypad direction codes.
///
/// `path` is destination-first, the order both location searches produce, so
/// pairs are read from the back. Each step emits the code of the first slot
/// of the "from" location pointing at the "to" location. A step with no such
/// slot emits [`NO_DIRECTION`]; callers must treat that as corrupt data.
pub fn encode_path(zone: &Zone, path: &[usize]) -> String {
    let mut out = String::with_capacity(path.len().saturating_sub(1));
    for pair in path.windows(2).rev() {
        let (to, from) = (pair[0], pair[1]);
        match zone.location(from).and_then(|l| l.direction_to(to)) {
            Some(d) => out.push(d.as_char()),
            None => out.push_str(NO_DIRECTION),
        }
    }
    out
}

/// Whether an encoded path contains the no-direction marker.
#[inline]
pub fn is_corrupt(codes: &str) -> bool {
    codes.contains(NO_DIRECTION)
}
