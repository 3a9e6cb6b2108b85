use zonewalk_core::Zone;

/// Minimal search interface: a node count and neighbour enumeration.
///
/// Nodes are indices in `0..len()`.
pub trait Pather {
    /// Number of nodes.
    fn len(&self) -> usize;

    /// Append the neighbours of `idx` to `buf`, in expansion order.
    /// Implementations must only append; `buf` may hold other nodes' entries.
    fn neighbors(&self, idx: usize, buf: &mut Vec<usize>);
}

impl Pather for Zone {
    #[inline]
    fn len(&self) -> usize {
        Zone::len(self)
    }

    fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        let Some(loc) = self.location(idx) else {
            return;
        };
        let len = Zone::len(self);
        // Out-of-range slots can only come from hand-edited serialized zones.
        buf.extend(loc.neighbors().map(|(_, i)| i).filter(|&i| i < len));
    }
}
