use crate::traits::Pather;

/// Default bound on search height for [`LocationSearch::min_height_path`].
pub const MAX_HEIGHT: usize = 300;

/// A location reached by [`LocationSearch::reach_map`], with the fewest
/// steps it was reached in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachNode {
    pub index: usize,
    pub steps: usize,
}

/// Which location search a route uses inside each zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// First path found by a clockwise depth-first search.
    #[default]
    AnyPath,
    /// Height-bounded search that keeps improving on shorter arrivals.
    MinHeight,
}

impl Strategy {
    /// `MinHeight` when `minimal` is set, `AnyPath` otherwise.
    #[inline]
    pub fn from_minimal(minimal: bool) -> Self {
        if minimal {
            Strategy::MinHeight
        } else {
            Strategy::AnyPath
        }
    }
}

/// Tunables for the location searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Branches deeper than this many steps are abandoned by the min-height
    /// search.
    pub max_height: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_height: MAX_HEIGHT,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal work-stack frame
// ---------------------------------------------------------------------------

/// One location on the depth-first work stack. Its pending neighbours live in
/// `LocationSearch::nbuf[next..end]`; the frame owns `nbuf[start..end]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: usize,
    pub(crate) height: usize,
    pub(crate) start: usize,
    pub(crate) next: usize,
    pub(crate) end: usize,
    /// Some neighbour branch reached the destination.
    pub(crate) found: bool,
}

// ---------------------------------------------------------------------------
// LocationSearch
// ---------------------------------------------------------------------------

/// Scratch state for searches inside a single zone.
///
/// Visited marks and best heights are stamped with a generation counter, so
/// starting a new search costs nothing beyond growing the buffers for a
/// larger zone. One value serves one route computation at a time; concurrent
/// routes each own their own.
pub struct LocationSearch {
    pub(crate) config: SearchConfig,
    pub(crate) stamps: Vec<u32>,
    pub(crate) best: Vec<usize>,
    pub(crate) generation: u32,
    pub(crate) frames: Vec<Frame>,
    pub(crate) nbuf: Vec<usize>,
    pub(crate) result: Vec<usize>,
    pub(crate) reach_results: Vec<ReachNode>,
}

impl Default for LocationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSearch {
    /// Create a search with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a search with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            stamps: Vec::new(),
            best: Vec::new(),
            generation: 0,
            frames: Vec::new(),
            nbuf: Vec::with_capacity(64),
            result: Vec::new(),
            reach_results: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run the search selected by `strategy`.
    ///
    /// Returns the path destination-first, or `None` when the destination was
    /// not reached.
    pub fn path<P: Pather>(
        &mut self,
        strategy: Strategy,
        pather: &P,
        from: usize,
        to: usize,
    ) -> Option<Vec<usize>> {
        match strategy {
            Strategy::AnyPath => self.any_path(pather, from, to),
            Strategy::MinHeight => self.min_height_path(pather, from, to),
        }
    }

    // -----------------------------------------------------------------------
    // Shared helpers
    // -----------------------------------------------------------------------

    /// Invalidate all marks and size the buffers for `len` nodes.
    pub(crate) fn begin(&mut self, len: usize) {
        if self.stamps.len() < len {
            self.stamps.resize(len, 0);
            self.best.resize(len, usize::MAX);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would look current again.
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.generation = 1;
        }
        self.frames.clear();
        self.nbuf.clear();
        self.result.clear();
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.stamps[idx] == self.generation
    }

    #[inline]
    pub(crate) fn visit(&mut self, idx: usize) {
        self.stamps[idx] = self.generation;
    }

    /// Smallest height `idx` has been reached at during this search.
    #[inline]
    pub(crate) fn best_height(&self, idx: usize) -> Option<usize> {
        self.is_visited(idx).then(|| self.best[idx])
    }

    #[inline]
    pub(crate) fn set_best_height(&mut self, idx: usize, height: usize) {
        self.visit(idx);
        self.best[idx] = height;
    }

    /// Push `node` on the work stack with its neighbours queued.
    pub(crate) fn push_frame<P: Pather>(&mut self, pather: &P, node: usize, height: usize) {
        let start = self.nbuf.len();
        pather.neighbors(node, &mut self.nbuf);
        self.frames.push(Frame {
            node,
            height,
            start,
            next: start,
            end: self.nbuf.len(),
            found: false,
        });
    }

    /// Pop the top frame and release its neighbour slice.
    pub(crate) fn pop_frame(&mut self) -> Option<Frame> {
        let f = self.frames.pop()?;
        self.nbuf.truncate(f.start);
        Some(f)
    }

    /// Take the next pending neighbour of the top frame.
    ///
    /// Returns `None` when the stack is empty, `Some(None)` when the top
    /// frame is exhausted, and `Some(Some((parent_height, child)))` otherwise.
    pub(crate) fn next_child(&mut self) -> Option<Option<(usize, usize)>> {
        let top = self.frames.last_mut()?;
        if top.next == top.end {
            return Some(None);
        }
        let child = self.nbuf[top.next];
        top.next += 1;
        Some(Some((top.height, child)))
    }

    /// Drop the work stack after an early exit.
    pub(crate) fn unwind(&mut self) {
        self.frames.clear();
        self.nbuf.clear();
    }
}
