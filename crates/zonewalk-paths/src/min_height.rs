//! Height-bounded search that prefers shorter arrivals.
//!
//! The search is depth-first. Every location remembers the smallest height
//! (steps from the source) it has been reached at, and is entered again only
//! from a strictly lower height. Each arrival at the destination replaces
//! the current result, so the answer is the *last* successful branch in
//! clockwise order, which is short in practice but not guaranteed minimal.
//! Branches deeper than [`SearchConfig::max_height`] are dropped silently.
//!
//! [`SearchConfig::max_height`]: crate::SearchConfig::max_height

use crate::search::LocationSearch;
use crate::traits::Pather;

impl LocationSearch {
    /// Find a short path from `from` to `to`, destination-first.
    pub fn min_height_path<P: Pather>(
        &mut self,
        pather: &P,
        from: usize,
        to: usize,
    ) -> Option<Vec<usize>> {
        let len = pather.len();
        if from >= len || to >= len {
            return None;
        }
        self.begin(len);
        let max_height = self.config.max_height;

        self.set_best_height(from, 0);
        if from == to {
            return Some(vec![from]);
        }
        self.push_frame(pather, from, 0);

        while let Some(step) = self.next_child() {
            let Some((parent_height, child)) = step else {
                let Some(done) = self.pop_frame() else {
                    break;
                };
                if !done.found {
                    continue;
                }
                self.result.push(done.node);
                match self.frames.last_mut() {
                    Some(parent) => parent.found = true,
                    None => {
                        let path = std::mem::take(&mut self.result);
                        log::debug!(
                            "min-height: {} -> {} in {} steps",
                            from,
                            to,
                            path.len() - 1
                        );
                        return Some(path);
                    }
                }
                continue;
            };

            let height = parent_height + 1;
            if height > max_height {
                continue;
            }
            if self.best_height(child).is_some_and(|best| height >= best) {
                continue;
            }
            self.set_best_height(child, height);

            if child == to {
                self.result.clear();
                self.result.push(child);
                if let Some(parent) = self.frames.last_mut() {
                    parent.found = true;
                }
                continue;
            }
            self.push_frame(pather, child, height);
        }

        log::debug!("min-height: {} -> {} unreachable", from, to);
        None
    }
}
