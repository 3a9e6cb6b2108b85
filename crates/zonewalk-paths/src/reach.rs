//! Step-limited reachability.

use crate::search::{LocationSearch, ReachNode};
use crate::traits::Pather;

impl LocationSearch {
    /// Every location reachable from `from` in at most `max_steps` steps.
    ///
    /// Locations are listed in discovery order, each once, with the fewest
    /// steps found. The flood re-enters a location only when it arrives with
    /// more of the budget left than before, so the step counts are exact.
    /// `from` itself is always listed with 0 steps; an out-of-range `from`
    /// yields an empty slice.
    pub fn reach_map<P: Pather>(&mut self, pather: &P, from: usize, max_steps: usize) -> &[ReachNode] {
        self.reach_results.clear();
        let len = pather.len();
        if from >= len {
            return &self.reach_results;
        }
        self.begin(len);

        // `result` holds discovery order; steps are read back from `best`.
        self.set_best_height(from, 0);
        self.result.push(from);
        self.push_frame(pather, from, 0);

        while let Some(step) = self.next_child() {
            let Some((parent_steps, child)) = step else {
                self.pop_frame();
                continue;
            };
            let steps = parent_steps + 1;
            if steps > max_steps {
                continue;
            }
            match self.best_height(child) {
                Some(best) if steps >= best => continue,
                Some(_) => {}
                None => self.result.push(child),
            }
            self.set_best_height(child, steps);
            self.push_frame(pather, child, steps);
        }

        let found = std::mem::take(&mut self.result);
        self.reach_results.extend(found.iter().map(|&index| ReachNode {
            index,
            steps: self.best[index],
        }));
        self.result = found;
        &self.reach_results
    }
}

#[cfg(test)]
mod tests {
    use zonewalk_core::{Direction, Location, Zone};

    use crate::{LocationSearch, ReachNode};

    /// 3x3 grid, indices row-major from the north-west corner, all eight
    /// directions linked both ways.
    fn grid3() -> Zone {
        let idx = |x: i32, y: i32| (y * 3 + x) as usize;
        let offsets = [
            (Direction::N, 0, -1),
            (Direction::S, 0, 1),
            (Direction::E, 1, 0),
            (Direction::W, -1, 0),
            (Direction::NE, 1, -1),
            (Direction::NW, -1, -1),
            (Direction::SE, 1, 1),
            (Direction::SW, -1, 1),
        ];
        let mut locations = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                let mut l = Location::new(format!("{x},{y}"), format!("cell {x},{y}"));
                for (d, dx, dy) in offsets {
                    let (nx, ny) = (x + dx, y + dy);
                    if (0..3).contains(&nx) && (0..3).contains(&ny) {
                        l.set_neighbor(d, Some(idx(nx, ny)));
                    }
                }
                locations.push(l);
            }
        }
        Zone::from_locations("g", "grid", locations)
    }

    fn steps_of(nodes: &[ReachNode], index: usize) -> Option<usize> {
        nodes.iter().find(|n| n.index == index).map(|n| n.steps)
    }

    #[test]
    fn zero_budget_is_just_the_start() {
        let z = grid3();
        let mut s = LocationSearch::new();
        assert_eq!(s.reach_map(&z, 4, 0), &[ReachNode { index: 4, steps: 0 }]);
    }

    #[test]
    fn one_step_from_centre_reaches_everything() {
        let z = grid3();
        let mut s = LocationSearch::new();
        let nodes = s.reach_map(&z, 4, 1).to_vec();
        assert_eq!(nodes.len(), 9);
        assert_eq!(nodes[0], ReachNode { index: 4, steps: 0 });
        assert!(nodes[1..].iter().all(|n| n.steps == 1));
    }

    #[test]
    fn step_counts_are_minimal_from_a_corner() {
        let z = grid3();
        let mut s = LocationSearch::new();
        let nodes = s.reach_map(&z, 0, 5).to_vec();
        assert_eq!(nodes.len(), 9);
        assert_eq!(steps_of(&nodes, 0), Some(0));
        assert_eq!(steps_of(&nodes, 4), Some(1));
        assert_eq!(steps_of(&nodes, 2), Some(2));
        assert_eq!(steps_of(&nodes, 8), Some(2));
        assert_eq!(steps_of(&nodes, 6), Some(2));
    }

    #[test]
    fn budget_bounds_the_flood() {
        let z = Zone::from_locations(
            "z",
            "line",
            vec![
                Location::new("a", "A").with_neighbor(Direction::E, 1),
                Location::new("b", "B").with_neighbor(Direction::E, 2),
                Location::new("c", "C").with_neighbor(Direction::E, 3),
                Location::new("d", "D"),
            ],
        );
        let mut s = LocationSearch::new();
        let idx: Vec<_> = s.reach_map(&z, 0, 2).iter().map(|n| n.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert!(s.reach_map(&z, 9, 2).is_empty());
    }
}
