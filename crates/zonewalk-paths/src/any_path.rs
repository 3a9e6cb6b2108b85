//! First-found depth-first search.

use crate::search::LocationSearch;
use crate::traits::Pather;

impl LocationSearch {
    /// Find some path from `from` to `to`.
    ///
    /// Depth-first, expanding neighbours in the order the pather yields them
    /// (clockwise from north for zones) and never entering a location twice.
    /// The first path found is returned, destination-first. It is not
    /// necessarily short, but it is deterministic for a given graph.
    pub fn any_path<P: Pather>(&mut self, pather: &P, from: usize, to: usize) -> Option<Vec<usize>> {
        let len = pather.len();
        if from >= len || to >= len {
            return None;
        }
        self.begin(len);

        self.visit(from);
        if from == to {
            return Some(vec![from]);
        }
        self.push_frame(pather, from, 0);

        while let Some(step) = self.next_child() {
            let Some((height, child)) = step else {
                self.pop_frame();
                continue;
            };
            if self.is_visited(child) {
                continue;
            }
            self.visit(child);
            if child == to {
                let mut path = Vec::with_capacity(self.frames.len() + 1);
                path.push(child);
                path.extend(self.frames.iter().rev().map(|f| f.node));
                self.unwind();
                log::debug!("any-path: {} -> {} in {} steps", from, to, path.len() - 1);
                return Some(path);
            }
            self.push_frame(pather, child, height + 1);
        }

        log::debug!("any-path: {} -> {} unreachable", from, to);
        None
    }
}

#[cfg(test)]
mod tests {
    use zonewalk_core::{Direction, Location, Zone, encode_path};

    use crate::LocationSearch;

    fn line() -> Zone {
        Zone::from_locations(
            "z",
            "line",
            vec![
                Location::new("p1", "P1").with_neighbor(Direction::E, 1),
                Location::new("p2", "P2").with_neighbor(Direction::E, 2),
                Location::new("p3", "P3"),
            ],
        )
    }

    #[test]
    fn straight_line_encodes_east_east() {
        let z = line();
        let mut s = LocationSearch::new();
        let path = s.any_path(&z, 0, 2).unwrap();
        assert_eq!(path, vec![2, 1, 0]);
        assert_eq!(encode_path(&z, &path), "66");
    }

    #[test]
    fn same_location_is_trivial() {
        let z = line();
        let mut s = LocationSearch::new();
        assert_eq!(s.any_path(&z, 1, 1), Some(vec![1]));
    }

    #[test]
    fn one_way_links_block_the_way_back() {
        let z = line();
        let mut s = LocationSearch::new();
        assert_eq!(s.any_path(&z, 2, 0), None);
    }

    #[test]
    fn out_of_range_endpoints_fail() {
        let z = line();
        let mut s = LocationSearch::new();
        assert_eq!(s.any_path(&z, 0, 7), None);
        assert_eq!(s.any_path(&z, 7, 0), None);
    }

    #[test]
    fn takes_first_branch_clockwise_not_shortest() {
        // 0 -N-> 1 -E-> 2 -S-> 3, and 0 -E-> 3 directly.
        let z = Zone::from_locations(
            "z",
            "loop",
            vec![
                Location::new("a", "A")
                    .with_neighbor(Direction::N, 1)
                    .with_neighbor(Direction::E, 3),
                Location::new("b", "B").with_neighbor(Direction::E, 2),
                Location::new("c", "C").with_neighbor(Direction::S, 3),
                Location::new("d", "D"),
            ],
        );
        let mut s = LocationSearch::new();
        let path = s.any_path(&z, 0, 3).unwrap();
        assert_eq!(encode_path(&z, &path), "862");
    }

    #[test]
    fn cycles_terminate() {
        let z = Zone::from_locations(
            "z",
            "ring",
            vec![
                Location::new("a", "A")
                    .with_neighbor(Direction::E, 1)
                    .with_neighbor(Direction::W, 2),
                Location::new("b", "B").with_neighbor(Direction::E, 2),
                Location::new("c", "C").with_neighbor(Direction::E, 0),
                Location::new("d", "island"),
            ],
        );
        let mut s = LocationSearch::new();
        assert_eq!(s.any_path(&z, 0, 3), None);
        // Scratch state is reusable after a failed search.
        assert_eq!(s.any_path(&z, 0, 2), Some(vec![2, 1, 0]));
    }

    #[test]
    fn repeated_searches_agree() {
        let z = line();
        let mut s = LocationSearch::new();
        let first = s.any_path(&z, 0, 2);
        for _ in 0..5 {
            assert_eq!(s.any_path(&z, 0, 2), first);
        }
    }
}
