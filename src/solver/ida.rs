use crate::prelude::*;

use smallvec::SmallVec;

/// Iterative-deepening A* over slides of the blank.
pub struct Ida<H: Heuristic> {
    heuristic: H,
}

enum Search {
    Found(Node),
    NotFound,
}

/// Mutable state of one threshold-bounded pass.
struct Session<'a, H> {
    heuristic: &'a H,
    threshold: u32,
    /// Smallest f seen above `threshold` anywhere in the pass.
    next_threshold: u32,
    path: SmallVec<[Direction; 64]>,
    stats: &'a mut Stats,
}

impl<H: Heuristic> Ida<H> {
    pub fn new(heuristic: H) -> Self {
        Ida { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Runs the search to completion, calling `on_threshold` each time the
    /// bound is raised. Unsolvable boards never return.
    pub fn solve_observed(&self, board: &Board, mut on_threshold: impl FnMut(u32)) -> Solution {
        let start = std::time::Instant::now();
        let mut stats = Stats::default();

        let initial_estimate = self.heuristic.estimate(board);
        let mut threshold = initial_estimate;
        let mut thresholds = vec![threshold];

        if initial_estimate == 0 {
            return Solution {
                length: 0,
                moves: Vec::new(),
                initial_estimate,
                thresholds,
                stats,
            };
        }

        loop {
            log::info!("Searching <= {}", threshold);
            stats.iterations += 1;

            let mut root = Node {
                board: *board,
                g: 0,
                f: initial_estimate,
            };
            let mut session = Session {
                heuristic: &self.heuristic,
                threshold,
                next_threshold: u32::MAX,
                path: SmallVec::new(),
                stats: &mut stats,
            };

            match session.search(&mut root, None) {
                Search::Found(node) => {
                    let moves = session.path.to_vec();
                    log::info!(
                        "Found solution of length {} after {} iterations, took {:?}",
                        node.g,
                        stats.iterations,
                        start.elapsed()
                    );
                    return Solution {
                        length: node.g,
                        moves,
                        initial_estimate,
                        thresholds,
                        stats,
                    };
                }
                Search::NotFound => {
                    threshold = session.next_threshold;
                    log::debug!(
                        "Raising threshold to {}, generated {}, expanded {}, took {:?}",
                        threshold,
                        stats.generated,
                        stats.expanded,
                        start.elapsed()
                    );
                    thresholds.push(threshold);
                    on_threshold(threshold);
                }
            }
        }
    }
}

impl<'a, H: Heuristic> Session<'a, H> {
    /// Depth-first search below `node`, which is mutated in place and restored
    /// before returning `NotFound`.
    fn search(&mut self, node: &mut Node, last: Option<Direction>) -> Search {
        let (parent_g, parent_f) = (node.g, node.f);

        for direction in Direction::all() {
            if !node.board.can_slide(direction) {
                continue;
            }
            if let Some(last) = last {
                if !direction.could_follow(last) {
                    continue;
                }
            }

            self.stats.generated += 1;
            node.board.slide(direction);
            let h = self.heuristic.estimate(&node.board);
            node.g = parent_g + 1;
            node.f = node.g + h;

            if node.f > self.threshold {
                self.next_threshold = self.next_threshold.min(node.f);
            } else {
                self.stats.expanded += 1;
                self.path.push(direction);

                if h == 0 {
                    return Search::Found(*node);
                }
                if let Search::Found(solution) = self.search(node, Some(direction)) {
                    return Search::Found(solution);
                }

                self.path.pop();
            }

            node.board.slide(direction.opposite());
            node.g = parent_g;
            node.f = parent_f;
        }

        Search::NotFound
    }
}
