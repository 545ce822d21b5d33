use crate::prelude::*;

mod ida;
pub use ida::*;

mod manhattan;
pub use manhattan::*;

/// Lower bound on the number of slides needed to reach the goal.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

/// A board reached during search along with its path cost and evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    pub g: u32,
    pub f: u32,
}

/// Counters accumulated over a whole run, across iterations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub generated: u64,
    pub expanded: u64,
    pub iterations: u32,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub length: u32,
    pub moves: Vec<Direction>,
    pub initial_estimate: u32,
    /// Every threshold tried, starting with the initial estimate.
    pub thresholds: Vec<u32>,
    pub stats: Stats,
}
