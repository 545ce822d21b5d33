pub use crate::board::{Board, GoalLayout};
pub use crate::direction::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
