use crate::prelude::*;

use super::{DIM, SIZE};

lazy_static::lazy_static! {
    static ref MOVE_TABLE: MoveTable = MoveTable::init();
}

/// Per-direction legality of a slide, keyed by blank position.
struct MoveTable([[bool; SIZE]; 4]);

impl MoveTable {
    fn init() -> Self {
        let mut table = [[false; SIZE]; 4];
        for direction in Direction::all() {
            for blank in 0..SIZE {
                let (row, col) = (blank / DIM, blank % DIM);
                table[direction as usize][blank] = match direction {
                    Direction::Left => col > 0,
                    Direction::Right => col < DIM - 1,
                    Direction::Up => row > 0,
                    Direction::Down => row < DIM - 1,
                };
            }
        }
        log::trace!("Move table initialised");
        MoveTable(table)
    }
}

pub fn applicable(direction: Direction, blank: usize) -> bool {
    MOVE_TABLE.0[direction as usize][blank]
}
