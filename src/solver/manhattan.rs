use crate::board::{DIM, SIZE};
use crate::prelude::*;

/// Sum over non-blank tiles of the grid distance to their goal cell.
pub struct Manhattan {
    goal: GoalLayout,
    // distance[value][position]
    distance: [[u8; SIZE]; SIZE],
}

impl Manhattan {
    pub fn new(goal: GoalLayout) -> Self {
        let mut distance = [[0; SIZE]; SIZE];
        for value in 1..SIZE {
            let home = goal.home(value as u8);
            for position in 0..SIZE {
                distance[value][position] = ((home / DIM).abs_diff(position / DIM)
                    + (home % DIM).abs_diff(position % DIM))
                    as u8;
            }
        }
        Manhattan { goal, distance }
    }

    pub fn goal(&self) -> GoalLayout {
        self.goal
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .map(|(position, &tile)| self.distance[tile as usize][position] as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static::lazy_static! {
        static ref MANHATTAN: Manhattan = Manhattan::new(GoalLayout::BlankFirst);
    }

    #[test]
    fn goal_is_zero() {
        for goal in [GoalLayout::BlankFirst, GoalLayout::BlankLast] {
            assert_eq!(Manhattan::new(goal).estimate(&Board::solved(goal)), 0);
        }
    }

    #[test]
    fn blank_is_free() {
        assert_eq!(MANHATTAN.distance[0], [0; SIZE]);
    }

    #[test]
    fn one_slide_costs_one() {
        assert_eq!(MANHATTAN.estimate(&board_with_moves("R")), 1);
        assert_eq!(MANHATTAN.estimate(&board_with_moves("R D")), 2);
    }

    #[test]
    fn corner_swap() {
        let mut tiles = GoalLayout::BlankFirst.tiles();
        tiles.swap(1, 15);
        let board = Board::from_tiles(tiles).unwrap();
        // tile 1 is 3 rows and 2 columns from home, tile 15 likewise
        assert_eq!(MANHATTAN.estimate(&board), 10);
    }

    #[test]
    fn other_goal_is_not_zero() {
        let blank_last = Board::solved(GoalLayout::BlankLast);
        assert!(MANHATTAN.estimate(&blank_last) > 0);
    }

    #[quickcheck]
    fn zero_only_at_goal(walk: Vec<Direction>) -> bool {
        let board = random_walk(&walk);
        (MANHATTAN.estimate(&board) == 0) == (board == Board::solved(GoalLayout::BlankFirst))
    }

    #[quickcheck]
    fn changes_by_one_per_slide(walk: Vec<Direction>) -> bool {
        let board = random_walk(&walk);
        let h = MANHATTAN.estimate(&board) as i64;
        Direction::all()
            .filter_map(|d| board.apply(d))
            .all(|next| (MANHATTAN.estimate(&next) as i64 - h).abs() == 1)
    }
}
