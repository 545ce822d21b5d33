use crate::prelude::*;

mod goal;
pub use goal::GoalLayout;

mod move_table;

pub const DIM: usize = 4;
pub const SIZE: usize = DIM * DIM;

/// A 4x4 configuration: a permutation of 0..16 in row-major order, 0 being the blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; SIZE],
    blank: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("tile {0} is outside 0..=15")]
    OutOfRange(u32),
    #[error("tile {0} appears more than once")]
    Duplicate(u8),
}

impl Board {
    pub fn solved(goal: GoalLayout) -> Board {
        let tiles = goal.tiles();
        Board {
            tiles,
            blank: blank_index(&tiles),
        }
    }

    pub fn from_tiles(tiles: [u8; SIZE]) -> Result<Board, TileError> {
        let mut seen = [false; SIZE];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(TileError::OutOfRange(tile as u32))?;
            if *slot {
                return Err(TileError::Duplicate(tile));
            }
            *slot = true;
        }

        Ok(Board {
            tiles,
            blank: blank_index(&tiles),
        })
    }

    pub fn tiles(&self) -> &[u8; SIZE] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn can_slide(&self, direction: Direction) -> bool {
        move_table::applicable(direction, self.blank())
    }

    /// Slides the blank in place. The direction must be applicable.
    pub fn slide(&mut self, direction: Direction) {
        debug_assert!(self.can_slide(direction));

        let target = (self.blank() as isize + direction.offset()) as usize;
        self.tiles[self.blank()] = self.tiles[target];
        self.tiles[target] = 0;
        self.blank = target as u8;
    }

    pub fn apply(mut self, direction: Direction) -> Option<Board> {
        if !self.can_slide(direction) {
            return None;
        }
        self.slide(direction);
        Some(self)
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Direction>) -> Option<Board> {
        moves.into_iter().try_fold(self, |board, m| board.apply(m))
    }
}

fn blank_index(tiles: &[u8; SIZE]) -> u8 {
    tiles.iter().position(|&t| t == 0).unwrap_or(0) as u8
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.tiles.chunks(DIM) {
            let cells = row
                .iter()
                .map(|t| format!("{:2}", t))
                .collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_tracks_blank() {
        assert_eq!(Board::solved(GoalLayout::BlankFirst).blank(), 0);
        assert_eq!(Board::solved(GoalLayout::BlankLast).blank(), 15);
    }

    #[test]
    fn slide_right_from_goal() {
        let board = board_with_moves("R");
        assert_eq!(board.tiles()[..4], [1, 0, 2, 3]);
        assert_eq!(board.blank(), 1);
    }

    #[test]
    fn slide_down_moves_tile_up() {
        let board = board_with_moves("D");
        assert_eq!(board.tiles()[0], 4);
        assert_eq!(board.tiles()[4], 0);
        assert_eq!(board.blank(), 4);
    }

    #[test]
    fn cannot_leave_the_grid() {
        let goal = Board::solved(GoalLayout::BlankFirst);
        assert_eq!(goal.apply(Direction::Left), None);
        assert_eq!(goal.apply(Direction::Up), None);
    }

    #[test]
    fn rejects_duplicates() {
        let mut tiles = GoalLayout::BlankFirst.tiles();
        tiles[1] = 2;
        assert_eq!(Board::from_tiles(tiles), Err(TileError::Duplicate(2)));
    }

    #[test]
    fn rejects_out_of_range() {
        let mut tiles = GoalLayout::BlankFirst.tiles();
        tiles[3] = 16;
        assert_eq!(Board::from_tiles(tiles), Err(TileError::OutOfRange(16)));
    }

    #[test]
    fn displays_as_grid() {
        let expected = " 0  1  2  3\n 4  5  6  7\n 8  9 10 11\n12 13 14 15\n";
        assert_eq!(Board::solved(GoalLayout::BlankFirst).to_string(), expected);
    }

    #[quickcheck]
    fn slide_then_opposite_restores(walk: Vec<Direction>) -> bool {
        let board = random_walk(&walk);
        Direction::all()
            .filter(|&d| board.can_slide(d))
            .all(|d| {
                let mut b = board;
                b.slide(d);
                b.slide(d.opposite());
                b == board
            })
    }

    #[quickcheck]
    fn stays_a_permutation(walk: Vec<Direction>) -> bool {
        let board = random_walk(&walk);
        Board::from_tiles(*board.tiles()) == Ok(board) && board.tiles()[board.blank()] == 0
    }
}
