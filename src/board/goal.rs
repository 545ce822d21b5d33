use super::SIZE;

/// Where each tile belongs once the puzzle is solved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GoalLayout {
    /// Value `v` at index `v`, so the blank sits in the top-left corner.
    #[default]
    BlankFirst,
    /// Tiles 1..15 in reading order with the blank in the bottom-right corner.
    BlankLast,
}

impl GoalLayout {
    /// Goal index of a non-blank tile value.
    pub fn home(self, value: u8) -> usize {
        debug_assert!(value != 0 && (value as usize) < SIZE);
        match self {
            GoalLayout::BlankFirst => value as usize,
            GoalLayout::BlankLast => value as usize - 1,
        }
    }

    pub fn tiles(self) -> [u8; SIZE] {
        let mut tiles = [0; SIZE];
        for value in 1..SIZE as u8 {
            tiles[self.home(value)] = value;
        }
        tiles
    }
}
