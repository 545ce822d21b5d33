use crate::board::{TileError, SIZE};
use crate::prelude::*;

use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
    #[error("invalid initial state: expected 16 tiles, found {0}")]
    TileCount(usize),
    #[error("invalid initial state: {0:?} is not a tile")]
    NotANumber(String),
    #[error("invalid initial state: {0}")]
    Tiles(#[from] TileError),
}

impl InputError {
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Empty(_) => -2,
            _ => -1,
        }
    }
}

/// Reads the first line of `path` as 16 whitespace-separated tiles.
pub fn read_initial_state(path: &Path) -> Result<Board, InputError> {
    let unreadable = |source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(unreadable)?;
    let mut line = String::new();
    let read = std::io::BufReader::new(file)
        .read_line(&mut line)
        .map_err(unreadable)?;
    if read == 0 {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    let board = parse_tiles(&line)?;
    log::debug!("Read initial state from {}", path.display());
    Ok(board)
}

pub fn parse_tiles(line: &str) -> Result<Board, InputError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != SIZE {
        return Err(InputError::TileCount(tokens.len()));
    }

    let mut tiles = [0; SIZE];
    for (tile, token) in tiles.iter_mut().zip(tokens) {
        let value: u32 = token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))?;
        *tile = u8::try_from(value).map_err(|_| TileError::OutOfRange(value))?;
    }

    Ok(Board::from_tiles(tiles)?)
}
