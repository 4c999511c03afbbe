use std::fmt;

use serde::Serialize;

use crate::error::GameError;

pub(crate) const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A player mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Mover for the position reached after `ply` moves.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }

    /// Wire code used in `GameState::board`: 1=X, 2=O.
    pub fn code(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// A validated cell index in `0..9`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index >= BOARD_LEN {
            return Err(GameError::CellOutOfRange(index));
        }
        Ok(Self(index as u8))
    }

    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns all nine cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_LEN as u8).map(Cell)
    }

    /// 1-indexed board coordinate of this cell.
    pub fn coordinate(self) -> Coordinate {
        Coordinate {
            row: self.0 / BOARD_WIDTH as u8 + 1,
            col: self.0 % BOARD_WIDTH as u8 + 1,
        }
    }
}

/// A 1-indexed board coordinate, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row: {} Col: {}", self.row, self.col)
    }
}

/// A completed line: the player who owns it and its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinResult {
    pub player: Player,
    pub line: [Cell; 3],
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Contract: 9 cells, 0=empty, 1=X, 2=O.
    pub board: Vec<u8>,
    pub current_move: usize,
    pub history_len: usize,
    /// `None` once the displayed position is won or drawn.
    pub next_player: Option<Player>,
    pub status: String,
    pub winner: Option<Player>,
    /// Contract:
    /// - Won position: the three winning cells.
    /// - Otherwise: must be an empty list.
    pub winning_cells: Vec<u8>,
    pub is_game_over: bool,
}
