use crate::error::GameError;
use crate::types::{BOARD_LEN, Cell, Player, WinResult};

const FULL: u16 = (1 << BOARD_LEN) - 1;

/// The eight winning lines in reporting order:
/// rows top to bottom, columns left to right, then both diagonals.
const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe board represented by two 9-bit bitboards.
///
/// Boards are `Copy`; a snapshot stored in history is never shared with a
/// board that is later modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    x: u16,
    o: u16,
}

impl Board {
    /// Creates the empty board.
    pub fn new() -> Self {
        Self { x: 0, o: 0 }
    }

    /// Builds a board from raw masks. Bits above 8 are ignored.
    pub fn from_bitboards(x: u16, o: u16) -> Result<Self, GameError> {
        let (x, o) = (x & FULL, o & FULL);
        if x & o != 0 {
            return Err(GameError::OverlappingMarks(x & o));
        }
        Ok(Self { x, o })
    }

    pub fn get(&self, cell: Cell) -> Option<Player> {
        let square = bit(cell);
        if self.x & square != 0 {
            Some(Player::X)
        } else if self.o & square != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        (self.x | self.o) & bit(cell) == 0
    }

    /// Returns a copy of this board with `cell` marked for `player`.
    /// Caller contract: `cell` is empty.
    pub fn with_mark(&self, cell: Cell, player: Player) -> Self {
        debug_assert!(self.is_empty(cell), "cell {} already occupied", cell.index());
        let mut next = *self;
        match player {
            Player::X => next.x |= bit(cell),
            Player::O => next.o |= bit(cell),
        }
        next
    }

    /// Returns `(x_count, o_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.x.count_ones() as u8, self.o.count_ones() as u8)
    }

    /// Converts board to `[u8; 9]` where 0=empty, 1=X, 2=O.
    pub fn to_array(&self) -> [u8; BOARD_LEN] {
        let mut board = [0u8; BOARD_LEN];
        for (cell, slot) in Cell::all().zip(board.iter_mut()) {
            *slot = self.get(cell).map_or(0, Player::code);
        }
        board
    }

    /// First completed line in reporting order, if any.
    pub fn winner(&self) -> Option<WinResult> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mask = (1u16 << a) | (1u16 << b) | (1u16 << c);
            let player = if self.x & mask == mask {
                Player::X
            } else if self.o & mask == mask {
                Player::O
            } else {
                return None;
            };
            Some(WinResult {
                player,
                line: [
                    Cell::new_unchecked(a),
                    Cell::new_unchecked(b),
                    Cell::new_unchecked(c),
                ],
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks `board` for a completed line. Pure; see [`Board::winner`].
pub fn winner_of(board: &Board) -> Option<WinResult> {
    board.winner()
}

fn bit(cell: Cell) -> u16 {
    1u16 << cell.index()
}
