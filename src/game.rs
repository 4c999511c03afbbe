use once_cell::sync::Lazy;
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::error::GameError;
use crate::types::{BOARD_LEN, Cell, GameState, Player, WinResult};
use crate::view;

/// Number of plies in a game that fills the board.
pub const MAX_MOVES: usize = BOARD_LEN;

static COORDINATE_LABELS: Lazy<[String; BOARD_LEN]> = Lazy::new(|| {
    std::array::from_fn(|i| Cell::new_unchecked(i as u8).coordinate().to_string())
});

/// One recorded position: the board and the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// `None` only for the game-start entry.
    pub cell: Option<Cell>,
}

/// Phase of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { next: Player },
    Won(WinResult),
    Drawn,
}

/// What `apply_move` did. Ignored moves leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    CellOccupied,
    GameOver,
}

/// Game engine holding the full snapshot history and the displayed position.
///
/// Turn, winner, phase and status are derived from `(history, current_move)`
/// on every call and never stored.
#[derive(Debug, Clone)]
pub struct GameEngine {
    history: Vec<HistoryEntry>,
    current_move: usize,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                cell: None,
            }],
            current_move: 0,
        }
    }

    /// Marks `cell` for the player whose turn it is at the displayed position.
    ///
    /// Occupied cells and finished positions are ignored. Otherwise any
    /// entries after the displayed position are discarded before the new
    /// snapshot is appended.
    #[instrument(skip(self, cell), fields(cell = cell.index(), current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: Cell) -> MoveOutcome {
        let board = self.current_board();
        if !board.is_empty(cell) {
            debug!("ignoring move on occupied cell");
            return MoveOutcome::CellOccupied;
        }
        if board.winner().is_some() {
            debug!("ignoring move on finished game");
            return MoveOutcome::GameOver;
        }

        let player = self.next_player();
        let next = board.with_mark(cell, player);

        let discarded = self.history.len() - 1 - self.current_move;
        if discarded > 0 {
            debug!(discarded, "truncating future history");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry {
            board: next,
            cell: Some(cell),
        });
        self.current_move = self.history.len() - 1;

        match self.phase() {
            Phase::Won(win) => info!(winner = %win.player, "game won"),
            Phase::Drawn => info!("game drawn"),
            Phase::InProgress { .. } => {}
        }

        MoveOutcome::Applied
    }

    /// Displays the position after `mv` plies. History is not modified.
    ///
    /// Caller contract: `mv < self.history_len()`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) {
        assert!(
            mv < self.history.len(),
            "jump_to({mv}) out of range: history has {} entries",
            self.history.len()
        );
        self.current_move = mv;
    }

    /// Checked variant of [`GameEngine::jump_to`] for untrusted input.
    pub fn try_jump_to(&mut self, mv: usize) -> Result<(), GameError> {
        if mv >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                requested: mv,
                len: self.history.len(),
            });
        }
        self.jump_to(mv);
        Ok(())
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current_move].board
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// X moves on even plies, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.current_move)
    }

    pub fn winner(&self) -> Option<WinResult> {
        self.current_board().winner()
    }

    pub fn phase(&self) -> Phase {
        phase_of(&self.current_board(), self.current_move)
    }

    pub fn status_text(&self) -> String {
        status_text(&self.current_board(), self.current_move)
    }

    /// Button label for jumping to history entry `mv`.
    pub fn move_label(mv: usize) -> String {
        if mv > 0 {
            format!("Go to move #{mv}")
        } else {
            "Go to game start".to_string()
        }
    }

    /// Label shown instead of the button when `mv` is the displayed entry.
    pub fn location_label(mv: usize) -> String {
        match mv {
            0 => "You are at game start".to_string(),
            MAX_MOVES => "You are at the end of the game".to_string(),
            _ => format!("You are at move #{mv}"),
        }
    }

    /// Cell that produced history entry `mv`; `None` for game start or an
    /// index past the end of history.
    pub fn move_cell(&self, mv: usize) -> Option<Cell> {
        self.history.get(mv).and_then(|entry| entry.cell)
    }

    /// `"Row: r Col: c"` for the cell that produced history entry `mv`.
    pub fn coordinate_label(&self, mv: usize) -> Option<&'static str> {
        self.move_cell(mv).map(|cell| COORDINATE_LABELS[cell.index()].as_str())
    }

    pub fn to_game_state(&self) -> GameState {
        let board = self.current_board();
        let phase = self.phase();
        GameState {
            board: board.to_array().to_vec(),
            current_move: self.current_move,
            history_len: self.history.len(),
            next_player: match phase {
                Phase::InProgress { next } => Some(next),
                _ => None,
            },
            status: status_text(&board, self.current_move),
            winner: match phase {
                Phase::Won(win) => Some(win.player),
                _ => None,
            },
            winning_cells: view::winning_cells(self)
                .into_iter()
                .map(|c| c.index() as u8)
                .collect(),
            is_game_over: !matches!(phase, Phase::InProgress { .. }),
        }
    }

    #[cfg(test)]
    fn play(&mut self, cells: &[usize]) {
        for &i in cells {
            let outcome = self.apply_move(Cell::new(i).unwrap());
            assert_eq!(outcome, MoveOutcome::Applied, "move on cell {i}");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase of `board` reached after `current_move` plies.
pub fn phase_of(board: &Board, current_move: usize) -> Phase {
    if let Some(win) = board.winner() {
        Phase::Won(win)
    } else if current_move == MAX_MOVES {
        Phase::Drawn
    } else {
        Phase::InProgress {
            next: Player::for_ply(current_move),
        }
    }
}

pub fn status_text(board: &Board, current_move: usize) -> String {
    match phase_of(board, current_move) {
        Phase::Won(win) => format!("Winner: {}", win.player),
        Phase::Drawn => "Draw".to_string(),
        Phase::InProgress { next } => format!("Next player: {next}"),
    }
}
