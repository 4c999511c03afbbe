use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod view;
pub mod wasm;

pub use board::{Board, winner_of};
pub use error::GameError;
pub use game::{GameEngine, HistoryEntry, MoveOutcome, Phase, status_text};
pub use types::{Cell, Coordinate, GameState, Player, WinResult};
pub use view::{MoveListItem, MoveOrder, ViewOptions};
pub use wasm::GameHandle;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
