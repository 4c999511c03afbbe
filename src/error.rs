use thiserror::Error;

/// Errors raised when validating input that crosses into the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index out of range: {0} (expected 0..=8)")]
    CellOutOfRange(usize),

    #[error("move {requested} out of range: history has {len} entries")]
    MoveOutOfRange { requested: usize, len: usize },

    #[error("cells marked by both players: {0:#011b}")]
    OverlappingMarks(u16),
}
