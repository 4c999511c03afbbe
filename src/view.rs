//! UI-local state derived from, but never stored in, the engine.
//!
//! The move-list ordering toggle lives here so the engine stays testable
//! headlessly. Nothing in this module mutates a `GameEngine`.

use serde::{Deserialize, Serialize};

use crate::game::GameEngine;
use crate::types::Cell;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == MoveOrder::Descending
    }

    /// Caption next to the order checkbox.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "Toggle descending order",
            MoveOrder::Descending => "Toggle ascending order",
        }
    }
}

/// Options accepted when a view is created. Missing fields take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub descending: bool,
}

impl ViewOptions {
    pub fn move_order(self) -> MoveOrder {
        if self.descending {
            MoveOrder::Descending
        } else {
            MoveOrder::Ascending
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History index to pass back to `jump_to`.
    pub index: usize,
    /// Contract:
    /// - `true`: `label` is a location caption and no button is shown.
    /// - `false`: `label` is a jump button caption.
    pub is_current: bool,
    pub label: String,
    pub cell: Option<Cell>,
    pub coordinate: Option<String>,
}

/// Builds the move list for `engine` in the requested order.
pub fn move_list(engine: &GameEngine, order: MoveOrder) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = (0..engine.history_len())
        .map(|index| {
            let is_current = index == engine.current_move();
            MoveListItem {
                index,
                is_current,
                label: if is_current {
                    GameEngine::location_label(index)
                } else {
                    GameEngine::move_label(index)
                },
                cell: engine.move_cell(index),
                coordinate: engine.coordinate_label(index).map(str::to_owned),
            }
        })
        .collect();

    if order.is_descending() {
        items.reverse();
    }
    items
}

/// Cells to highlight on the displayed board.
pub fn winning_cells(engine: &GameEngine) -> Vec<Cell> {
    engine
        .winner()
        .map(|win| win.line.to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> GameEngine {
        let mut game = GameEngine::new();
        for &i in cells {
            game.apply_move(Cell::new(i).unwrap());
        }
        game
    }

    #[test]
    fn ascending_list_marks_current_entry() {
        let game = played(&[4, 0]);
        let items = move_list(&game, MoveOrder::Ascending);

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "You are at move #2"]);
        assert!(items[2].is_current);
        assert_eq!(items[0].coordinate, None);
        assert_eq!(items[1].coordinate.as_deref(), Some("Row: 2 Col: 2"));
        assert_eq!(items[2].cell, Some(Cell::new(0).unwrap()));
    }

    #[test]
    fn descending_reverses_without_touching_indices() {
        let game = played(&[4, 0]);
        let items = move_list(&game, MoveOrder::Descending);

        let indices: Vec<usize> = items.iter().map(|i| i.index).collect();
        assert_eq!(indices, [2, 1, 0]);
        assert_eq!(items[2].label, "Go to game start");
    }

    #[test]
    fn toggling_order_leaves_engine_untouched() {
        let mut game = played(&[4, 0, 8]);
        game.jump_to(1);
        let before = game.clone();

        let order = MoveOrder::default().toggle();
        let _ = move_list(&game, order);

        assert_eq!(game.history(), before.history());
        assert_eq!(game.current_move(), before.current_move());
        assert_eq!(order.toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn start_entry_is_labelled_when_current() {
        let mut game = played(&[4]);
        game.jump_to(0);
        let items = move_list(&game, MoveOrder::Ascending);

        assert_eq!(items[0].label, "You are at game start");
        assert_eq!(items[1].label, "Go to move #1");
    }

    #[test]
    fn toggle_label_names_the_other_order() {
        assert_eq!(MoveOrder::Ascending.toggle_label(), "Toggle descending order");
        assert_eq!(MoveOrder::Descending.toggle_label(), "Toggle ascending order");
        assert_eq!(
            ViewOptions { descending: true }.move_order(),
            MoveOrder::Descending
        );
        assert_eq!(ViewOptions::default().move_order(), MoveOrder::Ascending);
    }

    #[test]
    fn winning_cells_are_empty_until_a_line_completes() {
        let game = played(&[0, 3, 1, 4]);
        assert!(winning_cells(&game).is_empty());

        let game = played(&[0, 3, 1, 4, 2]);
        let cells: Vec<usize> = winning_cells(&game).iter().map(|c| c.index()).collect();
        assert_eq!(cells, [0, 1, 2]);
    }
}
