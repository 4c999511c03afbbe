use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::GameError;
use crate::game::{GameEngine, MoveOutcome};
use crate::types::Cell;
use crate::view::{self, MoveOrder, ViewOptions};

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A game plus the view state the browser keeps next to it.
#[wasm_bindgen]
pub struct GameHandle {
    engine: GameEngine,
    order: MoveOrder,
}

#[wasm_bindgen]
impl GameHandle {
    /// `options` may be `undefined`, `null` or a partial `{ descending }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GameHandle, JsValue> {
        let options: ViewOptions = if options.is_undefined() || options.is_null() {
            ViewOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self::with_options(options))
    }

    /// Returns `true` when the click placed a mark.
    pub fn click(&mut self, cell: u32) -> Result<bool, JsValue> {
        let outcome = self.click_cell(cell as usize)?;
        Ok(outcome == MoveOutcome::Applied)
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, mv: u32) -> Result<(), JsValue> {
        self.engine.try_jump_to(mv as usize)?;
        Ok(())
    }

    /// Flips the move-list order and returns whether it is now descending.
    #[wasm_bindgen(js_name = toggleOrder)]
    pub fn toggle_order(&mut self) -> bool {
        self.order = self.order.toggle();
        self.order.is_descending()
    }

    #[wasm_bindgen(js_name = toggleLabel)]
    pub fn toggle_label(&self) -> String {
        self.order.toggle_label().to_string()
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.engine.status_text()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.to_game_state())
    }

    #[wasm_bindgen(js_name = moveList)]
    pub fn move_list(&self) -> Result<JsValue, JsValue> {
        to_js(&view::move_list(&self.engine, self.order))
    }
}

impl GameHandle {
    pub fn with_options(options: ViewOptions) -> Self {
        Self {
            engine: GameEngine::new(),
            order: options.move_order(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    fn click_cell(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let cell = Cell::new(index)?;
        Ok(self.engine.apply_move(cell))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
