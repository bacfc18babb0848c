#![forbid(unsafe_code)]
//! WASM-friendly bridge for GameTree.
//! Exposes the action dispatcher to a JS UI layer. Actions arrive as JSON in the
//! `{"type": ..., "payload": ...}` shape; state leaves as plain JS values.

use gametree_core::{
    Outcome, ShakmatyRules, Transition, TreeAction, TreeEditor, TreeState, WinChanceClassifier,
    DEFAULT_POSITION,
};
use serde_wasm_bindgen::to_value;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

fn parse_action(action_json: &str) -> Result<TreeAction, String> {
    serde_json::from_str(action_json).map_err(|e| {
        warn!(error = %e, "rejecting malformed action");
        e.to_string()
    })
}

fn parse_state(state_json: &str) -> Result<TreeState, String> {
    serde_json::from_str(state_json).map_err(|e| {
        warn!(error = %e, "rejecting malformed state");
        e.to_string()
    })
}

fn path_to_js(path: &[usize]) -> Result<Vec<u32>, String> {
    path.iter()
        .map(|&index| u32::try_from(index).map_err(|_| format!("path index {index} exceeds u32")))
        .collect()
}

fn transition_kind(transition: &Transition) -> &'static str {
    match transition {
        Transition::InPlace(Outcome::Applied) => "applied",
        Transition::InPlace(Outcome::Ignored(_)) => "ignored",
        Transition::Replaced => "replaced",
    }
}

#[wasm_bindgen]
pub struct WasmGameTree {
    inner: TreeEditor<ShakmatyRules, WinChanceClassifier>,
}

#[wasm_bindgen]
impl WasmGameTree {
    #[wasm_bindgen(constructor)]
    pub fn new(fen: Option<String>) -> WasmGameTree {
        let state = TreeState::new(fen.unwrap_or_else(|| DEFAULT_POSITION.to_string()));
        WasmGameTree {
            inner: TreeEditor::new(ShakmatyRules, WinChanceClassifier, state),
        }
    }

    #[wasm_bindgen(js_name = fromState)]
    pub fn from_state(state_json: String) -> Result<WasmGameTree, JsValue> {
        let state = parse_state(&state_json).map_err(|e| JsValue::from_str(&e))?;
        debug!(plies = state.mainline_len(), "loaded state");
        Ok(WasmGameTree {
            inner: TreeEditor::new(ShakmatyRules, WinChanceClassifier, state),
        })
    }

    /// Apply one action. Returns `"applied"`, `"ignored"` or `"replaced"`; only malformed
    /// JSON is an error.
    pub fn dispatch(&mut self, action_json: String) -> Result<String, JsValue> {
        let action = parse_action(&action_json).map_err(|e| JsValue::from_str(&e))?;
        let transition = self.inner.dispatch(action);
        Ok(transition_kind(&transition).to_string())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = currentNode)]
    pub fn current_node(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.state().current_node()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = currentPath)]
    pub fn current_path(&self) -> Result<Vec<u32>, JsValue> {
        path_to_js(&self.inner.state().path).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.state().dirty
    }

    #[wasm_bindgen(js_name = tagPairs)]
    pub fn tag_pairs(&self) -> String {
        self.inner.state().headers.to_tag_pairs()
    }

    #[wasm_bindgen(js_name = mainlineMoves)]
    pub fn mainline_moves(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.state().mainline_moves())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
