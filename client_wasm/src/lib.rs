//! Browser client for Flappy
//!
//! The page owns the canvas, audio and animation loop. Each animation
//! frame it feeds key and pointer input in, calls [`FlappyClient::tick`]
//! and draws the postcard-encoded [`proto::Frame`] it gets back.

mod frame;
mod input;

pub use frame::build_frame;
pub use input::key_to_input;

use game_core::{Config, Game, InputEvent, InputQueue};
use proto::Frame;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Install the panic hook and console logger
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// One game session driven by the page
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct FlappyClient {
    game: Game,
    inputs: InputQueue,
    tick: u32,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl FlappyClient {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: u32) -> Self {
        Self::from_game(Game::new(u64::from(seed)))
    }

    /// Queue a key press; returns whether the key means anything to the game
    pub fn key_down(&mut self, key: &str) -> bool {
        match key_to_input(key) {
            Some(input) => {
                self.inputs.push(input);
                true
            }
            None => false,
        }
    }

    /// Queue a click or touch
    pub fn pointer_down(&mut self) {
        self.inputs.push(InputEvent::Tap);
    }

    /// Get current phase as string (for JS interop)
    pub fn phase_string(&self) -> String {
        format!("{:?}", self.game.phase())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score(&self) -> u32 {
        self.game.score.value
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn quit_requested(&self) -> bool {
        self.game.quit_requested()
    }
}

impl FlappyClient {
    pub fn from_game(game: Game) -> Self {
        log::info!("flappy: new session");
        Self {
            game,
            inputs: InputQueue::new(),
            tick: 0,
        }
    }

    pub fn with_config_json(json: &str, seed: u32) -> Result<Self, serde_json::Error> {
        let config = Config::from_json(json)?;
        Ok(Self::from_game(Game::with_config(config, u64::from(seed))))
    }

    /// Run one tick with the queued inputs and describe the result
    pub fn advance(&mut self, dt_ms: u32) -> Frame {
        let inputs = self.inputs.drain();
        if let Some(result) = self.game.tick(&inputs, dt_ms) {
            log::debug!("{:?} -> {:?}", result.from, result.to);
        }
        self.tick = self.tick.wrapping_add(1);
        build_frame(&self.game, self.tick)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FlappyClient {
    /// Build a session from a partial JSON config
    pub fn with_config(json: &str, seed: u32) -> Result<FlappyClient, JsValue> {
        Self::with_config_json(json, seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
    }

    /// Queue a `keydown` event, keeping Space and ArrowUp from scrolling the page
    pub fn key_event(&mut self, event: &KeyboardEvent) -> bool {
        let handled = self.key_down(&event.key());
        if handled {
            event.prevent_default();
        }
        handled
    }

    /// Advance one animation frame; returns the encoded frame
    pub fn tick(&mut self, dt_ms: u32) -> Result<Vec<u8>, JsValue> {
        self.advance(dt_ms)
            .to_bytes()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize frame: {:?}", e)))
    }
}
