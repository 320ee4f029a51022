//! JavaScript entry points.
//!
//! The host creates one [`AngleChart`] per view and forwards pointer events
//! in canvas-local CSS pixels:
//!
//! ```js
//! init("info");
//! const chart = new AngleChart(canvas, "angle-input-container", null);
//! canvas.addEventListener("pointerdown", (e) => chart.pointer_down(e.offsetX, e.offsetY));
//! canvas.addEventListener("pointermove", (e) => chart.pointer_move(e.offsetX, e.offsetY));
//! window.addEventListener("pointerup", (e) => chart.pointer_up(e.offsetX, e.offsetY));
//! ```

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::ChartConfig;
use crate::engine::Engine;
use crate::error::ChartError;
use crate::geometry::Point;

/// Install the console logger and panic hook. Safe to call more than once;
/// only the first call picks the level.
#[wasm_bindgen]
pub fn init(level: Option<String>) {
    let level = match level.as_deref().map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        _ => log::Level::Info,
    };
    install_logger(level);
}

fn install_logger(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

#[wasm_bindgen]
pub struct AngleChart {
    engine: Engine,
}

#[wasm_bindgen]
impl AngleChart {
    /// Draw the chart into `canvas` and its angle readouts into the element
    /// with id `container_id`. `config_json` overrides defaults; see
    /// [`ChartConfig`].
    ///
    /// # Errors
    ///
    /// Rejects malformed or invalid config, a canvas without a 2D context,
    /// or a canvas that is not attached to a document.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, container_id: &str, config_json: Option<String>) -> Result<AngleChart, JsValue> {
        let config = ChartConfig::from_optional_json(config_json.as_deref())?;
        install_logger(config.log_level());

        let document = canvas
            .owner_document()
            .ok_or_else(|| ChartError::Js("canvas is not attached to a document".to_string()))?;
        let engine = Engine::new(canvas, document, container_id, config)?;
        Ok(Self { engine })
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        Ok(self.engine.on_pointer_down(Point::new(x, y))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        Ok(self.engine.on_pointer_move(Point::new(x, y))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        Ok(self.engine.on_pointer_up(Point::new(x, y))?)
    }

    /// Current ray angles in degrees, in index order.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        self.engine.core.angles()
    }

    /// The current scene as JSON, for handing to a JS charting library.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn figure_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.core.figure()).map_err(|e| ChartError::from(e).into())
    }

    /// Outline the invisible drag regions, for debugging.
    ///
    /// # Errors
    ///
    /// Returns `Err` if repainting fails.
    pub fn set_show_regions(&mut self, show: bool) -> Result<(), JsValue> {
        Ok(self.engine.set_show_regions(show)?)
    }
}
