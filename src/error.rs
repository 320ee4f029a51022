use wasm_bindgen::JsValue;

/// Errors surfaced by the chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("canvas 2d context unavailable")]
    MissingContext,
    #[error("no trace at index {0}")]
    NoSuchTrace(usize),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for ChartError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ChartError> for JsValue {
    fn from(err: ChartError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
