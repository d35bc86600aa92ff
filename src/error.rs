use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("2d drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}
