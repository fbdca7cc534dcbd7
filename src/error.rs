use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ModalError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("dom operation failed: {0}")]
    Dom(String),

    #[error("invalid modal config: {0}")]
    Config(String),
}

impl ModalError {
    pub fn missing(what: impl Into<String>) -> Self {
        ModalError::MissingElement(what.into())
    }
}

impl From<JsValue> for ModalError {
    fn from(value: JsValue) -> Self {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ModalError::Dom(detail)
    }
}
