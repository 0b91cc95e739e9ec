use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("`{0}` is not an in-page anchor")]
    NotAnAnchor(String),
    #[error("no element with id `{0}`")]
    MissingTarget(String),
    #[error("name is required")]
    MissingName,
    #[error("idea is required")]
    MissingIdea,
    #[error("the browser refused to open `{0}`")]
    PopupBlocked(String),
    #[error("viewport observer failed: {0}")]
    Observer(String),
    #[error("scroll listener failed: {0}")]
    Listener(String),
    #[error("invalid site configuration: {0}")]
    Config(String),
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),
}

impl SiteError {
    /// Wraps a thrown JS value, which only carries a debug rendering.
    pub fn from_js(wrap: fn(String) -> SiteError, err: wasm_bindgen::JsValue) -> Self {
        wrap(format!("{:?}", err))
    }
}
