use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The platform fired `error` on the inserted `<link>`.
    Resource { path: String },
    /// The host could not build or insert the `<link>` element.
    Dom(String),
}

impl LoadError {
    pub fn is_resource(&self) -> bool {
        matches!(self, LoadError::Resource { .. })
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Resource { path } => write!(f, "Failed to load stylesheet: {}", path),
            LoadError::Dom(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<wasm_bindgen::JsValue> for LoadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        LoadError::Dom(msg)
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
