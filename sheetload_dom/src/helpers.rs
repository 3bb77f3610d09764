use sheetload_core::{LoadError, LoadResult};
use web_sys::{Document, Window};

// --- Window & Document Access ---

thread_local! {
    static WINDOW: Option<Window> = web_sys::window();
    static DOCUMENT: Option<Document> = WINDOW.with(|w| w.as_ref().and_then(Window::document));
}

/// Returns the cached [`Window`](web_sys::Window).
pub fn window() -> LoadResult<Window> {
    WINDOW
        .with(|w| w.clone())
        .ok_or_else(|| LoadError::Dom("Window not found".to_string()))
}

/// Returns the cached [`Document`](web_sys::Document).
pub fn document() -> LoadResult<Document> {
    DOCUMENT
        .with(|d| d.clone())
        .ok_or_else(|| LoadError::Dom("Document not found".to_string()))
}

// --- Location Helpers ---

/// Current [`window.location.pathname`](web_sys::Location::pathname).
pub fn location_pathname() -> Option<String> {
    window().ok()?.location().pathname().ok()
}
