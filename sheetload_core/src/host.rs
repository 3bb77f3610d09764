use std::future::Future;
use std::pin::Pin;

use crate::error::LoadResult;
use crate::ready::ReadyState;

/// A spawned unit of work on the UI event loop.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// A pending stylesheet load, resolved by the element's `load`/`error` event.
pub type SheetLoad = Pin<Box<dyn Future<Output = LoadResult<()>>>>;

/// A stylesheet to fetch and an optional id used to skip duplicate insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub path: String,
    pub id: Option<String>,
}

impl SheetRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_optional_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_string);
        self
    }
}

/// Everything the loader needs from the hosting document.
///
/// The browser implementation lives in `sheetload_dom`; tests provide an
/// in-memory one.
pub trait StyleHost: 'static {
    type Load: Future<Output = LoadResult<()>> + 'static;

    /// Current URL path (`location.pathname`), if readable.
    fn pathname(&self) -> Option<String>;

    fn ready_state(&self) -> ReadyState;

    /// Runs `callback` once, when the document leaves the `loading` state.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);

    fn has_element(&self, id: &str) -> bool;

    /// Appends a `<link rel="stylesheet">` for `request` to `<head>` and
    /// returns a future settling on the element's `load` or `error` event.
    fn insert_stylesheet(&self, request: &SheetRequest) -> LoadResult<Self::Load>;

    fn spawn(&self, task: LocalTask);
}
