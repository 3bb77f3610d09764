//! Browser side of `sheetload`: a [`StyleHost`](sheetload_core::StyleHost)
//! backed by `web-sys` and the `StylesheetLoader` class exported to JavaScript.

pub mod bindings;
pub mod helpers;
pub mod host;

pub use bindings::JsStylesheetLoader;
pub use helpers::{document, location_pathname, window};
pub use host::DocumentHost;

pub mod prelude {
    pub use crate::host::DocumentHost;
    pub use sheetload_core::prelude::*;
}
