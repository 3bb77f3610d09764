pub mod config;
pub mod error;
pub mod host;
pub mod loader;
pub mod log;
pub mod naming;
pub mod ready;

pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use host::{LocalTask, SheetLoad, SheetRequest, StyleHost};
pub use loader::{LoadReport, PageSheet, StylesheetLoader};
pub use ready::ReadyState;

pub mod prelude {
    pub use crate::log::*;
    pub use crate::{
        LoadError, LoadReport, LoadResult, LoaderConfig, PageSheet, ReadyState, SheetRequest,
        StyleHost, StylesheetLoader,
    };
}
