use js_sys::{Function, Promise};
use sheetload_core::log::console_warn;
use sheetload_core::{
    LoadError, LoadResult, LocalTask, ReadyState, SheetLoad, SheetRequest, StyleHost,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, HtmlLinkElement};

use crate::helpers::{document, location_pathname};

/// [`StyleHost`] over the live browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHost;

impl DocumentHost {
    pub fn new() -> Self {
        Self
    }
}

impl StyleHost for DocumentHost {
    type Load = SheetLoad;

    fn pathname(&self) -> Option<String> {
        location_pathname()
    }

    fn ready_state(&self) -> ReadyState {
        document()
            .map(|doc| ReadyState::parse(&doc.ready_state()))
            .unwrap_or(ReadyState::Complete)
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        let doc = match document() {
            Ok(doc) => doc,
            Err(err) => {
                console_warn(&format!("Cannot wait for DOMContentLoaded: {}", err));
                return;
            }
        };

        let listener = Closure::once_into_js(move || callback());
        let options = AddEventListenerOptions::new();
        options.set_once(true);

        if let Err(err) = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            listener.unchecked_ref::<Function>(),
            &options,
        ) {
            console_warn(&format!(
                "Failed to register DOMContentLoaded listener: {}",
                LoadError::from(err)
            ));
        }
    }

    fn has_element(&self, id: &str) -> bool {
        document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(id))
            .is_some()
    }

    fn insert_stylesheet(&self, request: &SheetRequest) -> LoadResult<SheetLoad> {
        let doc = document()?;
        let head = doc
            .head()
            .ok_or_else(|| LoadError::Dom("No <head> element found in document".to_string()))?;

        let link: HtmlLinkElement = doc
            .create_element("link")?
            .dyn_into()
            .map_err(|_| LoadError::Dom("Created element is not a <link>".to_string()))?;
        link.set_rel("stylesheet");
        link.set_href(&request.path);
        if let Some(id) = &request.id {
            link.set_id(id);
        }

        // Handlers go on before the element is attached so a cached sheet
        // cannot fire `load` unobserved.
        let promise = Promise::new(&mut |resolve, reject| {
            link.set_onload(Some(&resolve));
            link.set_onerror(Some(&reject));
        });
        head.append_child(&link)?;

        let path = request.path.clone();
        Ok(Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|_| LoadError::Resource { path })
        }))
    }

    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
