use js_sys::Promise;
use sheetload_core::{LoaderConfig, StylesheetLoader};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::host::DocumentHost;

/// JavaScript handle: `new StylesheetLoader(config?)`.
///
/// Nothing runs on construction; call `init()` to start loading.
#[wasm_bindgen(js_name = StylesheetLoader)]
pub struct JsStylesheetLoader {
    inner: StylesheetLoader<DocumentHost>,
}

#[wasm_bindgen(js_class = StylesheetLoader)]
impl JsStylesheetLoader {
    /// `config` is an optional object such as
    /// `{ genericCandidates: ["style.css"], basePath: "./" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsStylesheetLoader, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            LoaderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            inner: StylesheetLoader::with_config(DocumentHost::new(), config),
        })
    }

    /// Resolves once the sheet loads; rejects with an `Error` naming the path.
    pub fn load(&self, path: String, id: Option<String>) -> Promise {
        let loader = self.inner.clone();
        future_to_promise(async move {
            loader
                .load(&path, id.as_deref())
                .await
                .map(|()| JsValue::UNDEFINED)
                .map_err(|err| js_sys::Error::new(&err.to_string()).into())
        })
    }

    /// Resolves with the name of the shared sheet that loaded, or `undefined`.
    #[wasm_bindgen(js_name = loadGeneric)]
    pub fn load_generic(&self) -> Promise {
        let loader = self.inner.clone();
        future_to_promise(async move {
            Ok(loader
                .load_generic()
                .await
                .map(JsValue::from)
                .unwrap_or(JsValue::UNDEFINED))
        })
    }

    #[wasm_bindgen(js_name = autoLoad)]
    pub fn auto_load(&self) -> Promise {
        let loader = self.inner.clone();
        future_to_promise(async move {
            loader.auto_load().await;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn init(&self) {
        self.inner.init();
    }
}
