//! Console output. Writes through `web_sys::console` in the browser and falls
//! back to stdout/stderr on native targets (tests, tooling).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn console_info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    println!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_info(msg: &str) {
    println!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(msg: &str) {
    eprintln!("{}", msg);
}
