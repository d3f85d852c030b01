use wasm_bindgen::JsValue;

pub fn set_panic_hook() {
    // Route panic messages to console.error
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::utils::log(&format_args!($($t)*).to_string()))
}

pub(crate) use console_log;
