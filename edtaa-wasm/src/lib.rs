use wasm_bindgen::prelude::*;

mod params;
mod processor;
mod utils;

pub use params::GlyphParams;
pub use processor::SdfGenerator;

/// Initialize the WASM module (sets up panic hook so failed assertions reach the console).
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}
