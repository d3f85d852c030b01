use edtaa_core::glyph::GlyphParams as CoreGlyphParams;
use wasm_bindgen::prelude::*;

/// Glyph baking parameters.
#[wasm_bindgen]
pub struct GlyphParams {
    pub(crate) inner: CoreGlyphParams,
}

#[wasm_bindgen]
impl GlyphParams {
    /// Create parameters with custom values.
    #[wasm_bindgen(constructor)]
    pub fn new(
        highres_size: f64,
        lowres_size: f64,
        padding: f64,
        invert: bool,
    ) -> Result<GlyphParams, JsValue> {
        if !(highres_size > 0.0 && lowres_size > 0.0) {
            return Err(JsValue::from_str("Glyph sizes must be positive"));
        }
        if !(0.0..1.0).contains(&padding) {
            return Err(JsValue::from_str("Padding must be a fraction in [0, 1)"));
        }

        Ok(Self {
            inner: CoreGlyphParams {
                highres_size,
                lowres_size,
                padding,
                invert,
            },
        })
    }

    /// 64px rasterization baked down to 32px.
    #[wasm_bindgen(js_name = standard)]
    pub fn standard() -> Self {
        Self {
            inner: CoreGlyphParams::standard(),
        }
    }

    /// Large display text.
    #[wasm_bindgen(js_name = large)]
    pub fn large() -> Self {
        Self {
            inner: CoreGlyphParams::large(),
        }
    }

    /// Small UI text.
    #[wasm_bindgen(js_name = compact)]
    pub fn compact() -> Self {
        Self {
            inner: CoreGlyphParams::compact(),
        }
    }

    /// Look up a preset by name ("standard", "large", "compact").
    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(name: &str) -> Result<GlyphParams, JsValue> {
        CoreGlyphParams::from_preset(name)
            .map(|inner| Self { inner })
            .ok_or_else(|| JsValue::from_str(&format!("Unknown preset: {}", name)))
    }

    /// Padding in high resolution pixels.
    #[wasm_bindgen(getter, js_name = paddingPixels)]
    pub fn padding_pixels(&self) -> usize {
        self.inner.padding_pixels()
    }

    #[wasm_bindgen(getter)]
    pub fn invert(&self) -> bool {
        self.inner.invert
    }

    #[wasm_bindgen(setter)]
    pub fn set_invert(&mut self, invert: bool) {
        self.inner = self.inner.with_invert(invert);
    }
}
