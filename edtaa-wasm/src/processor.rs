use edtaa_core::distance_map::{try_distance_map, try_signed_distance_field};
use edtaa_core::glyph::glyph_to_sdf;
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

use crate::params::GlyphParams;
use crate::utils::console_log;

/// Distance field generation for JavaScript callers.
#[wasm_bindgen]
pub struct SdfGenerator;

#[wasm_bindgen]
impl SdfGenerator {
    /// Replace coverage values (row-major, 0..1) with the normalized signed distance field.
    ///
    /// Unlike the native API, input without a usable edge is reported as an
    /// error instead of aborting the module. The array is unchanged on error.
    #[wasm_bindgen(js_name = distanceMap)]
    pub fn distance_map(data: &mut [f64], width: usize, height: usize) -> Result<(), JsValue> {
        try_distance_map(data, width, height)
            .map_err(|e| JsValue::from_str(&format!("Invalid coverage: {}", e)))
    }

    /// Compute the signed distance field into a new array, leaving `data` untouched.
    #[wasm_bindgen(js_name = signedDistanceField)]
    pub fn signed_distance_field(
        data: &[f64],
        width: usize,
        height: usize,
    ) -> Result<Float64Array, JsValue> {
        let field = try_signed_distance_field(data, width, height)
            .map_err(|e| JsValue::from_str(&format!("Invalid coverage: {}", e)))?;
        Ok(Float64Array::from(&field[..]))
    }

    /// Bake an 8-bit glyph coverage bitmap into an atlas-sized SDF.
    ///
    /// # Returns
    /// Row-major 8-bit SDF of `outputWidth(...) x outputHeight(...)` pixels
    #[wasm_bindgen(js_name = glyphToSdf)]
    pub fn glyph_to_sdf(
        bitmap: &[u8],
        width: usize,
        height: usize,
        params: &GlyphParams,
    ) -> Result<Vec<u8>, JsValue> {
        let glyph = glyph_to_sdf(bitmap, width, height, &params.inner)
            .map_err(|e| JsValue::from_str(&format!("Failed to bake glyph: {}", e)))?;
        console_log!(
            "baked {}x{} glyph into {}x{} SDF",
            width,
            height,
            glyph.width,
            glyph.height
        );
        Ok(glyph.data)
    }

    /// Width of the SDF `glyphToSdf` produces for a bitmap of this size.
    #[wasm_bindgen(js_name = outputWidth)]
    pub fn output_width(width: usize, height: usize, params: &GlyphParams) -> usize {
        let pad = 2 * params.inner.padding_pixels();
        params.inner.lowres_dimensions(width + pad, height + pad).0
    }

    /// Height of the SDF `glyphToSdf` produces for a bitmap of this size.
    #[wasm_bindgen(js_name = outputHeight)]
    pub fn output_height(width: usize, height: usize, params: &GlyphParams) -> usize {
        let pad = 2 * params.inner.padding_pixels();
        params.inner.lowres_dimensions(width + pad, height + pad).1
    }
}
