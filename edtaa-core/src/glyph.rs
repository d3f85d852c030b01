/// Glyph baking: 8-bit coverage bitmap -> padded -> distance map -> downscale -> 8-bit SDF.
///
/// Glyphs are rasterized at a high size and the distance field is scaled down
/// to atlas size, where a renderer thresholds it around mid-gray.
use image::GrayImage;

use crate::coverage::CoverageImage;
use crate::error::CoverageError;
use crate::resample::resize_bilinear;

/// Baking parameters for one glyph size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphParams {
    /// Size the coverage bitmap was rasterized at.
    pub highres_size: f64,
    /// Size of the glyph in the atlas.
    pub lowres_size: f64,
    /// Padding on each side, as a fraction of `highres_size`.
    pub padding: f64,
    /// Store `1 - v` so the inside of the glyph is bright.
    pub invert: bool,
}

impl GlyphParams {
    /// 64px rasterization baked down to 32px.
    pub fn standard() -> Self {
        Self {
            highres_size: 64.0,
            lowres_size: 32.0,
            padding: 0.1,
            invert: true,
        }
    }

    /// Large display text: more source detail, wider spread.
    pub fn large() -> Self {
        Self {
            highres_size: 128.0,
            lowres_size: 48.0,
            padding: 0.125,
            invert: true,
        }
    }

    /// Small UI text packed tightly.
    pub fn compact() -> Self {
        Self {
            highres_size: 48.0,
            lowres_size: 16.0,
            padding: 0.0625,
            invert: true,
        }
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "large" => Some(Self::large()),
            "compact" => Some(Self::compact()),
            _ => None,
        }
    }

    pub fn all_presets() -> Vec<(&'static str, Self)> {
        vec![
            ("standard", Self::standard()),
            ("large", Self::large()),
            ("compact", Self::compact()),
        ]
    }

    /// Return a copy with a different output polarity.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Padding in high resolution pixels.
    pub fn padding_pixels(&self) -> usize {
        (self.padding * self.highres_size).round().max(0.0) as usize
    }

    /// Ratio from high resolution pixels to atlas pixels.
    pub fn scale(&self) -> f64 {
        self.lowres_size / self.highres_size
    }

    /// Atlas dimensions for a padded high resolution field.
    ///
    /// Height follows the rounded width so the aspect ratio survives rounding.
    pub fn lowres_dimensions(&self, highres_width: usize, highres_height: usize) -> (usize, usize) {
        let w = (highres_width as f64 * self.scale()).round().max(2.0);
        let h = (highres_height as f64 * w / highres_width as f64)
            .round()
            .max(2.0);
        (w as usize, h as usize)
    }
}

impl Default for GlyphParams {
    fn default() -> Self {
        Self::standard()
    }
}

/// A baked glyph distance field.
#[derive(Debug, Clone, PartialEq)]
pub struct SdfGlyph {
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit distance values, 128 near the outline.
    pub data: Vec<u8>,
    /// Atlas pixels per high resolution pixel.
    pub scale: f64,
    /// Padding added around the bitmap, in high resolution pixels.
    pub padding: usize,
}

impl SdfGlyph {
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
    }
}

/// Quantize a normalized field to bytes, truncating like the atlas upload.
pub fn quantize(field: &[f64], invert: bool) -> Vec<u8> {
    field
        .iter()
        .map(|&v| {
            let v = v.clamp(0.0, 1.0);
            let v = if invert { 1.0 - v } else { v };
            (255.0 * v) as u8
        })
        .collect()
}

/// Bake an 8-bit coverage bitmap into an atlas-sized SDF.
///
/// Empty or uniform bitmaps (spaces, fully solid blocks) and non-positive
/// glyph sizes return an error instead of reaching the transform.
pub fn glyph_to_sdf(
    bitmap: &[u8],
    width: usize,
    height: usize,
    params: &GlyphParams,
) -> Result<SdfGlyph, CoverageError> {
    let valid_size = |s: f64| s.is_finite() && s > 0.0;
    if !valid_size(params.highres_size) || !valid_size(params.lowres_size) {
        return Err(CoverageError::InvalidGlyphSize {
            highres: params.highres_size,
            lowres: params.lowres_size,
        });
    }

    let padding = params.padding_pixels();
    let mut highres = CoverageImage::from_u8(bitmap, width, height)?.padded(padding);
    highres.try_distance_map()?;

    let (hw, hh) = (highres.width(), highres.height());

    let (lw, lh) = params.lowres_dimensions(hw, hh);
    let lowres = resize_bilinear(highres.as_slice(), hw, hh, lw, lh);

    Ok(SdfGlyph {
        width: lw,
        height: lh,
        data: quantize(&lowres, params.invert),
        scale: params.scale(),
        padding,
    })
}
