/// Parallel processing of independent images.
///
/// One transform is strictly sequential; throughput comes from running many
/// images at once, each with its own buffers.
use rayon::prelude::*;

use crate::coverage::CoverageImage;
use crate::error::CoverageError;
use crate::glyph::{glyph_to_sdf, GlyphParams, SdfGlyph};

/// An 8-bit coverage bitmap waiting to be baked.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Run [`CoverageImage::try_distance_map`] on every image in parallel.
///
/// Images that cannot be transformed are left untouched and reported by
/// index; the rest are transformed in place.
pub fn distance_maps_par(images: &mut [CoverageImage]) -> Vec<(usize, CoverageError)> {
    let mut errors: Vec<(usize, CoverageError)> = images
        .par_iter_mut()
        .enumerate()
        .filter_map(|(i, img)| match img.try_distance_map() {
            Ok(()) => None,
            Err(e) => {
                log::warn!("skipping image {}: {}", i, e);
                Some((i, e))
            }
        })
        .collect();
    errors.sort_by_key(|(i, _)| *i);
    errors
}

/// Bake many glyphs with the same parameters, preserving input order.
pub fn glyphs_to_sdf_par(
    glyphs: &[GlyphBitmap],
    params: &GlyphParams,
) -> Vec<Result<SdfGlyph, CoverageError>> {
    glyphs
        .par_iter()
        .enumerate()
        .map(|(i, g)| {
            let result = glyph_to_sdf(&g.data, g.width, g.height, params);
            if let Err(ref e) = result {
                log::warn!("skipping glyph {} ({}x{}): {}", i, g.width, g.height, e);
            }
            result
        })
        .collect()
}
