pub mod coverage;
pub mod directional;
pub mod distance_map;
pub mod edge;
pub mod error;

#[cfg(not(target_arch = "wasm32"))]
pub mod ffi;

pub mod glyph;
pub mod gradient;
pub mod resample;
pub mod sweep;

#[cfg(feature = "parallel")]
pub mod batch;

pub use coverage::CoverageImage;
pub use distance_map::{
    bipolar_field, distance_map, signed_distance_field, try_distance_map,
    try_signed_distance_field,
};
pub use error::{validate_coverage, CoverageError};
pub use glyph::{glyph_to_sdf, GlyphParams, SdfGlyph};

/// Distance assigned to pixels with no known edge yet.
pub const UNSET_DISTANCE: f64 = 1_000_000.0;

/// Minimum improvement for the sweep to adopt a new candidate.
pub const SWEEP_EPSILON: f64 = 1e-3;
