/// Owned coverage images and in-memory conversions.
///
/// A `CoverageImage` always holds exactly `width * height` samples in
/// row-major order. Whether it can be transformed is a separate question
/// answered by [`CoverageImage::validate`].
use image::GrayImage;
use ndarray::{Array2, ArrayView2};

use crate::distance_map::{distance_map, signed_distance_field, try_distance_map};
use crate::error::{validate_coverage, CoverageError};

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageImage {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl CoverageImage {
    /// Blank (fully background) image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self, CoverageError> {
        if data.len() != width * height {
            return Err(CoverageError::LengthMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Normalize an 8-bit coverage bitmap (0 = background, 255 = covered).
    pub fn from_u8(bitmap: &[u8], width: usize, height: usize) -> Result<Self, CoverageError> {
        Self::from_vec(
            width,
            height,
            bitmap.iter().map(|&v| v as f64 / 255.0).collect(),
        )
    }

    /// Luma values are read as coverage, so white is foreground.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        Self {
            width: w as usize,
            height: h as usize,
            data: img.as_raw().iter().map(|&v| v as f64 / 255.0).collect(),
        }
    }

    /// Rows of the array are image rows.
    pub fn from_array(view: ArrayView2<f64>) -> Self {
        let (height, width) = view.dim();
        Self {
            width,
            height,
            data: view.iter().copied().collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }

    /// Copy into a larger image with `padding` background pixels on every side.
    ///
    /// Padding keeps edges away from the border ring, where gradients are not
    /// estimated.
    pub fn padded(&self, padding: usize) -> Self {
        let mut out = Self::new(self.width + 2 * padding, self.height + 2 * padding);
        for y in 0..self.height {
            let src = &self.data[y * self.width..(y + 1) * self.width];
            let start = (y + padding) * out.width + padding;
            out.data[start..start + self.width].copy_from_slice(src);
        }
        out
    }

    /// Swap foreground and background (`v -> 1 - v`).
    pub fn invert(&mut self) {
        for v in self.data.iter_mut() {
            *v = 1.0 - *v;
        }
    }

    pub fn validate(&self) -> Result<(), CoverageError> {
        validate_coverage(&self.data, self.width, self.height)
    }

    /// Replace the coverage with its normalized signed distance field.
    ///
    /// # Panics
    /// Same conditions as [`crate::distance_map::distance_map`].
    pub fn distance_map(&mut self) {
        distance_map(&mut self.data, self.width, self.height);
    }

    /// Like [`CoverageImage::distance_map`] but reports unusable input
    /// instead of panicking. The image is unchanged on error.
    pub fn try_distance_map(&mut self) -> Result<(), CoverageError> {
        try_distance_map(&mut self.data, self.width, self.height)
    }

    /// Signed distance field as a new image, leaving `self` untouched.
    pub fn to_signed_distance(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: signed_distance_field(&self.data, self.width, self.height),
        }
    }

    /// Quantize to 8 bits, rounding and clamping to [0, 1] first.
    pub fn to_gray_image(&self) -> GrayImage {
        let bytes = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
            .collect();
        // Length is width * height by construction
        GrayImage::from_raw(self.width as u32, self.height as u32, bytes)
            .unwrap_or_else(|| GrayImage::new(self.width as u32, self.height as u32))
    }

    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.height, self.width), |(y, x)| self.get(x, y))
    }
}
