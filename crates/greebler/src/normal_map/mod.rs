//! Normal map synthesis from a finished height field.
//!
//! The encoding is stylized rather than a unit normal: x and y hold the
//! Sobel slope mapped into [0, 1] with 0.5 meaning flat, and z is always
//! 1.0. Consumers expect exactly this scale, so it is not renormalized.

mod conversion;

#[cfg(test)]
mod tests;

use crate::height_field::HeightField;

pub use conversion::{sobel_gradient, FLAT};

/// One encoded surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl NormalVector {
    /// Components scaled by 255 into bytes.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_byte(self.x), to_byte(self.y), to_byte(self.z)]
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

/// Per-pixel normals with the same dimensions as the source field.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMap {
    dim: u32,
    data: Vec<NormalVector>,
}

impl NormalMap {
    /// Derive the normal map of `field`.
    ///
    /// Pure function of the field; edge pixels replicate themselves.
    pub fn from_height_field(field: &HeightField) -> Self {
        let dim = field.dim();
        let mut data = Vec::with_capacity(dim as usize * dim as usize);
        for y in 0..dim as i32 {
            for x in 0..dim as i32 {
                data.push(conversion::normal_at(field, x, y));
            }
        }
        Self { dim, data }
    }

    /// Width (and height) in pixels.
    #[inline]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Read-only view of all vectors, row-major.
    #[inline]
    pub fn vectors(&self) -> &[NormalVector] {
        &self.data
    }

    /// Normal at (x, y), if inside the map.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<NormalVector> {
        if x >= self.dim || y >= self.dim {
            return None;
        }
        Some(self.data[(y * self.dim + x) as usize])
    }
}
