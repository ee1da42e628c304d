//! Conversion of finished fields to RGBA8 pixel buffers.
//!
//! Both buffers are `4 * dim * dim` bytes, row-major, alpha 255.

use crate::height_field::HeightField;
use crate::normal_map::NormalMap;
use crate::params::ToneRange;

/// Map a height sample linearly from `range` onto [0, 255].
///
/// `range` is expected to be validated (`max > min`).
#[inline]
pub fn tone_map(sample: u8, range: ToneRange) -> u8 {
    let t = (sample as f32 - range.min) / (range.max - range.min);
    (t * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Greyscale RGBA image of the height field.
pub fn height_to_rgba(field: &HeightField, range: ToneRange) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.samples().len() * 4);
    for &sample in field.samples() {
        let c = tone_map(sample, range);
        bytes.extend_from_slice(&[c, c, c, 255]);
    }
    bytes
}

/// RGBA image of the normal map, each component scaled by 255.
pub fn normal_to_rgba(normals: &NormalMap) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(normals.vectors().len() * 4);
    for n in normals.vectors() {
        let [r, g, b] = n.to_rgb8();
        bytes.extend_from_slice(&[r, g, b, 255]);
    }
    bytes
}
