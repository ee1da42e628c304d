//! Height field to normal conversion.

use super::NormalVector;
use crate::height_field::HeightField;

/// Encoding of a flat surface.
pub const FLAT: NormalVector = NormalVector {
    x: 0.5,
    y: 0.5,
    z: 1.0,
};

/// Sobel gradient at (x, y) with edge replication.
///
/// `gx` accumulates left-minus-right differences over the three rows,
/// `gy` accumulates above-minus-below over the three columns, each
/// weighted 1-2-1.
pub fn sobel_gradient(field: &HeightField, x: i32, y: i32) -> (i32, i32) {
    let h = |dx: i32, dy: i32| field.get_clamped(x + dx, y + dy) as i32;

    // Gx = | 1  0 -1 |    Gy = |  1  2  1 |
    //      | 2  0 -2 |         |  0  0  0 |
    //      | 1  0 -1 |         | -1 -2 -1 |
    let gx = (h(-1, -1) - h(1, -1)) + 2 * (h(-1, 0) - h(1, 0)) + (h(-1, 1) - h(1, 1));
    let gy = (h(-1, -1) - h(-1, 1)) + 2 * (h(0, -1) - h(0, 1)) + (h(1, -1) - h(1, 1));

    (gx, gy)
}

#[inline]
fn encode_slope(g: i32) -> f32 {
    ((g as f32 / 4.0) / 127.0 + 0.5).clamp(0.0, 1.0)
}

/// Encoded normal at (x, y).
pub(crate) fn normal_at(field: &HeightField, x: i32, y: i32) -> NormalVector {
    let (gx, gy) = sobel_gradient(field, x, y);
    NormalVector {
        x: encode_slope(gx),
        y: encode_slope(gy),
        z: 1.0,
    }
}
