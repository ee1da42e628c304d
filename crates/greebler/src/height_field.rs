//! Square 8-bit height field.

/// Initial height of every sample.
pub const MID_HEIGHT: u8 = 128;

/// Square grid of 8-bit height samples (row-major).
///
/// The only mutator is [`HeightField::set_height`], a clamped add that
/// silently ignores coordinates outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    dim: u32,
    data: Vec<u8>,
}

impl HeightField {
    /// Create a new `dim x dim` field filled with [`MID_HEIGHT`].
    pub fn new(dim: u32) -> Self {
        let size = dim as usize * dim as usize;
        Self {
            dim,
            data: vec![MID_HEIGHT; size],
        }
    }

    /// Width (and height) in samples.
    #[inline]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Read-only view of all samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let dim = self.dim as i32;
        if x < 0 || x >= dim || y < 0 || y >= dim {
            return None;
        }
        Some(y as usize * self.dim as usize + x as usize)
    }

    /// Get the sample at the given coordinates, if inside the field.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.data[idx])
    }

    /// Get a sample with coordinates clamped to the field edge.
    #[inline]
    pub fn get_clamped(&self, x: i32, y: i32) -> u8 {
        let max = self.dim as i32 - 1;
        let cx = x.clamp(0, max) as usize;
        let cy = y.clamp(0, max) as usize;
        self.data[cy * self.dim as usize + cx]
    }

    /// Add `delta` to the sample at (x, y), clamping to [0, 255].
    ///
    /// Out-of-range coordinates are a no-op.
    #[inline]
    pub fn set_height(&mut self, x: i32, y: i32, delta: i32) {
        if let Some(idx) = self.index(x, y) {
            let h = self.data[idx] as i32 + delta;
            self.data[idx] = h.clamp(0, 255) as u8;
        }
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// True if no sample differs from [`MID_HEIGHT`].
    pub fn is_flat(&self) -> bool {
        self.data.iter().all(|&v| v == MID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_flat() {
        let field = HeightField::new(16);
        assert_eq!(field.dim(), 16);
        assert_eq!(field.samples().len(), 256);
        assert!(field.is_flat());
        assert_eq!(field.min_max(), (128, 128));
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut field = HeightField::new(8);
        let before = field.clone();
        for &(x, y) in &[(-1, 0), (0, -1), (8, 0), (0, 8), (i32::MIN, i32::MAX), (100, -100)] {
            field.set_height(x, y, 50);
        }
        assert_eq!(field, before);
        assert_eq!(field.get(8, 0), None);
        assert_eq!(field.get(-1, 3), None);
    }

    #[test]
    fn set_height_clamps() {
        let mut field = HeightField::new(4);
        field.set_height(1, 1, 100);
        assert_eq!(field.get(1, 1), Some(228));
        field.set_height(1, 1, 100);
        assert_eq!(field.get(1, 1), Some(255));
        field.set_height(1, 1, -1000);
        assert_eq!(field.get(1, 1), Some(0));
        field.set_height(1, 1, -1);
        assert_eq!(field.get(1, 1), Some(0));
        field.set_height(1, 1, 30);
        assert_eq!(field.get(1, 1), Some(30));
    }

    #[test]
    fn clamp_holds_for_delta_sequences() {
        let mut field = HeightField::new(2);
        let deltas = [30, 30, 30, 30, 30, -15, -200, 15, 20, -20, 255, -255, 127];
        let mut expected: i32 = 128;
        for &d in &deltas {
            field.set_height(0, 0, d);
            expected = (expected + d).clamp(0, 255);
            assert_eq!(field.get(0, 0), Some(expected as u8));
        }
    }

    #[test]
    fn get_clamped_replicates_edges() {
        let mut field = HeightField::new(3);
        field.set_height(0, 0, 10);
        field.set_height(2, 2, -10);
        assert_eq!(field.get_clamped(-5, -5), 138);
        assert_eq!(field.get_clamped(9, 9), 118);
        assert_eq!(field.get_clamped(1, -1), 128);
    }
}
