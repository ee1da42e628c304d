//! Integer line rasterization.

/// Lazily yields the pixels of a straight segment between two integer
/// endpoints (Bresenham, all octants).
///
/// Both endpoints are included; equal endpoints yield a single point.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    /// Rasterize the segment from `(x0, y0)` to `(x1, y1)`.
    pub fn new((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Self {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

impl std::iter::FusedIterator for LinePoints {}

/// Convenience wrapper around [`LinePoints::new`].
pub fn line(from: (i32, i32), to: (i32, i32)) -> LinePoints {
    LinePoints::new(from, to)
}
