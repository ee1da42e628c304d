//! Primitive stamping.

use super::{
    Greebler, Region, DISK_DEPTH, GROOVE_DEPTH, GROOVE_SHOULDER, PANEL_DEPTH, PANEL_EDGE,
    SECTOR_EDGE,
};
use crate::primitive::{polar_point, Axis, Primitive, Shape};
use crate::raster::line;

impl Greebler<'_> {
    /// Stamp one primitive into the height field.
    ///
    /// Coordinates outside the field are ignored, so primitives may hang
    /// off the canvas.
    pub fn stamp(&mut self, primitive: &Primitive) {
        let sign = primitive.polarity.sign();
        let (x, y) = (primitive.x, primitive.y);
        match primitive.shape {
            Shape::Line { len, axis } => self.stamp_groove(x, y, len, axis, sign),
            Shape::Rectangle { width, height } => {
                // One rectangle in five becomes a partitioned area instead.
                if self.rng.one_in(5) {
                    self.stats.delegated_rectangles += 1;
                    let region = Region::centered(x, y, width, height);
                    self.partition(region);
                } else {
                    self.stamp_rectangle(x, y, width, height, sign);
                }
            }
            Shape::Circle { radius } => {
                self.stamp_disk(x, y, radius, sign);
                self.stats.circles += 1;
                if radius.saturating_mul(2) > self.limit {
                    self.subdivide_circle(x, y, radius, primitive.polarity);
                }
            }
            Shape::AnnulusSector {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            } => self.stamp_annulus_sector(
                x,
                y,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                sign,
            ),
        }
    }

    /// V-profile groove of `len` steps centered on (x, y).
    pub(super) fn stamp_groove(&mut self, x: i32, y: i32, len: i32, axis: Axis, sign: i32) {
        let (dx, dy) = axis.step();
        let mut x = x - (len / 2) * dx;
        let mut y = y - (len / 2) * dy;
        for _ in 0..len {
            self.field.set_height(x, y, GROOVE_DEPTH * sign);
            self.field.set_height(x + dy, y + dx, GROOVE_SHOULDER * sign);
            self.field.set_height(x - dy, y - dx, GROOVE_SHOULDER * sign);
            x += dx;
            y += dy;
        }
    }

    fn stamp_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, sign: i32) {
        let (lox, hix) = (x - width / 2, x + width / 2);
        let (loy, hiy) = (y - height / 2, y + height / 2);

        for j in (loy + 1)..hiy {
            for i in (lox + 1)..hix {
                self.field.set_height(i, j, PANEL_DEPTH * sign);
            }
        }

        for i in lox..=hix {
            self.field.set_height(i, loy, PANEL_EDGE * sign);
            if hiy != loy {
                self.field.set_height(i, hiy, PANEL_EDGE * sign);
            }
        }
        for j in (loy + 1)..hiy {
            self.field.set_height(lox, j, PANEL_EDGE * sign);
            if hix != lox {
                self.field.set_height(hix, j, PANEL_EDGE * sign);
            }
        }
    }

    fn stamp_disk(&mut self, x: i32, y: i32, radius: i32, sign: i32) {
        let r2 = radius as i64 * radius as i64;
        for j in (y - radius)..=(y + radius) {
            let dy = (j - y) as i64;
            for i in (x - radius)..=(x + radius) {
                let dx = (i - x) as i64;
                if dx * dx + dy * dy < r2 {
                    self.field.set_height(i, j, DISK_DEPTH * sign);
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn stamp_annulus_sector(
        &mut self,
        x: i32,
        y: i32,
        inner_radius: i32,
        outer_radius: i32,
        start_angle: f64,
        end_angle: f64,
        sign: i32,
    ) {
        let inner_start = polar_point(x, y, inner_radius, start_angle);
        let inner_end = polar_point(x, y, inner_radius, end_angle);
        let outer_start = polar_point(x, y, outer_radius, start_angle);
        let outer_end = polar_point(x, y, outer_radius, end_angle);

        let edges = [
            (inner_start, inner_end),
            (inner_start, outer_start),
            (inner_end, outer_end),
            (outer_start, outer_end),
        ];
        for (from, to) in edges {
            for (px, py) in line(from, to) {
                self.field.set_height(px, py, SECTOR_EDGE * sign);
            }
        }
    }
}
