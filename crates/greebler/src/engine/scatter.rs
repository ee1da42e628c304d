//! Free-floating random detail scattered over the whole canvas.

use serde::{Deserialize, Serialize};

use super::Greebler;
use crate::primitive::{Axis, Polarity, Primitive};

/// How many of each random primitive to scatter before partitioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScatterParams {
    /// Random grooves, up to half the canvas long.
    pub grooves: u32,
    /// Random rectangles, 20-69 pixels per side.
    pub rectangles: u32,
    /// Random circles, radius 20-69.
    pub circles: u32,
    /// Random rows of 3-9 random primitives.
    pub rows: u32,
}

impl ScatterParams {
    pub fn is_empty(&self) -> bool {
        self.grooves == 0 && self.rectangles == 0 && self.circles == 0 && self.rows == 0
    }
}

impl Greebler<'_> {
    /// Scatter random primitives over a `dim x dim` canvas.
    pub fn scatter(&mut self, dim: u32, params: &ScatterParams) {
        let dim = dim as i32;
        for _ in 0..params.grooves {
            self.random_groove(dim);
        }
        for _ in 0..params.rectangles {
            self.random_rectangle(dim);
        }
        for _ in 0..params.circles {
            self.random_circle(dim);
        }
        for _ in 0..params.rows {
            self.random_row(dim);
        }
    }

    fn random_groove(&mut self, dim: i32) {
        let polarity = Polarity::random(self.rng);
        let axis = Axis::random(self.rng);
        let x = self.rng.gen_range(0..dim);
        let y = self.rng.gen_range(0..dim);
        let len = self.rng.gen_range(0..(dim / 2).max(1));
        self.stamp(&Primitive::line(x, y, len, axis, polarity));
    }

    fn random_rectangle(&mut self, dim: i32) {
        let polarity = Polarity::random(self.rng);
        let x = self.rng.gen_range(0..dim);
        let y = self.rng.gen_range(0..dim);
        let width = self.rng.gen_range(20..70);
        let height = self.rng.gen_range(20..70);
        self.stamp(&Primitive::rectangle(x, y, width, height, polarity));
    }

    fn random_circle(&mut self, dim: i32) {
        let polarity = Polarity::random(self.rng);
        let x = self.rng.gen_range(0..dim);
        let y = self.rng.gen_range(0..dim);
        let radius = self.rng.gen_range(20..70);
        self.stamp(&Primitive::circle(x, y, radius, polarity));
    }

    fn random_row(&mut self, dim: i32) {
        let count = self.rng.gen_range(3..10);
        let axis = Axis::random(self.rng);
        let x = self.rng.gen_range(0..dim);
        let y = self.rng.gen_range(0..dim);
        let polarity = Polarity::random(self.rng);

        let (mut primitive, increment) = match self.rng.gen_range(0..3) {
            0 => {
                let len = self.rng.gen_range(0..(dim / 2).max(1));
                (Primitive::line(x, y, len, axis.perpendicular(), polarity), 5)
            }
            1 => {
                let width = self.rng.gen_range(5..40);
                let height = self.rng.gen_range(5..40);
                let increment = (1.2 * width.max(height) as f64) as i32;
                (Primitive::rectangle(x, y, width, height, polarity), increment)
            }
            _ => {
                let radius = self.rng.gen_range(5..40);
                let increment = (2.3 * radius as f64) as i32;
                (Primitive::circle(x, y, radius, polarity), increment)
            }
        };
        self.stamp_row(&mut primitive, axis, count, increment);
    }
}
