//! Primitive shapes stamped into the height field.

use crate::rng::DeterministicRng;

/// Axis-aligned direction shared by grooves, rows, and splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit step `(dx, dy)` along this axis.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }

    /// The other axis.
    #[inline]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Pick an axis uniformly at random.
    pub fn random(rng: &mut DeterministicRng) -> Axis {
        if rng.coin() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// Whether a primitive raises or sinks the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Raised,
    Sunken,
}

impl Polarity {
    /// `+1` for raised, `-1` for sunken.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Raised => 1,
            Polarity::Sunken => -1,
        }
    }

    /// Pick a polarity uniformly at random.
    pub fn random(rng: &mut DeterministicRng) -> Polarity {
        if rng.coin() {
            Polarity::Raised
        } else {
            Polarity::Sunken
        }
    }
}

/// Shape-specific parameters of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Groove or ridge of `len` steps centered on the position.
    Line { len: i32, axis: Axis },
    /// Axis-aligned panel centered on the position.
    Rectangle { width: i32, height: i32 },
    /// Filled disk.
    Circle { radius: i32 },
    /// Outline of a ring segment; angles in radians.
    AnnulusSector {
        inner_radius: i32,
        outer_radius: i32,
        start_angle: f64,
        end_angle: f64,
    },
}

/// A shape at a position with a polarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub x: i32,
    pub y: i32,
    pub polarity: Polarity,
    pub shape: Shape,
}

impl Primitive {
    pub fn new(x: i32, y: i32, polarity: Polarity, shape: Shape) -> Self {
        Self {
            x,
            y,
            polarity,
            shape,
        }
    }

    pub fn line(x: i32, y: i32, len: i32, axis: Axis, polarity: Polarity) -> Self {
        Self::new(x, y, polarity, Shape::Line { len, axis })
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, polarity: Polarity) -> Self {
        Self::new(x, y, polarity, Shape::Rectangle { width, height })
    }

    pub fn circle(x: i32, y: i32, radius: i32, polarity: Polarity) -> Self {
        Self::new(x, y, polarity, Shape::Circle { radius })
    }

    pub fn annulus_sector(
        x: i32,
        y: i32,
        inner_radius: i32,
        outer_radius: i32,
        start_angle: f64,
        end_angle: f64,
        polarity: Polarity,
    ) -> Self {
        Self::new(
            x,
            y,
            polarity,
            Shape::AnnulusSector {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            },
        )
    }

    /// Move the position `distance` units along `axis`.
    #[inline]
    pub fn advance(&mut self, axis: Axis, distance: i32) {
        let (dx, dy) = axis.step();
        self.x += dx * distance;
        self.y += dy * distance;
    }
}

/// Polar to image coordinates (y grows downward).
#[inline]
pub(crate) fn polar_point(cx: i32, cy: i32, radius: i32, angle: f64) -> (i32, i32) {
    let r = radius as f64;
    (
        (cx as f64 + r * angle.cos()).round() as i32,
        (cy as f64 - r * angle.sin()).round() as i32,
    )
}
