//! Recursive region partitioning.

use super::Greebler;
use crate::primitive::{Axis, Polarity, Primitive};

/// Axis-aligned rectangle `(x1, y1)..(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Region {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Region spanned by a `width x height` rectangle centered on (x, y).
    pub fn centered(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x - width / 2, y - height / 2, x + width / 2, y + height / 2)
    }

    /// Same region with `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    #[inline]
    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).abs()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).abs()
    }
}

impl Greebler<'_> {
    /// Either split `region` with a groove and recurse into both halves, or
    /// populate it as a leaf.
    pub fn partition(&mut self, region: Region) {
        self.stats.partition_calls += 1;

        let r = region.normalized();
        let (width, height) = (r.width(), r.height());
        let (split_axis, extent) = if width >= height {
            (Axis::Horizontal, width)
        } else {
            (Axis::Vertical, height)
        };

        if extent < self.limit
            || extent < 2
            || (extent < self.limit.saturating_mul(8) && self.rng.one_in(5))
        {
            log::trace!("leaf {:?} ({}x{})", r, width, height);
            self.stats.leaves += 1;
            self.populate_leaf(r);
            return;
        }

        let quarter = extent / 4;
        let offset = self.rng.gen_range(-quarter..=quarter);
        let split = (extent / 2 + offset).clamp(1, extent - 1);
        log::trace!("split {:?} along {:?} at +{}", r, split_axis, split);
        self.stats.splits += 1;

        match split_axis {
            Axis::Horizontal => {
                let sx = r.x1 + split;
                self.stamp_groove(
                    sx,
                    r.y1 + height / 2,
                    height,
                    Axis::Vertical,
                    Polarity::Raised.sign(),
                );
                self.partition(Region::new(r.x1, r.y1, sx, r.y2));
                self.partition(Region::new(sx, r.y1, r.x2, r.y2));
            }
            Axis::Vertical => {
                let sy = r.y1 + split;
                self.stamp_groove(
                    r.x1 + width / 2,
                    sy,
                    width,
                    Axis::Horizontal,
                    Polarity::Raised.sign(),
                );
                self.partition(Region::new(r.x1, r.y1, r.x2, sy));
                self.partition(Region::new(r.x1, sy, r.x2, r.y2));
            }
        }
    }

    /// Fill a leaf: rectangles three times in four, circles otherwise.
    fn populate_leaf(&mut self, r: Region) {
        if self.rng.gen_range(0..4) < 3 {
            self.fill_rectangles(r);
        } else {
            self.fill_circles(r);
        }
    }

    /// Lay 0-9 rectangles in a row across the region.
    fn fill_rectangles(&mut self, r: Region) {
        let count: u32 = self.rng.gen_range(0..10);
        if count == 0 {
            return;
        }
        let axis = Axis::random(self.rng);
        let polarity = Polarity::random(self.rng);
        self.lay_rectangles(r, count, axis, polarity);
    }

    /// Stamp the row planned by [`RectangleRow::plan`], if any.
    pub(super) fn lay_rectangles(
        &mut self,
        r: Region,
        count: u32,
        axis: Axis,
        polarity: Polarity,
    ) {
        if let Some(row) = RectangleRow::plan(r, count, axis) {
            let mut panel = Primitive::rectangle(row.x, row.y, row.width, row.height, polarity);
            self.stamp_row(&mut panel, axis, count, row.slot);
        }
    }

    /// Lay equal circles along the longer axis; partition any sizeable
    /// leftover strip.
    pub(super) fn fill_circles(&mut self, r: Region) {
        let Some(row) = CircleRow::plan(r, self.limit) else {
            return;
        };
        let polarity = Polarity::random(self.rng);
        let mut disk = Primitive::circle(row.x, row.y, row.radius, polarity);
        self.stamp_row(&mut disk, row.axis, row.count, row.increment);

        if let Some(rest) = row.rest {
            self.partition(rest);
        }
    }
}

/// Geometry of a leaf's rectangle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RectangleRow {
    /// Center of the first panel.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Distance between panel centers.
    pub slot: i32,
}

impl RectangleRow {
    /// Split the region into `count` slots along `axis`. `None` when a slot
    /// would be empty.
    pub fn plan(r: Region, count: u32, axis: Axis) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (width, height) = (r.width(), r.height());
        let (along, across) = match axis {
            Axis::Horizontal => (width, height),
            Axis::Vertical => (height, width),
        };
        let slot = along / i32::try_from(count).ok()?;
        if slot < 1 {
            return None;
        }
        // Panels sit inset inside their slot, so a delegated panel is
        // always smaller than this region.
        let panel_along = slot * 4 / 5;
        let panel_across = across * 4 / 5;

        Some(match axis {
            Axis::Horizontal => Self {
                x: r.x1 + slot / 2,
                y: r.y1 + height / 2,
                width: panel_along,
                height: panel_across,
                slot,
            },
            Axis::Vertical => Self {
                x: r.x1 + width / 2,
                y: r.y1 + slot / 2,
                width: panel_across,
                height: panel_along,
                slot,
            },
        })
    }
}

/// Geometry of a leaf's circle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct CircleRow {
    /// Center of the first circle.
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub axis: Axis,
    pub count: u32,
    pub increment: i32,
    /// Leftover strip handed back to the partitioner.
    pub rest: Option<Region>,
}

impl CircleRow {
    /// `None` when either side is below `limit` or the circles would vanish.
    pub fn plan(r: Region, limit: i32) -> Option<Self> {
        let (width, height) = (r.width(), r.height());
        if width < limit || height < limit {
            return None;
        }
        let (axis, longer, shorter) = if width >= height {
            (Axis::Horizontal, width, height)
        } else {
            (Axis::Vertical, height, width)
        };

        let radius = (shorter as f64 * 0.45) as i32;
        if radius < 1 {
            return None;
        }
        let count = longer / shorter;
        let used = count * shorter;
        let rest = (longer - used > limit).then(|| match axis {
            Axis::Horizontal => Region::new(r.x1 + used, r.y1, r.x2, r.y2),
            Axis::Vertical => Region::new(r.x1, r.y1 + used, r.x2, r.y2),
        });

        Some(Self {
            x: r.x1 + shorter / 2,
            y: r.y1 + shorter / 2,
            radius,
            axis,
            count: count as u32,
            increment: shorter,
            rest,
        })
    }
}
