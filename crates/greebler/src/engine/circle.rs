//! Concentric annulus-sector detail for large circles.

use std::f64::consts::TAU;

use super::Greebler;
use crate::primitive::{Polarity, Primitive};

impl Greebler<'_> {
    /// Decompose a circle into rings of annulus sectors, working inward
    /// until the remaining diameter no longer exceeds the limit.
    ///
    /// Returns the outer radius of every ring emitted, outermost first.
    /// The disk itself is not re-filled.
    pub fn subdivide_circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        polarity: Polarity,
    ) -> Vec<i32> {
        let mut rings = Vec::new();
        self.subdivide_ring(x, y, radius, polarity, 1, &mut rings);
        rings
    }

    fn subdivide_ring(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        polarity: Polarity,
        depth: u32,
        rings: &mut Vec<i32>,
    ) {
        if radius <= 0 {
            return;
        }

        // 30-80% of the outer radius; always strictly smaller.
        let inner = (radius as f64 * self.rng.gen_range(0.3..0.8)) as i32;

        for (start, end) in self.sector_spans() {
            let sector = Primitive::annulus_sector(x, y, inner, radius, start, end, polarity);
            self.stamp(&sector);
        }

        rings.push(radius);
        self.stats.rings += 1;
        self.stats.max_ring_depth = self.stats.max_ring_depth.max(depth);

        if inner.saturating_mul(2) > self.limit {
            self.subdivide_ring(x, y, inner, polarity, depth + 1, rings);
        }
    }

    /// Walk 0..TAU in uniform increments of TAU/20..TAU/10; the last span
    /// is cut short at TAU.
    pub(super) fn sector_spans(&mut self) -> Vec<(f64, f64)> {
        let mut spans = Vec::new();
        let mut angle = 0.0;
        while angle < TAU {
            let step = self.rng.gen_range(TAU / 20.0..TAU / 10.0);
            let end = (angle + step).min(TAU);
            spans.push((angle, end));
            angle = end;
        }
        spans
    }
}
