//! The greeble generation engine.
//!
//! [`Greebler`] borrows a height field and an RNG for the duration of one
//! generation and carries the recursion floor (`limit`). Its behavior is
//! split across submodules:
//!
//! - `stamp`: draws a single [`Primitive`](crate::primitive::Primitive)
//! - `row`: stamps a primitive repeatedly along an axis
//! - `circle`: concentric annulus-sector detail inside large circles
//! - `partition`: recursive region splitting and leaf population
//! - `scatter`: free-floating random detail over the whole canvas
//!
//! Rectangle stamping and region partitioning call each other, so all of
//! them are methods on the same type.

mod circle;
mod partition;
mod row;
mod scatter;
mod stamp;


use serde::Serialize;

use crate::height_field::HeightField;
use crate::rng::DeterministicRng;

pub use partition::Region;
pub use scatter::ScatterParams;

/// Groove centerline magnitude.
pub const GROOVE_DEPTH: i32 = 30;
/// Groove shoulder magnitude (one pixel either side of the centerline).
pub const GROOVE_SHOULDER: i32 = 15;
/// Rectangle interior magnitude.
pub const PANEL_DEPTH: i32 = 30;
/// Rectangle border magnitude.
pub const PANEL_EDGE: i32 = 15;
/// Circle fill magnitude.
pub const DISK_DEPTH: i32 = 20;
/// Annulus-sector outline magnitude.
pub const SECTOR_EDGE: i32 = 20;

/// Counters accumulated during one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Calls into the region partitioner.
    pub partition_calls: u64,
    /// Regions split by a groove.
    pub splits: u64,
    /// Regions populated as leaves.
    pub leaves: u64,
    /// Rectangle stamps handed back to the partitioner.
    pub delegated_rectangles: u64,
    /// Circles stamped.
    pub circles: u64,
    /// Annulus rings emitted by circle subdivision.
    pub rings: u64,
    /// Deepest circle subdivision observed.
    pub max_ring_depth: u32,
}

/// Mutable generation context.
pub struct Greebler<'a> {
    field: &'a mut HeightField,
    rng: &'a mut DeterministicRng,
    limit: i32,
    stats: GenerationStats,
}

impl<'a> Greebler<'a> {
    /// Create a generator over `field` with recursion floor `limit`.
    ///
    /// `limit` is clamped into `1..=i32::MAX`; [`crate::GreebleParams::validate`]
    /// rejects out-of-range values at the public entry points.
    pub fn new(field: &'a mut HeightField, rng: &'a mut DeterministicRng, limit: u32) -> Self {
        Self {
            field,
            rng,
            limit: i32::try_from(limit).unwrap_or(i32::MAX).max(1),
            stats: GenerationStats::default(),
        }
    }

    /// The recursion floor.
    #[inline]
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Counters so far.
    #[inline]
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Consume the generator, returning its counters.
    pub fn finish(self) -> GenerationStats {
        log::debug!(
            "greeble stats: {} partition calls, {} splits, {} leaves, {} delegated rectangles, {} circles, {} rings (max depth {})",
            self.stats.partition_calls,
            self.stats.splits,
            self.stats.leaves,
            self.stats.delegated_rectangles,
            self.stats.circles,
            self.stats.rings,
            self.stats.max_ring_depth,
        );
        self.stats
    }
}
