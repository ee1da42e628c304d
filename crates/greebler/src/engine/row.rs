//! Rows of repeated primitives.

use super::Greebler;
use crate::primitive::{Axis, Primitive};

impl Greebler<'_> {
    /// Stamp `primitive` `count` times, moving it `increment` along `axis`
    /// after each stamp.
    ///
    /// The primitive's position is left one increment past the last copy.
    pub fn stamp_row(&mut self, primitive: &mut Primitive, axis: Axis, count: u32, increment: i32) {
        for _ in 0..count {
            self.stamp(primitive);
            primitive.advance(axis, increment);
        }
    }
}
