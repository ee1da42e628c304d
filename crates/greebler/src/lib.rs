//! Greebler: procedural greeble height fields and normal maps.
//!
//! This crate synthesizes a greyscale height field depicting a paneled,
//! grooved surface (spacecraft-hull style detail) and derives a per-pixel
//! normal map from it. All output is byte-identical given the same seed
//! and parameters.
//!
//! # Pipeline
//!
//! - A square region is recursively split by straight grooves until the
//!   pieces fall below `limit` (or randomly stop early).
//! - Leaf regions are filled with rows of rectangles or circles; some
//!   rectangles are themselves partitioned, and large circles get rings
//!   of annulus-sector panel lines.
//! - A Sobel pass over the finished field produces the normal map.
//!
//! # Example
//!
//! ```no_run
//! use greebler::{generate_with_params, save_images, GreebleParams, PngConfig};
//! use std::path::Path;
//!
//! let params = GreebleParams::new(1024, 32, 42);
//! let result = generate_with_params(&params).unwrap();
//! let images = result.encode(&PngConfig::default()).unwrap();
//! save_images(&images, Path::new("heightmap.png"), Path::new("normalmap.png")).unwrap();
//! ```

pub mod engine;
pub mod export;
pub mod generate;
pub mod height_field;
pub mod normal_map;
pub mod params;
pub mod png;
pub mod primitive;
pub mod raster;
pub mod rng;

// Re-export main types for convenience
pub use engine::{GenerationStats, Greebler, Region, ScatterParams};
pub use generate::{
    generate, generate_with_params, save_images, EncodedImages, GenerateError, GreebleResult,
};
pub use height_field::HeightField;
pub use normal_map::{NormalMap, NormalVector};
pub use params::{GreebleParams, ToneRange};
pub use png::{PngConfig, PngError};
pub use primitive::{Axis, Polarity, Primitive, Shape};
pub use rng::DeterministicRng;
