//! Main entry point for greeble generation.
//!
//! [`generate_with_params`] validates parameters, runs the scatter passes
//! and the region partitioner over a fresh height field, then derives the
//! normal map. Encoding and saving are separate steps.

use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

use crate::engine::{GenerationStats, Greebler, Region};
use crate::export::{height_to_rgba, normal_to_rgba};
use crate::height_field::HeightField;
use crate::normal_map::NormalMap;
use crate::params::GreebleParams;
use crate::png::{self, PngConfig, PngError};
use crate::rng::DeterministicRng;

/// Errors from greeble generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Png(_) => "GREEBLE_001",
            GenerateError::Io(_) => "GREEBLE_002",
            GenerateError::InvalidParameter(_) => "GREEBLE_003",
            GenerateError::Write { .. } => "GREEBLE_004",
        }
    }

    /// Error category for grouping.
    pub fn category(&self) -> &'static str {
        match self {
            GenerateError::InvalidParameter(_) => "params",
            GenerateError::Png(_) | GenerateError::Io(_) | GenerateError::Write { .. } => {
                "export"
            }
        }
    }
}

/// A finished generation.
#[derive(Debug, Clone)]
pub struct GreebleResult {
    /// Parameters the result was generated from.
    pub params: GreebleParams,
    /// The height field.
    pub height: HeightField,
    /// Normals derived from `height`.
    pub normals: NormalMap,
    /// Generation counters.
    pub stats: GenerationStats,
}

/// Encoded PNG images of a result.
#[derive(Debug, Clone)]
pub struct EncodedImages {
    /// Height image PNG bytes.
    pub height_png: Vec<u8>,
    /// BLAKE3 hash of `height_png`.
    pub height_hash: String,
    /// Normal image PNG bytes.
    pub normal_png: Vec<u8>,
    /// BLAKE3 hash of `normal_png`.
    pub normal_hash: String,
}

/// Generate a height field and normal map for `dim`, `limit`, `seed`.
pub fn generate(
    dim: u32,
    limit: u32,
    seed: u64,
) -> Result<(HeightField, NormalMap), GenerateError> {
    let result = generate_with_params(&GreebleParams::new(dim, limit, seed))?;
    Ok((result.height, result.normals))
}

/// Generate from full parameters.
pub fn generate_with_params(params: &GreebleParams) -> Result<GreebleResult, GenerateError> {
    params.validate()?;
    let start = Instant::now();

    let mut height = HeightField::new(params.dim);
    let mut rng = DeterministicRng::new(params.seed);
    let mut greebler = Greebler::new(&mut height, &mut rng, params.limit);

    if !params.scatter.is_empty() {
        greebler.scatter(params.dim, &params.scatter);
    }
    for region in tiles(params.dim, params.regions) {
        greebler.partition(region);
    }
    let stats = greebler.finish();

    let normals = NormalMap::from_height_field(&height);

    log::info!(
        "generated {}x{} greeble (limit {}, seed {}) in {:.2?}",
        params.dim,
        params.dim,
        params.limit,
        params.seed,
        start.elapsed()
    );

    Ok(GreebleResult {
        params: params.clone(),
        height,
        normals,
        stats,
    })
}

/// Split a `dim x dim` canvas into `regions x regions` tiles; the last
/// row and column absorb any remainder.
fn tiles(dim: u32, regions: u32) -> Vec<Region> {
    let dim = dim as i32;
    let regions = regions.max(1) as i32;
    let tile = dim / regions;
    let edge = |i: i32| if i == regions { dim } else { i * tile };

    let mut out = Vec::with_capacity((regions * regions) as usize);
    for ty in 0..regions {
        for tx in 0..regions {
            out.push(Region::new(edge(tx), edge(ty), edge(tx + 1), edge(ty + 1)));
        }
    }
    out
}

impl GreebleResult {
    /// Tone-mapped height image as RGBA8.
    pub fn height_rgba(&self) -> Vec<u8> {
        height_to_rgba(&self.height, self.params.tone_range)
    }

    /// Normal image as RGBA8.
    pub fn normal_rgba(&self) -> Vec<u8> {
        normal_to_rgba(&self.normals)
    }

    /// Encode both images as PNG.
    pub fn encode(&self, config: &PngConfig) -> Result<EncodedImages, GenerateError> {
        let dim = self.params.dim;
        let (height_png, height_hash) =
            png::write_rgba_to_vec_with_hash(&self.height_rgba(), dim, dim, config)?;
        let (normal_png, normal_hash) =
            png::write_rgba_to_vec_with_hash(&self.normal_rgba(), dim, dim, config)?;
        Ok(EncodedImages {
            height_png,
            height_hash,
            normal_png,
            normal_hash,
        })
    }
}

/// Write encoded images to the given paths, creating parent directories.
///
/// A failure names the file that could not be written.
pub fn save_images(
    images: &EncodedImages,
    height_path: &Path,
    normal_path: &Path,
) -> Result<(), GenerateError> {
    for (path, data) in [
        (height_path, &images.height_png),
        (normal_path, &images.normal_png),
    ] {
        write_file(path, data).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, data)
}
