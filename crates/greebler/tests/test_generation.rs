//! End-to-end tests for greeble generation.
//!
//! These exercise the public API only: parameter validation, determinism,
//! output ranges, and termination.

use greebler::normal_map::FLAT;
use greebler::{
    generate, generate_with_params, GreebleParams, HeightField, NormalMap, PngConfig,
    ScatterParams,
};
use pretty_assertions::assert_eq;

// ============================================================================
// End-to-end
// ============================================================================

/// The reference small run produces visible detail and well-formed normals.
#[test]
fn test_generate_64_8_42() {
    let (height, normals) = generate(64, 8, 42).unwrap();

    assert_eq!(height.dim(), 64);
    assert_eq!(normals.dim(), 64);
    assert_eq!(height.samples().len(), 64 * 64);
    assert_eq!(normals.vectors().len(), 64 * 64);

    assert!(
        height.samples().iter().any(|&v| v != 128),
        "at least one groove or primitive should have been applied"
    );

    for n in normals.vectors() {
        assert!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
        assert!((0.0..=1.0).contains(&n.x), "x out of range: {}", n.x);
        assert!((0.0..=1.0).contains(&n.y), "y out of range: {}", n.y);
        assert_eq!(n.z, 1.0);
    }
}

/// Every seed in a sweep produces a non-flat surface.
#[test]
fn test_generation_always_marks_surface() {
    for seed in 0..16 {
        let (height, _) = generate(128, 16, seed).unwrap();
        assert!(!height.is_flat(), "seed {} left the field flat", seed);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_is_byte_identical() {
    let (h1, n1) = generate(128, 8, 1234).unwrap();
    let (h2, n2) = generate(128, 8, 1234).unwrap();

    assert_eq!(h1.samples(), h2.samples());
    assert!(n1 == n2, "normal maps differ for identical input");
}

#[test]
fn test_same_seed_encodes_identically() {
    let params = GreebleParams::new(96, 12, 77);
    let a = generate_with_params(&params).unwrap();
    let b = generate_with_params(&params).unwrap();

    let config = PngConfig::default();
    let ia = a.encode(&config).unwrap();
    let ib = b.encode(&config).unwrap();
    assert_eq!(ia.height_hash, ib.height_hash);
    assert_eq!(ia.normal_hash, ib.normal_hash);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn test_different_seeds_differ() {
    let (h1, _) = generate(128, 8, 1).unwrap();
    let (h2, _) = generate(128, 8, 2).unwrap();
    assert!(h1.samples() != h2.samples());
}

#[test]
fn test_scatter_is_deterministic() {
    let mut params = GreebleParams::new(256, 16, 5);
    params.scatter = ScatterParams {
        grooves: 20,
        rectangles: 5,
        circles: 3,
        rows: 10,
    };
    let a = generate_with_params(&params).unwrap();
    let b = generate_with_params(&params).unwrap();
    assert!(a.height == b.height);

    let plain = generate_with_params(&GreebleParams::new(256, 16, 5)).unwrap();
    assert!(plain.height != a.height);
}

// ============================================================================
// Normal map properties
// ============================================================================

#[test]
fn test_flat_field_normal_map() {
    let normals = NormalMap::from_height_field(&HeightField::new(64));
    assert!(normals.vectors().iter().all(|n| *n == FLAT));
}

#[test]
fn test_normal_synthesis_is_pure() {
    let (height, normals) = generate(64, 8, 9).unwrap();
    let again = NormalMap::from_height_field(&height);
    assert!(normals == again);
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_partitioner_call_count_is_bounded() {
    for (dim, limit) in [(64u32, 8u32), (128, 16), (256, 32), (128, 4)] {
        let cells = (dim / limit) as u64;
        let bound = 16 * cells * cells;
        for seed in 0..8 {
            let result = generate_with_params(&GreebleParams::new(dim, limit, seed)).unwrap();
            assert!(
                result.stats.partition_calls <= bound,
                "dim {} limit {} seed {}: {} calls (bound {})",
                dim,
                limit,
                seed,
                result.stats.partition_calls,
                bound
            );
        }
    }
}

#[test]
fn test_tiny_limit_terminates() {
    let result = generate_with_params(&GreebleParams::new(48, 1, 3)).unwrap();
    assert!(result.stats.splits > 0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_parameters_rejected() {
    assert!(generate(0, 1, 0).is_err());
    assert!(generate(64, 0, 0).is_err());
    assert!(generate(64, 64, 0).is_err());
    assert!(generate(64, 65, 0).is_err());
    assert!(generate(2, 1, 0).is_ok());
}

#[test]
fn test_export_buffer_sizes() {
    let result = generate_with_params(&GreebleParams::new(40, 5, 11)).unwrap();
    let height = result.height_rgba();
    let normal = result.normal_rgba();
    assert_eq!(height.len(), 4 * 40 * 40);
    assert_eq!(normal.len(), 4 * 40 * 40);
    assert!(height.chunks(4).all(|px| px[0] == px[1] && px[1] == px[2] && px[3] == 255));
    assert!(normal.chunks(4).all(|px| px[3] == 255));
}
