//! Tests for normal map synthesis.

use super::*;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn step_field(dim: u32, from_x: i32, delta: i32) -> HeightField {
    let mut field = HeightField::new(dim);
    for y in 0..dim as i32 {
        for x in from_x..dim as i32 {
            field.set_height(x, y, delta);
        }
    }
    field
}

#[test]
fn test_flat_field_encodes_flat() {
    let field = HeightField::new(32);
    let normals = NormalMap::from_height_field(&field);

    assert_eq!(normals.dim(), 32);
    assert_eq!(normals.vectors().len(), 32 * 32);
    for n in normals.vectors() {
        assert_eq!(*n, FLAT);
    }
    assert_eq!(FLAT.to_rgb8(), [127, 127, 255]);
}

#[test]
fn test_step_edge_gradient() {
    let field = step_field(8, 4, 40);

    assert_eq!(sobel_gradient(&field, 3, 3), (-160, 0));
    assert_eq!(sobel_gradient(&field, 4, 3), (-160, 0));
    assert_eq!(sobel_gradient(&field, 5, 3), (0, 0));
    // Right edge replicates itself.
    assert_eq!(sobel_gradient(&field, 7, 3), (0, 0));

    let normals = NormalMap::from_height_field(&field);
    let n = normals.get(3, 3).unwrap();
    assert!(approx_eq(n.x, -40.0 / 127.0 + 0.5), "got {}", n.x);
    assert!(approx_eq(n.y, 0.5));
    assert_eq!(n.z, 1.0);
    assert_eq!(normals.get(5, 3), Some(FLAT));
}

#[test]
fn test_corner_replication() {
    let mut field = HeightField::new(4);
    field.set_height(0, 0, 40);
    assert_eq!(sobel_gradient(&field, 0, 0), (120, 120));

    let normals = NormalMap::from_height_field(&field);
    let n = normals.get(0, 0).unwrap();
    assert!(approx_eq(n.x, 30.0 / 127.0 + 0.5));
    assert!(approx_eq(n.y, n.x));
}

#[test]
fn test_steep_slope_is_clamped() {
    let mut field = step_field(8, 4, 127);
    for y in 0..8 {
        for x in 0..4 {
            field.set_height(x, y, -128);
        }
    }
    let normals = NormalMap::from_height_field(&field);
    let n = normals.get(3, 0).unwrap();
    assert_eq!(n.x, 0.0);
    for v in normals.vectors() {
        assert!((0.0..=1.0).contains(&v.x));
        assert!((0.0..=1.0).contains(&v.y));
        assert_eq!(v.z, 1.0);
    }
}

#[test]
fn test_synthesis_is_idempotent() {
    let mut field = HeightField::new(24);
    for i in 0..24 {
        field.set_height(i, (i * 7) % 24, 60);
        field.set_height((i * 5) % 24, i, -45);
    }

    let a = NormalMap::from_height_field(&field);
    let b = NormalMap::from_height_field(&field);
    assert_eq!(a, b);
}

#[test]
fn test_get_out_of_range() {
    let normals = NormalMap::from_height_field(&HeightField::new(4));
    assert!(normals.get(4, 0).is_none());
    assert!(normals.get(0, 4).is_none());
    assert!(normals.get(3, 3).is_some());
}
