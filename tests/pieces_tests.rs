//! Piece catalog tests - shapes, rotation and piece construction

use pink_blast::core::{base_shape, rotate, Piece};
use pink_blast::types::ShapeKind;

#[test]
fn test_catalog_order_and_names() {
    let names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "single", "h2", "v2", "z", "h3", "v3", "square", "t-up", "t-down", "l-big", "h4"
        ]
    );
}

#[test]
fn test_base_shape_grids() {
    assert_eq!(base_shape(ShapeKind::Single).to_rows(), vec![vec![1]]);
    assert_eq!(base_shape(ShapeKind::Z).to_rows(), vec![vec![1, 1, 0], vec![0, 1, 1]]);
    assert_eq!(
        base_shape(ShapeKind::Square).to_rows(),
        vec![vec![1, 1], vec![1, 1]]
    );
    assert_eq!(
        base_shape(ShapeKind::LBig).to_rows(),
        vec![vec![0, 0, 1], vec![0, 0, 1], vec![1, 1, 1]]
    );
}

#[test]
fn test_rotation_is_order_four_for_catalog() {
    for kind in ShapeKind::ALL {
        let shape = base_shape(kind);
        let mut r = shape;
        for _ in 0..4 {
            r = rotate(&r);
        }
        assert_eq!(r, shape, "rotate^4 should be identity for {}", kind.as_str());
    }
}

#[test]
fn test_rotation_relates_catalog_shapes() {
    assert_eq!(rotate(&base_shape(ShapeKind::H2)), base_shape(ShapeKind::V2));
    assert_eq!(rotate(&base_shape(ShapeKind::H3)), base_shape(ShapeKind::V3));
    assert_eq!(
        base_shape(ShapeKind::TDown).rotated(2),
        base_shape(ShapeKind::TUp)
    );
    assert_eq!(
        rotate(&base_shape(ShapeKind::Square)),
        base_shape(ShapeKind::Square)
    );
}

#[test]
fn test_rotation_swaps_dimensions() {
    let l = base_shape(ShapeKind::Z);
    let r = rotate(&l);
    assert_eq!((l.rows(), l.cols()), (2, 3));
    assert_eq!((r.rows(), r.cols()), (3, 2));
}

#[test]
fn test_piece_from_catalog_applies_rotations() {
    let piece = Piece::from_catalog(7, ShapeKind::H4, 1);
    assert_eq!(piece.id, 7);
    assert_eq!(piece.kind, ShapeKind::H4);
    assert_eq!((piece.shape.rows(), piece.shape.cols()), (4, 1));
    assert_eq!(piece.shape.tile_count(), 4);

    // Quarter turns wrap modulo four.
    assert_eq!(
        Piece::from_catalog(1, ShapeKind::Z, 5).shape,
        Piece::from_catalog(1, ShapeKind::Z, 1).shape
    );
}
