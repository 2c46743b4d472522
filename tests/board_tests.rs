//! Board tests - placement legality, stamping and line clears

use pink_blast::core::{base_shape, Board};
use pink_blast::types::{Cell, ShapeKind, BOARD_SIZE};

fn all_shapes() -> impl Iterator<Item = pink_blast::core::Shape> {
    ShapeKind::ALL
        .into_iter()
        .flat_map(|k| (0..4).map(move |r| base_shape(k).rotated(r)))
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.size(), BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(row, col), Some(Cell::Empty));
        }
    }
    assert!(board.is_empty());
    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE), None);
}

#[test]
fn test_can_place_rejects_out_of_bounds() {
    let board = Board::default();
    let h4 = base_shape(ShapeKind::H4);
    assert!(board.can_place(&h4, 0, 4));
    assert!(!board.can_place(&h4, 0, 5));
    assert!(!board.can_place(&h4, 8, 0));
    assert!(!board.can_place(&h4, usize::MAX, usize::MAX));

    let v3 = base_shape(ShapeKind::V3);
    assert!(board.can_place(&v3, 5, 7));
    assert!(!board.can_place(&v3, 6, 7));
}

#[test]
fn test_can_place_rejects_overlap_only_on_filled_shape_cells() {
    // l-big has empty cells in its bounding box; those may cover filled cells.
    let board = Board::default()
        .with_cell(0, 0, Cell::Filled)
        .with_cell(1, 1, Cell::Filled);
    let l_big = base_shape(ShapeKind::LBig);
    assert!(board.can_place(&l_big, 0, 0));

    let blocked = board.with_cell(2, 2, Cell::Filled);
    assert!(!blocked.can_place(&l_big, 0, 0));
}

#[test]
fn test_can_place_matches_bounds_and_occupancy_for_all_shapes() {
    let board = Board::parse(&[
        "#.......", "........", "...##...", "........", "........", ".....#..", "........",
        ".......#",
    ])
    .unwrap();

    for shape in all_shapes() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let expected = shape.filled_cells().all(|(i, j)| {
                    board.get(row + i, col + j) == Some(Cell::Empty)
                });
                assert_eq!(board.can_place(&shape, row, col), expected);
            }
        }
    }
}

#[test]
fn test_place_touches_exactly_shape_cells() {
    let before = Board::parse(&[
        "........", "........", "........", "........", "........", "........", "........",
        "#.......",
    ])
    .unwrap();
    let t_up = base_shape(ShapeKind::TUp);
    let after = before.place(&t_up, 3, 2);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let in_shape = row >= 3 && col >= 2 && t_up.is_filled(row - 3, col - 2);
            if in_shape {
                assert_eq!(after.get(row, col), Some(Cell::Filled));
            } else {
                assert_eq!(after.get(row, col), before.get(row, col));
            }
        }
    }
    // The original board is untouched.
    assert_eq!(before.filled_count(), 1);
    assert_eq!(after.filled_count(), 5);
}

#[test]
fn test_detect_rows_and_columns_against_same_board() {
    let board = Board::parse(&[
        "########", "#.......", "#.......", "#.......", "#.......", "#.......", "#.......",
        "########",
    ])
    .unwrap();
    let lines = board.detect_completed_lines();
    assert_eq!(lines.rows.as_slice(), &[0, 7]);
    assert_eq!(lines.cols.as_slice(), &[0]);
    assert_eq!(lines.count(), 3);

    let cleared = board.clear_lines(&lines);
    assert!(cleared.is_empty());
}

#[test]
fn test_clear_lines_keeps_other_cells() {
    let board = Board::parse(&["###", "#..", ".#."]).unwrap();
    let lines = board.detect_completed_lines();
    assert_eq!(lines.rows.as_slice(), &[0]);
    assert!(lines.cols.is_empty());

    let cleared = board.clear_lines(&lines);
    assert_eq!(cleared, Board::parse(&["...", "#..", ".#."]).unwrap());
}

#[test]
fn test_fits_anywhere() {
    let board = Board::parse(&["#.#", ".#.", "#.#"]).unwrap();
    assert!(board.fits_anywhere(&base_shape(ShapeKind::Single)));
    assert!(!board.fits_anywhere(&base_shape(ShapeKind::H2)));
    assert!(!board.fits_anywhere(&base_shape(ShapeKind::V2)));
}
