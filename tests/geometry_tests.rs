//! Board Geometry Integration Tests
//!
//! Square/screen mapping in both orientations and the window layout.

use miniuci::game::{GameError, Orientation, Point};
use miniuci::rendering::BoardGeometry;
use shakmaty::Square;

const ORIENTATIONS: [Orientation; 2] = [Orientation::WhiteBottom, Orientation::BlackBottom];

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_every_square_round_trips() {
    //! The centre of every drawn cell maps back to the same square
    let geometry = BoardGeometry::default();
    for orientation in ORIENTATIONS {
        for square in Square::ALL {
            let centre = geometry.screen_pos(square, orientation);
            assert_eq!(
                geometry.square_at(centre, orientation),
                Ok(square),
                "{} in {:?}",
                square,
                orientation
            );
        }
    }
}

#[test]
fn test_cell_corners_map_to_the_cell() {
    let geometry = BoardGeometry::new(50.0);
    for orientation in ORIENTATIONS {
        for square in Square::ALL {
            let corner = geometry.cell_origin(square, orientation);
            let inside = Point::new(corner.x + 49.5, corner.y + 49.5);
            assert_eq!(geometry.square_at(corner, orientation), Ok(square));
            assert_eq!(geometry.square_at(inside, orientation), Ok(square));
        }
    }
}

#[test]
fn test_flip_mirrors_squares() {
    //! Flipping maps a point to the square rotated 180 degrees
    let geometry = BoardGeometry::default();
    let point = geometry.screen_pos(Square::B2, Orientation::WhiteBottom);

    assert_eq!(
        geometry.square_at(point, Orientation::BlackBottom),
        Ok(Square::G7)
    );
}

// ============================================================================
// Off-board Points
// ============================================================================

#[test]
fn test_points_outside_the_board_are_rejected() {
    let geometry = BoardGeometry::default();
    let (width, height) = geometry.window_size();
    let outside = [
        Point::new(5.0, 100.0),  // activity bar
        Point::new(30.0, 100.0), // eval bar
        Point::new(width, 10.0),
        Point::new(100.0, height),
        Point::new(-1.0, -1.0),
        Point::new(10_000.0, 10_000.0),
    ];

    for orientation in ORIENTATIONS {
        for point in outside {
            assert!(
                matches!(
                    geometry.square_at(point, orientation),
                    Err(GameError::InvalidSquare { .. })
                ),
                "{:?} should be off the board",
                point
            );
        }
    }
}

#[test]
fn test_bars_sit_left_of_the_board() {
    let geometry = BoardGeometry::default();
    let activity = geometry.activity_bar_rect();
    let eval = geometry.eval_bar_rect();
    let board = geometry.board_rect();

    assert_eq!(activity.x, 0.0);
    assert_eq!(eval.x, activity.x + activity.width);
    assert_eq!(board.x, eval.x + eval.width);
    assert_eq!(board.width, 640.0);
    assert_eq!(board.height, 640.0);
}
