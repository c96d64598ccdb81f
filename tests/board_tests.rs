use fleetgrid::{
    standard_fleet, AttemptResult, Board, BoardError, ErrorKind, Position, Ship, STANDARD_FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn destroyer() -> Ship {
    Ship::new("Destroyer", [(0, 0), (1, 0)])
}

fn ship_cells(board: &Board) -> Vec<Position> {
    let size = board.size() as i32;
    let mut cells = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let position = Position::new(x, y);
            if board.tile(position).unwrap().is_ship() {
                cells.push(position);
            }
        }
    }
    cells
}

#[test]
fn test_new_board_is_ocean() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    for y in 0..4 {
        for x in 0..4 {
            let view = board.tile(Position::new(x, y)).unwrap();
            assert_eq!(view.position(), Position::new(x, y));
            assert!(!view.is_ship());
            assert!(!view.was_hit());
        }
    }
    assert!(board.ships().is_empty());
    assert!(!board.all_sunk());
}

#[test]
fn test_zero_size_rejected() {
    let err = Board::new(0).unwrap_err();
    assert_eq!(err, BoardError::InvalidSize);
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn test_destroyer_scenario() {
    let mut board = Board::new(5).unwrap();
    let id = board.add_ship(destroyer(), Position::new(0, 0)).unwrap();
    assert_eq!(id.index(), 0);
    assert_eq!(ship_cells(&board), vec![Position::new(0, 0), Position::new(1, 0)]);

    assert_eq!(board.attempt_move(Position::new(0, 0)).unwrap(), AttemptResult::Hit);
    assert!(!board.ship(id).unwrap().is_sunk());
    assert_eq!(
        board.attempt_move(Position::new(1, 0)).unwrap(),
        AttemptResult::Sunk("Destroyer".to_string())
    );
    assert!(board.ship(id).unwrap().is_sunk());
    assert!(board.all_sunk());

    let err = board.attempt_move(Position::new(0, 0)).unwrap_err();
    assert_eq!(
        err,
        BoardError::AlreadyFired {
            position: Position::new(0, 0)
        }
    );
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn test_three_tile_ship_sinks_on_third_hit() {
    let mut board = Board::new(6).unwrap();
    let mut cruiser = Ship::new("Cruiser", [(0, 0), (1, 0), (2, 0)]);
    cruiser.rotate(3).unwrap();
    let id = board.add_ship(cruiser, Position::new(2, 1)).unwrap();
    // rotated three quarters: (dx, dy) -> (-dy, dx)
    assert_eq!(
        ship_cells(&board),
        vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
    );

    assert_eq!(board.attempt_move(Position::new(2, 1)).unwrap(), AttemptResult::Hit);
    assert_eq!(board.attempt_move(Position::new(2, 3)).unwrap(), AttemptResult::Hit);
    assert!(!board.ship(id).unwrap().is_sunk());
    assert_eq!(
        board.attempt_move(Position::new(2, 2)).unwrap(),
        AttemptResult::Sunk("Cruiser".to_string())
    );
    assert!(board.ship(id).unwrap().is_sunk());
}

#[test]
fn test_miss_and_has_been_used() {
    let mut board = Board::new(5).unwrap();
    board.add_ship(destroyer(), Position::new(3, 4)).unwrap();
    assert!(!board.has_been_used(Position::new(2, 2)).unwrap());
    assert_eq!(board.attempt_move(Position::new(2, 2)).unwrap(), AttemptResult::Miss);
    assert!(board.has_been_used(Position::new(2, 2)).unwrap());
    assert!(!board.has_been_used(Position::new(3, 4)).unwrap());
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::new(5).unwrap();
    for position in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(5, 0),
        Position::new(0, 5),
    ] {
        assert_eq!(
            board.has_been_used(position).unwrap_err(),
            BoardError::OutOfBounds { position }
        );
        assert_eq!(
            board.attempt_move(position).unwrap_err(),
            BoardError::OutOfBounds { position }
        );
        assert!(board.tile(position).is_err());
    }
}

#[test]
fn test_out_of_bounds_placement_leaves_board_unchanged() {
    let mut board = Board::new(5).unwrap();
    board.add_ship(destroyer(), Position::new(0, 0)).unwrap();
    let before = board.clone();

    let err = board
        .add_ship(Ship::new("Cruiser", [(0, 0), (1, 0), (2, 0)]), Position::new(3, 2))
        .unwrap_err();
    assert_eq!(
        err.error(),
        &BoardError::ShipOutOfBounds {
            position: Position::new(5, 2)
        }
    );
    assert_eq!(err.error().kind(), ErrorKind::Placement);
    assert_eq!(board, before);

    // the ship comes back and can be placed elsewhere
    let ship = err.into_ship();
    assert_eq!(ship.name(), "Cruiser");
    board.add_ship(ship, Position::new(2, 2)).unwrap();
    assert_eq!(ship_cells(&board).len(), 5);
}

#[test]
fn test_overlap_placement_leaves_board_unchanged() {
    let mut board = Board::new(5).unwrap();
    board.add_ship(destroyer(), Position::new(1, 1)).unwrap();
    let before = board.clone();

    let mut sub = Ship::new("Submarine", [(0, 0), (1, 0), (2, 0)]);
    sub.rotate(1).unwrap();
    let err = board.add_ship(sub, Position::new(2, 3)).unwrap_err();
    assert_eq!(
        err.error(),
        &BoardError::ShipOverlaps {
            position: Position::new(2, 1)
        }
    );
    assert_eq!(board, before);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_self_overlapping_shape_rejected() {
    let mut board = Board::new(5).unwrap();
    let before = board.clone();
    let twin = Ship::new("Twin", [(0, 0), (1, 0), (0, 0)]);
    let (error, ship) = board.add_ship(twin, Position::new(1, 1)).unwrap_err().into_inner();
    assert_eq!(
        error,
        BoardError::ShipOverlaps {
            position: Position::new(1, 1)
        }
    );
    assert_eq!(ship.len(), 3);
    assert_eq!(board, before);
}

#[test]
fn test_validate_tiles_is_read_only() {
    let board = Board::new(3).unwrap();
    let mut ship = destroyer();
    assert!(board.validate_tiles(ship.create_tiles(Position::new(1, 1))).is_ok());
    assert_eq!(
        board.validate_tiles(ship.create_tiles(Position::new(2, 1))),
        Err(BoardError::ShipOutOfBounds {
            position: Position::new(3, 1)
        })
    );
    assert!(ship_cells(&board).is_empty());
}

#[test]
fn test_random_fleet_placement() {
    let mut board = Board::new(10).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    for ship in standard_fleet() {
        board.place_random(&mut rng, ship).unwrap();
    }
    assert_eq!(board.ships().len(), STANDARD_FLEET.len());
    assert_eq!(ship_cells(&board).len(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_random_placement_reproducible() {
    let board = Board::new(8).unwrap();
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let mut a = STANDARD_FLEET[0].build();
    let mut b = STANDARD_FLEET[0].build();
    let origin_a = board.random_placement(&mut rng1, &mut a).unwrap();
    let origin_b = board.random_placement(&mut rng2, &mut b).unwrap();
    assert_eq!(origin_a, origin_b);
    assert_eq!(a.shape(), b.shape());
}

#[test]
fn test_random_placement_gives_up_when_full() {
    let mut board = Board::new(2).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = board.place_random(&mut rng, STANDARD_FLEET[0].build()).unwrap_err();
    assert_eq!(err.error(), &BoardError::UnableToPlaceShip);
    assert_eq!(err.error().kind(), ErrorKind::Placement);
    assert!(board.ships().is_empty());
}

#[test]
fn test_all_sunk_needs_every_ship() {
    let mut board = Board::new(4).unwrap();
    board.add_ship(destroyer(), Position::new(0, 0)).unwrap();
    board.add_ship(Ship::new("Buoy", [(0, 0)]), Position::new(3, 3)).unwrap();

    assert_eq!(
        board.attempt_move(Position::new(3, 3)).unwrap(),
        AttemptResult::Sunk("Buoy".to_string())
    );
    assert!(!board.all_sunk());
    board.attempt_move(Position::new(0, 0)).unwrap();
    board.attempt_move(Position::new(1, 0)).unwrap();
    assert!(board.all_sunk());
}

#[test]
fn test_fleet_report_masks_sunk_ships() {
    let mut board = Board::new(5).unwrap();
    board.add_ship(destroyer(), Position::new(0, 0)).unwrap();
    board
        .add_ship(Ship::new("Cruiser", [(0, 0), (1, 0), (2, 0)]), Position::new(0, 2))
        .unwrap();

    board.attempt_move(Position::new(1, 2)).unwrap();
    assert_eq!(
        board.fleet_report(),
        "DD        Destroyer\nC*C       Cruiser\n"
    );

    board.attempt_move(Position::new(0, 0)).unwrap();
    board.attempt_move(Position::new(1, 0)).unwrap();
    assert_eq!(
        board.fleet_report(),
        "**        Destroyer\nC*C       Cruiser\n"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::AlreadyFired {
            position: Position::new(1, 2)
        }
        .to_string(),
        "Already fired at (1, 2)"
    );
    let mut board = Board::new(2).unwrap();
    let err = board.add_ship(destroyer(), Position::new(1, 1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not place Destroyer: Ship placement is out of bounds at (2, 1)"
    );
}

#[test]
fn test_far_away_origins_are_out_of_bounds() {
    let mut board = Board::new(5).unwrap();
    board.add_ship(destroyer(), Position::new(2, 2)).unwrap();
    let before = board.clone();

    let err = board
        .add_ship(destroyer(), Position::new(i32::MAX, 0))
        .unwrap_err();
    assert_eq!(
        err.error(),
        &BoardError::ShipOutOfBounds {
            position: Position::new(i32::MAX, 0)
        }
    );
    assert_eq!(board, before);

    // i32::MIN + i32::MIN must not wrap round onto (0, 0)
    let reach_back = Ship::new("Reach", [(i32::MIN, 0)]);
    let err = board
        .add_ship(reach_back, Position::new(i32::MIN, 0))
        .unwrap_err();
    assert_eq!(
        err.error(),
        &BoardError::ShipOutOfBounds {
            position: Position::new(i32::MIN, 0)
        }
    );
    assert_eq!(err.error().kind(), ErrorKind::Placement);
    assert_eq!(board, before);
    assert!(!board.tile(Position::new(0, 0)).unwrap().is_ship());
}
