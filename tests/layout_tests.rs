use battlefield::layout::{parse_coordinate, random_placement, ship_coordinates};
use battlefield::{
    is_location_free, place_ship, Coordinate, Grid, InputError, PlacementError, Player, ShipType,
    FLEET,
};
use rand::{rngs::SmallRng, SeedableRng};

const CARRIER: ShipType = ShipType::new("Aircraft Carrier", 5);

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("A1", 10, 10), Ok(c(0, 0)));
    assert_eq!(parse_coordinate("j10", 10, 10), Ok(c(9, 9)));
    assert_eq!(parse_coordinate(" C7 ", 10, 10), Ok(c(2, 6)));

    assert_eq!(parse_coordinate("", 10, 10), Err(InputError::WrongCoordinate));
    assert_eq!(parse_coordinate("1A", 10, 10), Err(InputError::WrongCoordinate));
    assert_eq!(parse_coordinate("B", 10, 10), Err(InputError::WrongCoordinate));
    assert_eq!(parse_coordinate("B2x", 10, 10), Err(InputError::WrongCoordinate));

    assert_eq!(parse_coordinate("K1", 10, 10), Err(InputError::OutOfBounds));
    assert_eq!(parse_coordinate("A0", 10, 10), Err(InputError::OutOfBounds));
    assert_eq!(parse_coordinate("A11", 10, 10), Err(InputError::OutOfBounds));
    assert_eq!(parse_coordinate("C3", 2, 3), Err(InputError::OutOfBounds));
}

#[test]
fn test_ship_coordinates_any_endpoint_order() {
    let horizontal = vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4)];
    assert_eq!(ship_coordinates(CARRIER, c(0, 0), c(0, 4)), Ok(horizontal.clone()));
    assert_eq!(ship_coordinates(CARRIER, c(0, 4), c(0, 0)), Ok(horizontal));

    let vertical = vec![c(5, 9), c(6, 9), c(7, 9), c(8, 9), c(9, 9)];
    assert_eq!(ship_coordinates(CARRIER, c(9, 9), c(5, 9)), Ok(vertical));
}

#[test]
fn test_ship_coordinates_errors() {
    assert_eq!(
        ship_coordinates(CARRIER, c(0, 0), c(1, 1)),
        Err(InputError::WrongLocation)
    );
    let err = ship_coordinates(CARRIER, c(0, 0), c(0, 2)).unwrap_err();
    assert_eq!(err, InputError::WrongLength("Aircraft Carrier"));
    assert_eq!(err.to_string(), "Wrong length of the Aircraft Carrier!");
}

#[test]
fn test_random_placement_fills_a_fleet() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut player = Player::new("Robot");
    for ship_type in FLEET {
        let coords = random_placement(player.grid(), ship_type, &mut rng).unwrap();
        assert_eq!(coords.len(), ship_type.length());
        assert!(coords.iter().all(|&p| player.grid().contains(p)));
        let straight = coords.iter().all(|p| p.row() == coords[0].row())
            || coords.iter().all(|p| p.col() == coords[0].col());
        assert!(straight);
        assert!(is_location_free(player.grid(), &coords));
        place_ship(&mut player, ship_type, &coords).unwrap();
    }
    assert_eq!(player.grid().ships().len(), FLEET.len());
}

#[test]
fn test_random_placement_is_seeded() {
    let grid = Grid::default();
    let a = random_placement(&grid, CARRIER, &mut SmallRng::seed_from_u64(42));
    let b = random_placement(&grid, CARRIER, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_random_placement_gives_up() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        random_placement(&Grid::new(3, 3), CARRIER, &mut rng),
        Err(PlacementError::UnableToPlaceShip)
    );

    // a lone cruiser in the middle of a 3x3 grid leaves no room at all
    let mut grid = Grid::new(3, 3);
    grid.place_ship(ShipType::new("Cruiser", 3), &[c(1, 0), c(1, 1), c(1, 2)]);
    assert_eq!(
        random_placement(&grid, ShipType::new("Dinghy", 1), &mut rng),
        Err(PlacementError::UnableToPlaceShip)
    );
}
