use battlefield::{
    is_location_free, place_ship, shoot, Coordinate, Mark, PlacementError, Player, ShipType,
    ShotResult,
};

const DESTROYER: ShipType = ShipType::new("Destroyer", 2);
const CRUISER: ShipType = ShipType::new("Cruiser", 3);

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_end_to_end_single_ship() {
    let mut player = Player::new("Alice");
    // A1-A2
    place_ship(&mut player, DESTROYER, &[c(0, 0), c(0, 1)]).unwrap();
    assert_eq!(player.mark_at(c(0, 0)), Mark::ShipPresent);
    assert_eq!(player.mark_at(c(0, 1)), Mark::ShipPresent);

    assert_eq!(shoot(&mut player, c(0, 0)), ShotResult::Hit);
    assert!(!player.grid().ships()[0].is_sunk());
    assert!(!player.has_lost());

    assert_eq!(shoot(&mut player, c(0, 1)), ShotResult::Sank);
    assert!(player.has_lost());

    // J10
    assert_eq!(shoot(&mut player, c(9, 9)), ShotResult::Miss);
    assert_eq!(player.mark_at(c(9, 9)), Mark::Miss);
    assert_eq!(shoot(&mut player, c(9, 9)), ShotResult::Miss);
    assert_eq!(player.mark_at(c(9, 9)), Mark::Miss);
}

#[test]
fn test_rejects_overlap_and_adjacency() {
    let mut player = Player::new("Bob");
    place_ship(&mut player, CRUISER, &[c(4, 4), c(4, 5), c(4, 6)]).unwrap();

    let attempts: [[Coordinate; 2]; 5] = [
        [c(4, 6), c(5, 6)], // overlap
        [c(3, 2), c(3, 3)], // diagonal of the left end
        [c(5, 7), c(6, 7)], // diagonal of the right end
        [c(4, 7), c(4, 8)], // touches the right end
        [c(2, 5), c(3, 5)], // touches from above
    ];
    for attempt in attempts.iter() {
        let before = player.full_view();
        assert_eq!(
            place_ship(&mut player, DESTROYER, attempt),
            Err(PlacementError::TooClose),
            "{:?} should be rejected",
            attempt
        );
        assert_eq!(player.full_view(), before);
        assert_eq!(player.grid().ships().len(), 1);
    }

    // one free cell of gap on each side is enough
    place_ship(&mut player, DESTROYER, &[c(4, 8), c(4, 9)]).unwrap();
    place_ship(&mut player, DESTROYER, &[c(2, 4), c(2, 5)]).unwrap();
    place_ship(&mut player, DESTROYER, &[c(6, 2), c(6, 3)]).unwrap();
    assert_eq!(player.grid().ships().len(), 4);
}

#[test]
fn test_spacing_buffer_is_symmetric() {
    // a vertical ship against the bottom-right corner
    let mut player = Player::new("Carol");
    place_ship(&mut player, DESTROYER, &[c(8, 9), c(9, 9)]).unwrap();
    assert!(!is_location_free(player.grid(), &[c(9, 7), c(9, 8)]));
    assert!(!is_location_free(player.grid(), &[c(6, 8), c(7, 8)]));
    assert!(is_location_free(player.grid(), &[c(9, 6), c(9, 7)]));
    assert!(is_location_free(player.grid(), &[c(5, 9), c(6, 9)]));

    // and one against the top-left corner
    let mut player = Player::new("Dave");
    place_ship(&mut player, DESTROYER, &[c(0, 0), c(0, 1)]).unwrap();
    assert!(!is_location_free(player.grid(), &[c(1, 2), c(2, 2)]));
    assert!(!is_location_free(player.grid(), &[c(0, 2), c(0, 3)]));
    assert!(is_location_free(player.grid(), &[c(0, 3), c(0, 4)]));
    assert!(is_location_free(player.grid(), &[c(2, 0), c(2, 1)]));
}

#[test]
fn test_placement_creates_one_part_per_cell() {
    let mut player = Player::new("Erin");
    let coords = [c(3, 1), c(4, 1), c(5, 1)];
    place_ship(&mut player, CRUISER, &coords).unwrap();
    let ship = &player.grid().ships()[0];
    assert_eq!(ship.ship_type(), CRUISER);
    assert_eq!(ship.parts().len(), CRUISER.length());
    for (part, coord) in ship.parts().iter().zip(coords.iter()) {
        assert_eq!(part.coordinate(), *coord);
        assert_eq!(player.ship_at(*coord), Some(ship));
    }
}

#[test]
fn test_repeated_hit_is_idempotent() {
    let mut player = Player::new("Frank");
    place_ship(&mut player, CRUISER, &[c(0, 0), c(1, 0), c(2, 0)]).unwrap();

    assert_eq!(shoot(&mut player, c(1, 0)), ShotResult::Hit);
    assert_eq!(shoot(&mut player, c(1, 0)), ShotResult::Miss);
    assert_eq!(player.mark_at(c(1, 0)), Mark::Hit);
    assert_eq!(player.grid().ships()[0].damage(), 1);

    assert_eq!(shoot(&mut player, c(0, 0)), ShotResult::Hit);
    assert_eq!(shoot(&mut player, c(2, 0)), ShotResult::Sank);
    assert_eq!(shoot(&mut player, c(2, 0)), ShotResult::Miss);
    assert!(player.has_lost());
}

#[test]
fn test_has_lost_needs_every_ship() {
    let mut player = Player::new("Grace");
    place_ship(&mut player, DESTROYER, &[c(0, 0), c(0, 1)]).unwrap();
    place_ship(&mut player, DESTROYER, &[c(5, 5), c(5, 6)]).unwrap();
    shoot(&mut player, c(0, 0));
    assert_eq!(shoot(&mut player, c(0, 1)), ShotResult::Sank);
    assert!(!player.has_lost());
    shoot(&mut player, c(5, 5));
    assert!(!player.has_lost());
    assert_eq!(shoot(&mut player, c(5, 6)), ShotResult::Sank);
    assert!(player.has_lost());
}
