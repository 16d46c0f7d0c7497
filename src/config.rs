use crate::ship::ShipType;

pub const GRID_HEIGHT: usize = 10;
pub const GRID_WIDTH: usize = 10;
pub const NUM_PLAYERS: usize = 2;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship cells in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Look up a fleet entry by name, ignoring ASCII case.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    FLEET
        .iter()
        .copied()
        .find(|def| def.name().eq_ignore_ascii_case(name))
}
