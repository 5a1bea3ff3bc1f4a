use crate::ship::ShipType;

/// Default side length of a game grid.
pub const GRID_SIZE: usize = 10;
/// Largest grid we can label: one letter per row.
pub const MAX_GRID_SIZE: usize = 10;
pub const ROW_LABELS: &str = "ABCDEFGHIJ";

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5, 'C'),
    ShipType::new("Battleship", 4, 'B'),
    ShipType::new("Cruiser", 3, 'R'),
    ShipType::new("Submarine", 3, 'S'),
    ShipType::new("Destroyer", 2, 'D'),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Rejection-sampling attempts before random placement enumerates every
/// candidate instead.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;
/// Full restarts allowed when a whole fleet is placed at random.
pub const MAX_FLEET_ATTEMPTS: usize = 20;

/// Row letter for a zero-based row index.
pub fn row_label(row: usize) -> Option<char> {
    ROW_LABELS.chars().nth(row)
}

/// Whether the standard fleet fits a `size`×`size` grid with room to spare:
/// the longest ship must fit and at least half of the cells stay free.
pub fn fleet_fits(size: usize) -> bool {
    let longest = FLEET.iter().map(|s| s.length()).max().unwrap_or(0);
    (1..=MAX_GRID_SIZE).contains(&size)
        && longest <= size
        && TOTAL_SHIP_CELLS * 2 <= size * size
}
