//! Text rendering of boards. Presentation only: nothing here mutates state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::board::Board;
use crate::config::row_label;
use crate::grid::Cell;

const HIT: char = 'X';
const MISS: char = 'O';
const WATER: char = '.';
const GAP: &str = "      ";

pub fn welcome_banner() -> &'static str {
    r#"
                 |    |    |
                )_)  )_)  )_)
               )___))___))___)\
              )____)____)_____)\\
            _____|____|____|____\\\__
   ---------\                   /---------
     ^^^^^ ^^^^^^^^^^^^^^^^^^^^^
       ^^^^      ^^^^     ^^^    ^^
            ^^^^      ^^^

Welcome to the Battleship game!
----------------------------------------------------
"#
}

fn symbol(board: &Board, cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => HIT,
        Cell::Miss => MISS,
        Cell::Ship(id) if reveal => board
            .ship(id)
            .map(|s| s.ship_type().marker())
            .unwrap_or('?'),
        Cell::Ship(_) | Cell::Empty => WATER,
    }
}

/// Grid as lines of text. With `reveal == false` ships stay hidden and only
/// hits and misses show.
pub fn grid_lines(board: &Board, reveal: bool) -> Vec<String> {
    let grid = board.grid();
    let size = grid.size();
    let border = format!("  +{}+", "-".repeat(size * 3));
    let mut lines = Vec::with_capacity(size + 3);

    let mut header = String::from("  ");
    for c in 0..size {
        header.push_str(&format!("{:>3}", c + 1));
    }
    lines.push(header);
    lines.push(border.clone());
    for r in 0..size {
        let mut line = format!("{} |", row_label(r).unwrap_or('?'));
        for &cell in grid.row(r).unwrap_or(&[]) {
            line.push(' ');
            line.push(symbol(board, cell, reveal));
            line.push(' ');
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(border);
    lines
}

/// Single grid with a trailing newline.
pub fn render_grid(board: &Board, reveal: bool) -> String {
    let mut out = grid_lines(board, reveal).join("\n");
    out.push('\n');
    out
}

/// The player's own board (fully visible) next to the opponent board (masked).
pub fn render_side_by_side(player: &Board, opponent: &Board) -> String {
    let left = grid_lines(player, true);
    let right = grid_lines(opponent, false);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = format!("{:<width$}{}{}\n", "Your fleet", GAP, "Enemy waters", width = width);
    for (l, r) in left.iter().zip(right.iter()) {
        out.push_str(&format!("{:<width$}{}{}\n", l, GAP, r, width = width));
    }
    out.push_str(&format!(
        "Legend: {}=Hit  {}=Miss  {}=Water  letters=your ships\n",
        HIT, MISS, WATER
    ));
    out
}

/// One line per ship: name, length, damage and whether it is sunk.
pub fn fleet_status(board: &Board) -> String {
    let mut out = String::new();
    for (_, ship) in board.fleet().iter() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        out.push_str(&format!(
            "  {} ({}): {}/{} hits, {}\n",
            ship.name(),
            ship.length(),
            ship.hits(),
            ship.length(),
            status
        ));
    }
    out
}
