// Target selection for the computer player: uniform random over unguessed
// cells, or sampling from a ship-placement probability density.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Mark, TargetView},
    grid::Coordinate,
    ship::Orientation,
};

/// Placements covering more observed hits get this much more weight per hit,
/// so squares next to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Sampling temperature used by [`calc_pdf_and_guess`]. Below 1.0 sharpens
/// the distribution toward the likeliest cells.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Pick any not-yet-guessed cell uniformly. `None` when every cell is taken.
pub fn random_guess<R: Rng + ?Sized>(view: &TargetView<'_>, rng: &mut R) -> Option<Coordinate> {
    let open = view.unguessed();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

/// Compute a probability density over all unguessed squares from the known
/// hits and misses and the lengths of ships still afloat. The result is a
/// row-major `size * size` vector summing to 1, or all zeros when no
/// placement is consistent with what has been seen.
pub fn calc_pdf(view: &TargetView<'_>) -> Vec<f64> {
    let size = view.size();
    let mut matrix = vec![0.0f64; size * size];

    for len in view.lengths_remaining() {
        if len == 0 || len > size {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (rows, cols) = match orient {
                Orientation::Horizontal => (size, size - len + 1),
                Orientation::Vertical => (size - len + 1, size),
            };
            for r in 0..rows {
                for c in 0..cols {
                    let start = Coordinate::new(r, c);
                    let mut valid = true;
                    let mut n_hits = 0i32;
                    for cell in orient.extent(start, len) {
                        match view.mark(cell) {
                            Mark::Miss => {
                                valid = false;
                                break;
                            }
                            Mark::Hit => n_hits += 1,
                            Mark::Unknown => {}
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, f64::from(n_hits));
                    for cell in orient.extent(start, len) {
                        if view.mark(cell) == Mark::Unknown {
                            matrix[cell.row * size + cell.col] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(&mut matrix);
    matrix
}

fn normalize(matrix: &mut [f64]) {
    let total: f64 = matrix.iter().sum();
    if total > 0.0 {
        matrix.iter_mut().for_each(|v| *v /= total);
    }
}

/// Sample a coordinate from a probability matrix using a temperature
/// parameter. `None` if the matrix carries no mass.
pub fn sample_pdf<R: Rng + ?Sized>(
    pdf: &[f64],
    size: usize,
    temperature: f64,
    rng: &mut R,
) -> Option<Coordinate> {
    let adjusted: Vec<f64> = pdf
        .iter()
        .map(|&v| if v > 0.0 { libm::pow(v, 1.0 / temperature) } else { 0.0 })
        .collect();
    let total: f64 = adjusted.iter().sum();
    if !(total > 0.0) {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &v) in adjusted.iter().enumerate() {
        if v <= 0.0 {
            continue;
        }
        cumulative += v;
        last = Some(i);
        if threshold < cumulative {
            break;
        }
    }
    last.map(|i| Coordinate::new(i / size, i % size))
}

/// Calculate the density and immediately pick a guess from it, falling back to
/// a uniform pick when the density is empty.
pub fn calc_pdf_and_guess<R: Rng + ?Sized>(
    view: &TargetView<'_>,
    rng: &mut R,
) -> Option<Coordinate> {
    let pdf = calc_pdf(view);
    sample_pdf(&pdf, view.size(), DEFAULT_TEMPERATURE, rng).or_else(|| random_guess(view, rng))
}
