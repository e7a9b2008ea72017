//! Well-known seed patterns, with their top-left cell near the origin.
//!
//! Coordinates are `(x, y)` pairs; feed them through [`points`] to seed an
//! engine.

use crate::Point;

/// Still life: 2x2 block.
pub const BLOCK: &[(i64, i64)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Period-2 oscillator: three cells in a row.
pub const BLINKER: &[(i64, i64)] = &[(-1, 0), (0, 0), (1, 0)];

/// Period-2 oscillator.
pub const TOAD: &[(i64, i64)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];

/// The smallest spaceship; travels diagonally, period 4.
pub const GLIDER: &[(i64, i64)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Methuselah; stabilizes after 1103 generations.
pub const R_PENTOMINO: &[(i64, i64)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

/// Converts a pattern's coordinate pairs into points, offset by `(dx, dy)`.
pub fn points(pattern: &[(i64, i64)], dx: i64, dy: i64) -> Vec<Point> {
    pattern
        .iter()
        .map(|&(x, y)| Point::new(x + dx, y + dy))
        .collect()
}
