//! Map construction from rows of single-character tile codes.
//!
//! ```text
//!   x  wall
//!   ^  one-way wall: jump through from below, stand on from above
//!   /  45 degree slope rising towards the right
//!   .  45 degree slope rising towards the left
//!   r  low 26 degree slope rising right   (0 -> 0.5)
//!   R  high 26 degree slope rising right  (0.5 -> 1)
//!   l  low 26 degree slope rising left    (0.5 -> 0)
//!   L  high 26 degree slope rising left   (1 -> 0.5)
//!      anything else: empty
//! ```

use crate::grid::TileGrid;
use crate::tiles::{PlatformingTile, SlopeProfile, TileKind};

/// Tile kind for one code. With `flipped_x` the left/right variants swap so a
/// mirrored segment keeps slopes rising the right way.
pub fn tile_kind_from_code(code: char, flipped_x: bool) -> TileKind {
    let code = if flipped_x { mirror_code(code) } else { code };
    match code {
        'x' => TileKind::Wall,
        '^' => TileKind::OneWay,
        '/' => TileKind::Slope(SlopeProfile::new(0.0, 1.0)),
        '.' => TileKind::Slope(SlopeProfile::new(1.0, 0.0)),
        'L' => TileKind::Slope(SlopeProfile::new(1.0, 0.5)),
        'R' => TileKind::Slope(SlopeProfile::new(0.5, 1.0)),
        'l' => TileKind::Slope(SlopeProfile::new(0.5, 0.0)),
        'r' => TileKind::Slope(SlopeProfile::new(0.0, 0.5)),
        _ => TileKind::Empty,
    }
}

fn mirror_code(code: char) -> char {
    match code {
        '/' => '.',
        '.' => '/',
        'L' => 'R',
        'R' => 'L',
        'l' => 'r',
        'r' => 'l',
        other => other,
    }
}

/// Build a tile grid from row-major code strings.
///
/// The grid is as wide as the longest row; shorter rows are padded with empty
/// tiles. `flipped_x` mirrors columns as well as slope directions.
pub fn tiles_from_rows<S: AsRef<str>>(rows: &[S], flipped_x: bool) -> TileGrid<PlatformingTile> {
    let codes: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
    let width = codes.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    let height = codes.len() as u32;

    TileGrid::new(width, height, |col, row| {
        let source_col = if flipped_x { width - col - 1 } else { col };
        let code = codes[row as usize]
            .get(source_col as usize)
            .copied()
            .unwrap_or(' ');
        PlatformingTile::new(tile_kind_from_code(code, flipped_x), col, row)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code() {
        let grid = tiles_from_rows(&["x^/.lLrR ?"], false);
        let kinds: Vec<TileKind> = grid.iter().map(|t| t.kind()).collect();
        assert_eq!(kinds[0], TileKind::Wall);
        assert_eq!(kinds[1], TileKind::OneWay);
        assert_eq!(kinds[2], TileKind::Slope(SlopeProfile::new(0.0, 1.0)));
        assert_eq!(kinds[3], TileKind::Slope(SlopeProfile::new(1.0, 0.0)));
        assert_eq!(kinds[4], TileKind::Slope(SlopeProfile::new(0.5, 0.0)));
        assert_eq!(kinds[5], TileKind::Slope(SlopeProfile::new(1.0, 0.5)));
        assert_eq!(kinds[6], TileKind::Slope(SlopeProfile::new(0.0, 0.5)));
        assert_eq!(kinds[7], TileKind::Slope(SlopeProfile::new(0.5, 1.0)));
        assert_eq!(kinds[8], TileKind::Empty);
        assert_eq!(kinds[9], TileKind::Empty);
    }

    #[test]
    fn tiles_know_their_grid_position() {
        let grid = tiles_from_rows(&["  ", " x"], false);
        let wall = grid.get(1, 1).unwrap();
        assert_eq!(wall.kind(), TileKind::Wall);
        assert_eq!((wall.col(), wall.row()), (1, 1));
    }

    #[test]
    fn flipping_mirrors_columns_and_slopes() {
        let grid = tiles_from_rows(&["x/ "], true);
        assert_eq!(grid.get(0, 0).unwrap().kind(), TileKind::Empty);
        assert_eq!(
            grid.get(1, 0).unwrap().kind(),
            TileKind::Slope(SlopeProfile::new(1.0, 0.0))
        );
        let wall = grid.get(2, 0).unwrap();
        assert_eq!(wall.kind(), TileKind::Wall);
        assert_eq!(wall.col(), 2);
    }

    #[test]
    fn short_rows_are_padded() {
        let grid = tiles_from_rows(&["xxx", "x"], false);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(2, 1).unwrap().kind(), TileKind::Empty);
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = tiles_from_rows::<&str>(&[], false);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }
}
