//! TileGrid - flat row-major tile storage with directional nearest-tile queries
//!
//! Tiles live in one Vec indexed by `row * width + col`. A tile occupies the
//! unit square `[col, col + 1] x [row, row + 1]` in grid-local coordinates.
//!
//! The queries answer "which is the nearest column/row next to this rectangle
//! that holds a tile matching a predicate", bounded by a search distance. They
//! are a linear scan over at most `distance + 1` columns or rows.

mod indexing;
mod queries;

/// Positional epsilon shared by the grid queries and the axis resolver.
/// Resolved bodies rest this far away from the surface they touch.
pub const EPSILON: f64 = 0.00001;

/// Rectangular grid of tiles
#[derive(Clone, Debug)]
pub struct TileGrid<T> {
    width: u32,
    height: u32,
    tiles: Vec<T>,
}

impl<T> TileGrid<T> {
    /// Create a grid by calling `init(col, row)` for every cell, row-major.
    pub fn new(width: u32, height: u32, mut init: impl FnMut(u32, u32) -> T) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            for col in 0..width {
                tiles.push(init(col, row));
            }
        }
        Self { width, height, tiles }
    }

    pub const EPSILON: f64 = EPSILON;

    /// Tile at (col, row), None when out of bounds
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<&T> {
        if col < self.width && row < self.height {
            self.tiles.get(self.index(col, row))
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, col: u32, row: u32) -> Option<&mut T> {
        if col < self.width && row < self.height {
            let idx = self.index(col, row);
            self.tiles.get_mut(idx)
        } else {
            None
        }
    }

    /// All tiles, row-major
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tiles.iter()
    }
}
