use crate::geometry::{Rect, Vec2};
use crate::grid::TileGrid;
use crate::tiles::PlatformingTile;

/// The tile-map part of a tile-map body: an owned grid plus the flag that
/// decides how other moving tile maps see it.
#[derive(Clone, Debug)]
pub struct TileMapBody {
    grid: TileGrid<PlatformingTile>,
    tiles_affect_moving_tile_maps: bool,
}

impl TileMapBody {
    pub fn new(grid: TileGrid<PlatformingTile>) -> Self {
        Self {
            grid,
            tiles_affect_moving_tile_maps: false,
        }
    }

    pub fn grid(&self) -> &TileGrid<PlatformingTile> {
        &self.grid
    }

    pub fn tiles_affect_moving_tile_maps(&self) -> bool {
        self.tiles_affect_moving_tile_maps
    }

    pub fn set_tiles_affect_moving_tile_maps(&mut self, value: bool) {
        self.tiles_affect_moving_tile_maps = value;
    }

    /// The whole grid, placed with its top-left corner at `pos`
    pub fn hitbox_at(&self, pos: Vec2) -> Rect {
        Rect::new(
            pos.x,
            pos.x + self.grid.width() as f64,
            pos.y,
            pos.y + self.grid.height() as f64,
        )
    }
}
