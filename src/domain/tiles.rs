//! Tile taxonomy: what one grid cell does to bodies moving through it.
//!
//! Heights are measured upwards from the bottom edge of the tile, so a floor
//! height of 1.0 is the tile's top edge. World y grows downwards, so the floor
//! surface of a tile at row `r` sits at `r + 1 - height`.

/// Floor profile of a sloped tile: heights at the left and right edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeProfile {
    left: f64,
    right: f64,
}

impl SlopeProfile {
    /// Corner heights are clamped to [0, 1].
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: left.clamp(0.0, 1.0),
            right: right.clamp(0.0, 1.0),
        }
    }

    pub fn left(&self) -> f64 { self.left }

    pub fn right(&self) -> f64 { self.right }

    pub fn min_height(&self) -> f64 {
        self.left.min(self.right)
    }

    pub fn max_height(&self) -> f64 {
        self.left.max(self.right)
    }

    /// Floor height at horizontal offset `u` inside the tile.
    ///
    /// Linear between the corners and clamped to the corner range, so offsets
    /// outside [0, 1] read the nearest corner. Monotonic in `u`.
    pub fn height_at(&self, u: f64) -> f64 {
        let h = self.left + (self.right - self.left) * u;
        h.clamp(self.min_height(), self.max_height())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileKind {
    /// Nothing to collide with
    Empty,
    /// Solid from every direction
    Wall,
    /// Solid only for bodies coming down onto it; can be jumped through from
    /// below and walked through sideways
    OneWay,
    /// Sloped floor that bodies walk up and down
    Slope(SlopeProfile),
}

/// One cell of a tile map, with its fixed grid-local position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformingTile {
    kind: TileKind,
    col: u32,
    row: u32,
}

impl PlatformingTile {
    pub fn new(kind: TileKind, col: u32, row: u32) -> Self {
        Self { kind, col, row }
    }

    pub fn empty(col: u32, row: u32) -> Self {
        Self::new(TileKind::Empty, col, row)
    }

    pub fn kind(&self) -> TileKind { self.kind }

    pub fn col(&self) -> u32 { self.col }

    pub fn row(&self) -> u32 { self.row }

    /// Stops horizontal movement
    #[inline]
    pub fn blocks_horizontal(&self) -> bool {
        matches!(self.kind, TileKind::Wall)
    }

    /// Stops a body moving up (negative y) into it
    #[inline]
    pub fn blocks_upward(&self) -> bool {
        matches!(self.kind, TileKind::Wall)
    }

    /// Stops a body moving down onto it
    #[inline]
    pub fn blocks_downward(&self) -> bool {
        matches!(self.kind, TileKind::Wall | TileKind::OneWay)
    }

    #[inline]
    pub fn is_floor_slope(&self) -> bool {
        matches!(self.kind, TileKind::Slope(_))
    }

    /// Floor height at offset `u` inside the tile; 0 for tiles without a slope
    pub fn floor_relative_height(&self, u: f64) -> f64 {
        match self.kind {
            TileKind::Slope(profile) => profile.height_at(u),
            _ => 0.0,
        }
    }

    pub fn max_floor_relative_height(&self) -> f64 {
        self.floor_relative_height(0.0).max(self.floor_relative_height(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_follow_kind() {
        let wall = PlatformingTile::new(TileKind::Wall, 0, 0);
        assert!(wall.blocks_horizontal() && wall.blocks_upward() && wall.blocks_downward());

        let one_way = PlatformingTile::new(TileKind::OneWay, 0, 0);
        assert!(!one_way.blocks_horizontal());
        assert!(!one_way.blocks_upward());
        assert!(one_way.blocks_downward());

        let slope = PlatformingTile::new(TileKind::Slope(SlopeProfile::new(0.0, 1.0)), 0, 0);
        assert!(slope.is_floor_slope());
        assert!(!slope.blocks_downward());

        let empty = PlatformingTile::empty(3, 4);
        assert_eq!((empty.col(), empty.row()), (3, 4));
        assert_eq!(empty.floor_relative_height(0.5), 0.0);
    }

    #[test]
    fn slope_height_is_monotonic_and_bounded() {
        let profiles = [
            SlopeProfile::new(0.0, 1.0),
            SlopeProfile::new(1.0, 0.0),
            SlopeProfile::new(0.5, 1.0),
            SlopeProfile::new(0.5, 0.0),
        ];
        for profile in profiles {
            let rising = profile.right() >= profile.left();
            let mut prev = profile.height_at(-0.5);
            for step in -4..=14 {
                let u = step as f64 * 0.1;
                let h = profile.height_at(u);
                assert!(h >= profile.min_height() && h <= profile.max_height());
                if rising {
                    assert!(h >= prev);
                } else {
                    assert!(h <= prev);
                }
                prev = h;
            }
        }
    }

    #[test]
    fn slope_height_interpolates_corners() {
        let tile = PlatformingTile::new(TileKind::Slope(SlopeProfile::new(0.5, 1.0)), 0, 0);
        assert_eq!(tile.floor_relative_height(0.0), 0.5);
        assert_eq!(tile.floor_relative_height(0.5), 0.75);
        assert_eq!(tile.floor_relative_height(1.0), 1.0);
        assert_eq!(tile.floor_relative_height(2.0), 1.0);
        assert_eq!(tile.max_floor_relative_height(), 1.0);
    }
}
