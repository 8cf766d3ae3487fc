use super::*;
use crate::core::geometry::Rect;

impl<T> TileGrid<T> {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    // === Index conversion ===
    #[inline]
    pub(super) fn index(&self, col: u32, row: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Tile at (col, row) for coordinates already clamped to the grid
    #[inline]
    pub(super) fn at(&self, col: u32, row: u32) -> &T {
        debug_assert!(
            col < self.width && row < self.height,
            "at: out of bounds ({}, {}) for {}x{} grid",
            col,
            row,
            self.width,
            self.height
        );
        &self.tiles[self.index(col, row)]
    }

    // === Rect coverage ===

    /// Rows touched by the open vertical extent of `rect`, clamped to the grid
    pub(super) fn row_span(&self, rect: &Rect) -> Option<(u32, u32)> {
        clamp_span(rect.top.floor() as i64, rect.bottom.ceil() as i64 - 1, self.height)
    }

    /// Columns touched by the open horizontal extent of `rect`, clamped to the grid
    pub(super) fn col_span(&self, rect: &Rect) -> Option<(u32, u32)> {
        clamp_span(rect.left.floor() as i64, rect.right.ceil() as i64 - 1, self.width)
    }
}

/// Clamp an inclusive [first, last] cell range to [0, len); None when empty
pub(super) fn clamp_span(first: i64, last: i64, len: u32) -> Option<(u32, u32)> {
    if len == 0 {
        return None;
    }
    let first = first.max(0);
    let last = last.min(len as i64 - 1);
    if first > last {
        None
    } else {
        Some((first as u32, last as u32))
    }
}
