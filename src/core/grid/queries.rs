//! Directional nearest-tile queries
//!
//! Horizontal queries scan columns starting with the one that contains the
//! rect's leading edge, over the rows the rect covers. Vertical queries scan
//! rows starting with the one that contains the leading edge, over the
//! columns the rect covers. The scan ends at the cell containing
//! `edge +- max_distance`.

use super::indexing::clamp_span;
use super::*;
use crate::core::geometry::Rect;

#[derive(Clone, Copy)]
enum Line {
    Column(u32),
    Row(u32),
}

impl<T> TileGrid<T> {
    /// Column index of the nearest matching tile left of `rect`
    pub fn nearest_tile_left_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Option<u32> {
        let rows = self.row_span(rect)?;
        let start = rect.left.floor() as i64;
        let end = (rect.left - max_distance).floor() as i64;
        let (first, last) = clamp_span(end, start, self.width)?;
        (first..=last)
            .rev()
            .find(|&col| self.line_matches(Line::Column(col), rows, &matches))
    }

    /// Column index of the nearest matching tile right of `rect`
    pub fn nearest_tile_right_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Option<u32> {
        let rows = self.row_span(rect)?;
        let start = rect.right.floor() as i64;
        let end = (rect.right + max_distance).floor() as i64;
        let (first, last) = clamp_span(start, end, self.width)?;
        (first..=last).find(|&col| self.line_matches(Line::Column(col), rows, &matches))
    }

    /// Row index of the nearest matching tile above `rect`
    pub fn nearest_tile_up_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Option<u32> {
        let cols = self.col_span(rect)?;
        let start = rect.top.floor() as i64;
        let end = (rect.top - max_distance).floor() as i64;
        let (first, last) = clamp_span(end, start, self.height)?;
        (first..=last)
            .rev()
            .find(|&row| self.line_matches(Line::Row(row), cols, &matches))
    }

    /// Row index of the nearest matching tile below `rect`
    pub fn nearest_tile_down_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Option<u32> {
        let cols = self.col_span(rect)?;
        let start = rect.bottom.floor() as i64;
        let end = (rect.bottom + max_distance).floor() as i64;
        let (first, last) = clamp_span(start, end, self.height)?;
        (first..=last).find(|&row| self.line_matches(Line::Row(row), cols, &matches))
    }

    /// Every matching tile in the nearest column left of `rect` that has one
    pub fn nearest_tiles_left_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Vec<&T> {
        let Some(rows) = self.row_span(rect) else {
            return Vec::new();
        };
        match self.nearest_tile_left_from_rect(rect, &matches, max_distance) {
            Some(col) => self.collect_line(Line::Column(col), rows, &matches),
            None => Vec::new(),
        }
    }

    /// Every matching tile in the nearest column right of `rect` that has one
    pub fn nearest_tiles_right_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Vec<&T> {
        let Some(rows) = self.row_span(rect) else {
            return Vec::new();
        };
        match self.nearest_tile_right_from_rect(rect, &matches, max_distance) {
            Some(col) => self.collect_line(Line::Column(col), rows, &matches),
            None => Vec::new(),
        }
    }

    /// Every matching tile in the nearest row below `rect` that has one
    pub fn nearest_tiles_down_from_rect(
        &self,
        rect: &Rect,
        matches: impl Fn(&T) -> bool,
        max_distance: f64,
    ) -> Vec<&T> {
        let Some(cols) = self.col_span(rect) else {
            return Vec::new();
        };
        match self.nearest_tile_down_from_rect(rect, &matches, max_distance) {
            Some(row) => self.collect_line(Line::Row(row), cols, &matches),
            None => Vec::new(),
        }
    }

    fn line_cells(&self, line: Line, span: (u32, u32)) -> impl Iterator<Item = &T> + '_ {
        (span.0..=span.1).map(move |i| match line {
            Line::Column(col) => self.at(col, i),
            Line::Row(row) => self.at(i, row),
        })
    }

    fn line_matches(&self, line: Line, span: (u32, u32), matches: &impl Fn(&T) -> bool) -> bool {
        self.line_cells(line, span).any(|tile| matches(tile))
    }

    fn collect_line(&self, line: Line, span: (u32, u32), matches: &impl Fn(&T) -> bool) -> Vec<&T> {
        self.line_cells(line, span).filter(|tile| matches(*tile)).collect()
    }
}
