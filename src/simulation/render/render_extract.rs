//! Debug rendering
//!
//! Characters draw their hitbox. Tile maps draw every blocking tile as a unit
//! square and every slope as a polygon under its surface, sampled every
//! quarter tile. Output goes to a `DrawSurface`; `RenderBatch` is the one the
//! JS side reads back as flat buffers.

use crate::body::{Body, BodyKind, TileMapBody};
use crate::geometry::{Rect, Vec2};
use crate::tiles::PlatformingTile;

/// Surface samples along the top edge of a slope polygon
const SLOPE_SAMPLES: u32 = 4;

pub trait DrawSurface {
    fn fill_rect(&mut self, rect: &Rect, color: u32);
    fn fill_polygon(&mut self, points: &[Vec2], color: u32);
}

pub fn render_body(body: &Body, surface: &mut impl DrawSurface) {
    let color = body.state.color;
    match body.kind() {
        BodyKind::Free => surface.fill_rect(&body.current_hitbox(), color),
        BodyKind::TileMap(map) => render_tile_map(map, body.state.pos, color, surface),
    }
}

fn render_tile_map(map: &TileMapBody, origin: Vec2, color: u32, surface: &mut impl DrawSurface) {
    let grid = map.grid();
    for tile in grid.iter() {
        if tile.blocks_downward() {
            let x = origin.x + tile.col() as f64;
            let y = origin.y + tile.row() as f64;
            surface.fill_rect(&Rect::new(x, x + 1.0, y, y + 1.0), color);
        }
    }
    let mut points = Vec::with_capacity(SLOPE_SAMPLES as usize + 3);
    for tile in grid.iter().filter(|tile| tile.is_floor_slope()) {
        slope_outline(tile, origin, &mut points);
        surface.fill_polygon(&points, color);
    }
}

fn slope_outline(tile: &PlatformingTile, origin: Vec2, points: &mut Vec<Vec2>) {
    let x = origin.x + tile.col() as f64;
    let base_y = origin.y + tile.row() as f64 + 1.0;
    points.clear();
    points.push(Vec2::new(x, base_y));
    for i in 0..=SLOPE_SAMPLES {
        let u = i as f64 / SLOPE_SAMPLES as f64;
        let h = tile.floor_relative_height(u).clamp(0.0, 1.0);
        points.push(Vec2::new(x + u, base_y - h));
    }
    points.push(Vec2::new(x + 1.0, base_y));
}

/// Draw calls collected into flat arrays.
///
/// `rects` holds `left, top, width, height` per rect. Polygon `i` spans
/// points `polygon_starts[i] .. polygon_starts[i + 1]` (or the end) of
/// `polygon_points`, stored as `x, y` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderBatch {
    pub rects: Vec<f32>,
    pub rect_colors: Vec<u32>,
    pub polygon_points: Vec<f32>,
    pub polygon_starts: Vec<u32>,
    pub polygon_colors: Vec<u32>,
}

impl RenderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.rect_colors.clear();
        self.polygon_points.clear();
        self.polygon_starts.clear();
        self.polygon_colors.clear();
    }

    pub fn rect_count(&self) -> usize {
        self.rect_colors.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygon_colors.len()
    }
}

impl DrawSurface for RenderBatch {
    fn fill_rect(&mut self, rect: &Rect, color: u32) {
        self.rects.extend_from_slice(&[
            rect.left as f32,
            rect.top as f32,
            rect.width() as f32,
            rect.height() as f32,
        ]);
        self.rect_colors.push(color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: u32) {
        self.polygon_starts.push((self.polygon_points.len() / 2) as u32);
        for p in points {
            self.polygon_points.push(p.x as f32);
            self.polygon_points.push(p.y as f32);
        }
        self.polygon_colors.push(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{CharacterOptions, TileMapOptions};
    use crate::domain::map_data::tiles_from_rows;

    #[test]
    fn character_draws_its_hitbox() {
        let body = Body::character(CharacterOptions::at(2.0, 3.0));
        let mut batch = RenderBatch::new();
        render_body(&body, &mut batch);
        assert_eq!(batch.rects, vec![1.5, 2.0, 1.0, 2.0]);
        assert_eq!(batch.rect_colors, vec![body.state.color]);
        assert_eq!(batch.polygon_count(), 0);
    }

    #[test]
    fn tile_map_draws_walls_and_slopes_at_its_position() {
        let grid = tiles_from_rows(&[" / ", "x^x"], false);
        let body = Body::tile_map(TileMapBody::new(grid), TileMapOptions::at(10.0, 20.0));
        let mut batch = RenderBatch::new();
        render_body(&body, &mut batch);

        assert_eq!(batch.rect_count(), 3);
        assert_eq!(&batch.rects[..4], &[10.0, 21.0, 1.0, 1.0]);

        assert_eq!(batch.polygon_count(), 1);
        assert_eq!(batch.polygon_starts, vec![0]);
        // base corner, five surface samples, base corner
        assert_eq!(batch.polygon_points.len(), 7 * 2);
        assert_eq!(&batch.polygon_points[..2], &[11.0, 21.0]);
        assert_eq!(&batch.polygon_points[2..4], &[11.0, 21.0]);
        assert_eq!(&batch.polygon_points[10..12], &[12.0, 20.0]);
    }
}
