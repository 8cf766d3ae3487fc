//! Horizontal sweep
//!
//! Walls and body edges become `wall_left` / `wall_right`. Shallow slope
//! tiles lift the body (`slope_floor_y`) and end at `slope_end_left/right`;
//! when the move crosses a slope end the body stops on the tile boundary and
//! the overshoot is swept again from there, so one frame can walk across
//! several slope tiles. Walls are applied only after the last sweep, since the
//! body may sit just past a tile boundary in between:
//!
//! ```text
//!         /
//!  obj-> /x
//! ```

use crate::body::{Body, TileMapBody};
use crate::geometry::{Axis, Rect};
use crate::tiles::PlatformingTile;

use super::colliders::{gather, Obstacle};
use super::ResolverSettings;

/// Boundaries found by one sweep iteration
struct XBounds {
    wall_left: f64,
    wall_right: f64,
    slope_end_left: f64,
    slope_end_right: f64,
    /// Highest (numerically lowest) slope surface under the body's edges
    slope_floor_y: f64,
}

/// Extent of the body around its position
#[derive(Clone, Copy)]
struct HalfExtents {
    left: f64,
    right: f64,
    bottom: f64,
}

pub(super) fn resolve_x(settings: &ResolverSettings, body: &mut Body, dt: f64, colliders: &[&Body]) {
    let eps = settings.epsilon;
    let mut delta = body.state.velocity.x * dt;
    let mut last_delta = delta;

    loop {
        let rect = body.current_hitbox();
        let start = body.state.pos;
        let half = HalfExtents {
            left: start.x - rect.left,
            right: rect.right - start.x,
            bottom: rect.bottom - start.y,
        };

        body.state.pos.x += delta;
        let x = body.state.pos.x;

        let mut bounds = XBounds {
            wall_left: -f64::MAX,
            wall_right: f64::MAX,
            slope_end_left: -f64::MAX,
            slope_end_right: f64::MAX,
            slope_floor_y: start.y + half.bottom + eps * 2.0,
        };

        for obstacle in gather(body, &rect, Axis::X, colliders) {
            match obstacle {
                Obstacle::Tiles { owner, map } => {
                    sweep_tiles(settings, &mut bounds, owner, map, &rect, half, x, delta);
                }
                Obstacle::Hitbox(other) => {
                    if delta < 0.0 && other.left < rect.right && bounds.wall_left < other.right {
                        bounds.wall_left = other.right;
                    }
                    if delta > 0.0 && other.right > rect.left && bounds.wall_right > other.left {
                        bounds.wall_right = other.left;
                    }
                }
            }
        }

        let mut done = true;

        let right_limit = bounds.slope_end_right - half.right + eps * 2.0;
        if body.state.pos.x > right_limit {
            let overshoot = body.state.pos.x - right_limit;
            body.state.pos.x = right_limit;
            delta = overshoot;
            // Continue on the next slope tile if there is movement left.
            if delta > eps * 2.0 && delta < last_delta {
                done = false;
                last_delta = delta;
            }
        }

        let left_limit = bounds.slope_end_left + half.left - eps * 2.0;
        if body.state.pos.x < left_limit {
            let overshoot = body.state.pos.x - left_limit;
            body.state.pos.x = left_limit;
            delta = overshoot;
            if delta < -eps * 2.0 && delta > last_delta {
                done = false;
                last_delta = delta;
            }
        }

        let floor_limit = bounds.slope_floor_y - half.bottom - eps;
        if body.state.pos.y > floor_limit {
            body.state.pos.y = floor_limit;
        }

        if done {
            let right_wall = bounds.wall_right - half.right - eps;
            if body.state.pos.x > right_wall {
                body.state.pos.x = right_wall;
            }
            let left_wall = bounds.wall_left + half.left + eps;
            if body.state.pos.x < left_wall {
                body.state.pos.x = left_wall;
            }
            return;
        }
    }
}

/// Contribute one tile map's walls and slopes.
///
/// The sweep happens in the map's start-of-frame frame of reference: the
/// body's rect is made relative to the map's `last_pos` and the travel is the
/// body's delta minus what the map already moved in X this frame. Found
/// boundaries are converted back with the map's current position.
#[allow(clippy::too_many_arguments)]
fn sweep_tiles(
    settings: &ResolverSettings,
    bounds: &mut XBounds,
    owner: &Body,
    map: &TileMapBody,
    rect: &Rect,
    half: HalfExtents,
    x: f64,
    delta: f64,
) {
    let grid = map.grid();
    let map_x = owner.state.pos.x;
    let map_last_y = owner.state.last_pos.y;
    let relative_delta = delta - owner.state.frame_delta.x;
    let relative_rect = rect.translated(-owner.state.last_pos);
    let distance = relative_delta.abs();

    if relative_delta <= 0.0 {
        if let Some(col) =
            grid.nearest_tile_left_from_rect(&relative_rect, PlatformingTile::blocks_horizontal, distance)
        {
            let wall_x = col as f64 + 1.0 + map_x;
            if bounds.wall_left < wall_x {
                bounds.wall_left = wall_x;
            }
        }
        let slopes =
            grid.nearest_tiles_left_from_rect(&relative_rect, PlatformingTile::is_floor_slope, distance);
        let Some(first) = slopes.first() else {
            return;
        };
        let possible_wall_x = first.col() as f64 + 1.0 + map_x;
        for tile in slopes {
            let slope_base_y = tile.row() as f64 + 1.0 + map_last_y;
            let entry_y = slope_base_y - tile.floor_relative_height(1.0);
            if is_too_steep(settings, entry_y, rect) {
                if bounds.wall_left < possible_wall_x {
                    bounds.wall_left = possible_wall_x;
                }
            } else {
                bounds.slope_end_left = tile.col() as f64 + map_x;
                let relative_x = x - bounds.slope_end_left;
                let slope_y = slope_base_y - tile.floor_relative_height(relative_x - half.left);
                if bounds.slope_floor_y > slope_y {
                    bounds.slope_floor_y = slope_y;
                }
            }
        }
    } else {
        if let Some(col) =
            grid.nearest_tile_right_from_rect(&relative_rect, PlatformingTile::blocks_horizontal, distance)
        {
            let wall_x = col as f64 + map_x;
            if bounds.wall_right > wall_x {
                bounds.wall_right = wall_x;
            }
        }
        let slopes =
            grid.nearest_tiles_right_from_rect(&relative_rect, PlatformingTile::is_floor_slope, distance);
        let Some(first) = slopes.first() else {
            return;
        };
        let possible_wall_x = first.col() as f64 + map_x;
        for tile in slopes {
            let slope_base_y = tile.row() as f64 + 1.0 + map_last_y;
            let entry_y = slope_base_y - tile.floor_relative_height(0.0);
            if is_too_steep(settings, entry_y, rect) {
                if bounds.wall_right > possible_wall_x {
                    bounds.wall_right = possible_wall_x;
                }
            } else {
                bounds.slope_end_right = tile.col() as f64 + 1.0 + map_x;
                let relative_x = x - (bounds.slope_end_right - 1.0);
                let slope_y = slope_base_y - tile.floor_relative_height(relative_x + half.right);
                if bounds.slope_floor_y > slope_y {
                    bounds.slope_floor_y = slope_y;
                }
            }
        }
    }
}

/// A slope whose surface at the entry edge is more than `max_step_up` above
/// the body's bottom is a wall, never a ramp.
#[inline]
fn is_too_steep(settings: &ResolverSettings, entry_y: f64, rect: &Rect) -> bool {
    entry_y < rect.bottom - settings.max_step_up
}
