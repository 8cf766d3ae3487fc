//! Vertical sweep
//!
//! Moving up, the body stops under walls, slope tiles and other bodies.
//! Moving down, it lands on walls, one-way walls, slope surfaces (the higher
//! of the surface under its left and right edges) and other bodies. A body
//! that was grounded last frame also snaps down across gaps up to its
//! `max_stick_to_ground`, so it follows small drops in the floor.

use crate::body::{Body, TileMapBody};
use crate::geometry::{Axis, Rect};
use crate::tiles::PlatformingTile;

use super::colliders::{gather, Obstacle};
use super::ResolverSettings;

struct YBounds {
    wall_up: f64,
    wall_down: f64,
}

pub(super) fn resolve_y(settings: &ResolverSettings, body: &mut Body, dt: f64, colliders: &[&Body]) {
    let eps = settings.epsilon;
    let delta = body.state.velocity.y * dt;
    let rect = body.current_hitbox();
    let start = body.state.pos;
    let bottom_half = rect.bottom - start.y;
    let top_half = start.y - rect.top;

    body.state.pos.y += delta;

    let mut bounds = YBounds {
        wall_up: -f64::MAX,
        wall_down: f64::MAX,
    };

    for obstacle in gather(body, &rect, Axis::Y, colliders) {
        match obstacle {
            Obstacle::Tiles { owner, map } => {
                sweep_tiles(&mut bounds, body, owner, map, &rect, delta);
            }
            Obstacle::Hitbox(other) => {
                if delta < 0.0 && other.top < rect.bottom && bounds.wall_up < other.bottom {
                    bounds.wall_up = other.bottom;
                }
                if delta > 0.0 && other.bottom > rect.top && bounds.wall_down > other.top {
                    bounds.wall_down = other.top;
                }
            }
        }
    }

    let ground_y = bounds.wall_down - bottom_half - eps;
    if body.state.pos.y > ground_y {
        body.state.pos.y = ground_y;
        body.touch_ground();
    } else if body.state.last_on_ground && body.state.pos.y > ground_y - body.state.max_stick_to_ground {
        // TODO: a grounded body walking off a steep slope onto a lower slope
        // (`.` above `xl`) snaps down the whole drop in one frame.
        body.state.pos.y = ground_y;
        body.touch_ground();
    }

    let ceiling_y = bounds.wall_up + top_half + eps;
    if body.state.pos.y < ceiling_y {
        body.state.pos.y = ceiling_y;
        body.touch_ceiling();
    }
}

/// Contribute one tile map's ceilings, floors and slope surfaces.
///
/// X movement is already final for everyone, so the rect is made relative to
/// the map's current x and start-of-frame y, and the travel is relative to
/// what the map moved in Y this frame.
fn sweep_tiles(
    bounds: &mut YBounds,
    body: &Body,
    owner: &Body,
    map: &TileMapBody,
    rect: &Rect,
    delta: f64,
) {
    let grid = map.grid();
    let map_pos = owner.state.pos;
    let relative_delta = delta - owner.state.frame_delta.y;
    let mut relative_rect = *rect;
    relative_rect.left -= map_pos.x;
    relative_rect.right -= map_pos.x;
    relative_rect.top -= owner.state.last_pos.y;
    relative_rect.bottom -= owner.state.last_pos.y;

    if relative_delta <= 0.0 {
        let blocks = |tile: &PlatformingTile| tile.blocks_upward() || tile.is_floor_slope();
        if let Some(row) = grid.nearest_tile_up_from_rect(&relative_rect, blocks, relative_delta.abs()) {
            let wall_y = row as f64 + 1.0 + map_pos.y;
            if bounds.wall_up < wall_y {
                bounds.wall_up = wall_y;
            }
        }
        return;
    }

    let search_distance = relative_delta.abs().max(body.state.max_stick_to_ground);

    // Start one row lower: a one-way wall the body's bottom is already
    // inside must not catch it.
    let mut below = relative_rect;
    below.bottom += 1.0;
    if let Some(row) =
        grid.nearest_tile_down_from_rect(&below, PlatformingTile::blocks_downward, search_distance)
    {
        let wall_y = row as f64 + map_pos.y;
        if bounds.wall_down > wall_y {
            bounds.wall_down = wall_y;
        }
    }

    let slopes =
        grid.nearest_tiles_down_from_rect(&relative_rect, PlatformingTile::is_floor_slope, search_distance);
    let Some(first) = slopes.first() else {
        return;
    };
    if bounds.wall_down <= first.row() as f64 + map_pos.y {
        return;
    }
    let left_half = body.state.pos.x - rect.left;
    let right_half = rect.right - body.state.pos.x;
    for tile in slopes {
        let relative_x = body.state.pos.x - (tile.col() as f64 + map_pos.x);
        let slope_base_y = tile.row() as f64 + 1.0 + map_pos.y;
        let slope_y_left = slope_base_y - tile.floor_relative_height(relative_x - left_half);
        let slope_y_right = slope_base_y - tile.floor_relative_height(relative_x + right_half);
        if slope_y_left < bounds.wall_down {
            bounds.wall_down = slope_y_left;
        }
        if slope_y_right < bounds.wall_down {
            bounds.wall_down = slope_y_right;
        }
    }
}
