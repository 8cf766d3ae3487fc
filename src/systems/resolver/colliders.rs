use crate::body::{Body, TileMapBody};
use crate::geometry::{Axis, Rect, Vec2};

/// What one collider contributes to a sweep
pub(super) enum Obstacle<'a> {
    /// Fine tile geometry of a tile-map body
    Tiles { owner: &'a Body, map: &'a TileMapBody },
    /// A plain rectangle; only its near edge matters
    Hitbox(Rect),
}

/// Keep the colliders whose hitbox overlaps `rect` on the axis orthogonal to
/// `axis`.
///
/// For the X sweep colliders are placed at their start-of-frame y, which
/// keeps the overlap test independent of which bodies already moved in Y.
/// The moving body itself cannot be in `colliders` since it is borrowed
/// mutably by the caller.
pub(super) fn gather<'a>(
    moving: &Body,
    rect: &Rect,
    axis: Axis,
    colliders: &[&'a Body],
) -> Vec<Obstacle<'a>> {
    let mut obstacles = Vec::with_capacity(colliders.len());
    for &collider in colliders {
        let hitbox = match axis {
            Axis::X => collider.hitbox_at(Vec2::new(collider.state.pos.x, collider.state.last_pos.y)),
            Axis::Y => collider.current_hitbox(),
        };
        let overlaps = match axis {
            Axis::X => rect.overlaps_y(&hitbox),
            Axis::Y => rect.overlaps_x(&hitbox),
        };
        if !overlaps {
            continue;
        }
        // A moving tile map only sees other maps' tiles when they opt in.
        match collider.tile_map_body() {
            Some(map) if !moving.is_tile_map() || map.tiles_affect_moving_tile_maps() => {
                obstacles.push(Obstacle::Tiles { owner: collider, map });
            }
            _ => obstacles.push(Obstacle::Hitbox(hitbox)),
        }
    }
    obstacles
}
