use crate::body::{Body, BodyId};
use crate::geometry::Axis;

use super::{PerfTimer, PlatformingLevel};

pub(super) fn update(level: &mut PlatformingLevel, dt: f64) {
    let step_timer = PerfTimer::start_if(level.perf_enabled);
    level.stats.reset();
    level.frame += 1;

    for idx in 0..level.objects.len() {
        let id = level.objects[idx];
        if let Some(body) = level.body_mut(id) {
            body.state.begin_frame();
        }
    }
    for idx in 0..level.tile_map_objects.len() {
        let id = level.tile_map_objects[idx];
        if let Some(body) = level.body_mut(id) {
            body.state.begin_frame();
            body.decide_velocity_x(dt);
        }
    }
    move_tile_maps(level, dt, Axis::X);
    move_objects(level, dt, Axis::X);

    for idx in 0..level.tile_map_objects.len() {
        let id = level.tile_map_objects[idx];
        if let Some(body) = level.body_mut(id) {
            body.decide_velocity_y(dt);
        }
    }
    move_tile_maps(level, dt, Axis::Y);
    move_objects(level, dt, Axis::Y);

    for idx in 0..level.objects.len() {
        let id = level.objects[idx];
        let (ground, ceiling) = level
            .body(id)
            .map_or((false, false), |body| (body.state.on_ground, body.state.on_ceiling));
        if ground {
            level.stats.ground_contacts += 1;
        }
        if ceiling {
            level.stats.ceiling_contacts += 1;
        }
    }
    level.stats.bodies = level.body_count() as u32;
    level.stats.frame = level.frame;
    if let Some(timer) = step_timer {
        level.stats.step_ms = timer.elapsed_ms();
    }
}

/// Tile maps whose tiles affect other moving maps stay where they are.
fn move_tile_maps(level: &mut PlatformingLevel, dt: f64, axis: Axis) {
    for idx in 0..level.tile_map_objects.len() {
        let id = level.tile_map_objects[idx];
        let stays = level
            .body(id)
            .and_then(Body::tile_map_body)
            .map_or(true, |map| map.tiles_affect_moving_tile_maps());
        if stays {
            continue;
        }
        resolve_body(level, id, dt, axis);
        level.stats.tile_map_resolves += 1;
    }
}

fn move_objects(level: &mut PlatformingLevel, dt: f64, axis: Axis) {
    for idx in 0..level.objects.len() {
        let id = level.objects[idx];
        if let Some(body) = level.body_mut(id) {
            match axis {
                Axis::X => body.decide_velocity_x(dt),
                Axis::Y => body.decide_velocity_y(dt),
            }
        }
    }
    for idx in 0..level.objects.len() {
        let id = level.objects[idx];
        resolve_body(level, id, dt, axis);
    }
}

/// Resolve one body against the members of its collision group.
///
/// The body is lifted out of its slot for the duration, so it never appears
/// among its own colliders and the others can be borrowed shared.
fn resolve_body(level: &mut PlatformingLevel, id: BodyId, dt: f64, axis: Axis) {
    let Some(mut body) = level.slots.get_mut(id.index()).and_then(Option::take) else {
        return;
    };
    {
        let slots = &level.slots;
        let colliders: Vec<&Body> = level
            .groups
            .members(body.state.collision_group)
            .iter()
            .filter_map(|other| slots.get(other.index()).and_then(Option::as_ref))
            .collect();
        body.resolve_axis_with(&level.settings, dt, axis, &colliders);
    }
    level.slots[id.index()] = Some(body);
    level.stats.resolves += 1;
}
