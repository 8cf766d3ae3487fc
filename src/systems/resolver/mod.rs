//! Axis resolver - one-dimensional sweep-and-resolve
//!
//! `move_and_collide` moves a body along one axis by `velocity * dt`, as far
//! as walls, slope floors and other bodies' hitboxes allow, and fires the
//! ground/ceiling callbacks on contact.
//!
//! Axes are resolved separately (all X movement in a frame, then all Y)
//! because slopes act very differently on horizontal and vertical motion.
//! Horizontal movement can climb shallow slopes and is split at slope tile
//! edges; vertical movement snaps to floors and slope surfaces.

mod colliders;
mod x_axis;
mod y_axis;

use crate::body::Body;
use crate::geometry::Axis;
use crate::grid::EPSILON;

/// Tunables of the resolver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverSettings {
    /// Gap left between a resolved body and the surface it touches. Flush
    /// placement would make the next frame's overlap tests ambiguous.
    pub epsilon: f64,
    /// Highest ledge a body walks up without stopping. Slopes whose entry
    /// edge is higher than this above the body's bottom act as walls.
    pub max_step_up: f64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            max_step_up: 0.1,
        }
    }
}

/// Move `body` along `axis`, colliding against `colliders`, with default settings.
///
/// An empty collider list means free movement. `dt` must be positive.
pub fn move_and_collide(body: &mut Body, dt: f64, axis: Axis, colliders: &[&Body]) {
    move_and_collide_with(&ResolverSettings::default(), body, dt, axis, colliders);
}

pub fn move_and_collide_with(
    settings: &ResolverSettings,
    body: &mut Body,
    dt: f64,
    axis: Axis,
    colliders: &[&Body],
) {
    match axis {
        Axis::X => x_axis::resolve_x(settings, body, dt, colliders),
        Axis::Y => y_axis::resolve_y(settings, body, dt, colliders),
    }
}
