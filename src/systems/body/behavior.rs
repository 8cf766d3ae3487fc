//! Behavior - the capability interface through which gameplay code drives a body
//!
//! Every hook has a default, so a unit struct is a complete behavior. The
//! level calls the hooks in a fixed order each frame:
//! `decide_velocity_x`, X resolution, `decide_velocity_y`, Y resolution, with
//! `on_touch_ground` / `on_touch_ceiling` fired from inside the resolution.

use crate::geometry::{Rect, Vec2};

use super::state::BodyState;

/// Default character hitbox size
pub const DEFAULT_HITBOX_WIDTH: f64 = 1.0;
pub const DEFAULT_HITBOX_HEIGHT: f64 = 2.0;

pub trait Behavior {
    /// Collision rectangle if the body stood at `pos`. The only way to give a
    /// character a custom shape. Tile-map bodies ignore it: their hitbox is
    /// always the grid.
    fn hitbox_at(&self, pos: Vec2) -> Rect {
        Rect::centered(pos, DEFAULT_HITBOX_WIDTH, DEFAULT_HITBOX_HEIGHT)
    }

    /// Set `state.velocity.x` for this frame
    fn decide_velocity_x(&mut self, state: &mut BodyState, dt: f64) {
        state.default_velocity_x(dt);
    }

    /// Set `state.velocity.y` for this frame
    fn decide_velocity_y(&mut self, state: &mut BodyState, dt: f64) {
        state.default_velocity_y(dt);
    }

    /// Return true to keep `state.velocity.y` as is instead of resetting it
    /// from the realized displacement (e.g. to bounce).
    fn on_touch_ground(&mut self, _state: &mut BodyState) -> bool {
        false
    }

    /// Same as `on_touch_ground`, for ceilings.
    fn on_touch_ceiling(&mut self, _state: &mut BodyState) -> bool {
        false
    }
}

/// Plain behavior: 1x2 hitbox, gravity for characters, still tile maps
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBehavior;

impl Behavior for DefaultBehavior {}

/// Character with a custom box size, centred on its position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCharacter {
    pub width: f64,
    pub height: f64,
}

impl BoxCharacter {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }
}

impl Behavior for BoxCharacter {
    fn hitbox_at(&self, pos: Vec2) -> Rect {
        Rect::centered(pos, self.width, self.height)
    }
}

/// Moves at a fixed velocity every frame, ignoring gravity. Meant for moving
/// tile-map platforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantVelocity {
    pub velocity: Vec2,
}

impl ConstantVelocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { velocity: Vec2::new(dx, dy) }
    }
}

impl Behavior for ConstantVelocity {
    fn decide_velocity_x(&mut self, state: &mut BodyState, _dt: f64) {
        state.velocity.x = self.velocity.x;
    }

    fn decide_velocity_y(&mut self, state: &mut BodyState, _dt: f64) {
        state.velocity.y = self.velocity.y;
    }
}
