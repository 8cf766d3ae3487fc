//! Body - anything that moves through a platforming level
//!
//! Two variants share one state machine: free characters, and tile-map bodies
//! whose hitbox is their whole grid and whose tiles obstruct other bodies.
//! Gameplay plugs in through the `Behavior` trait.

mod behavior;
mod state;
mod tile_map;

pub use behavior::{
    Behavior, BoxCharacter, ConstantVelocity, DefaultBehavior, DEFAULT_HITBOX_HEIGHT,
    DEFAULT_HITBOX_WIDTH,
};
pub use state::{
    BodyClass, BodyState, CharacterOptions, TileMapOptions, DEFAULT_COLOR, DEFAULT_GRAVITY,
};
pub use tile_map::TileMapBody;

use crate::geometry::{Axis, Rect, Vec2};
use crate::resolver::{move_and_collide_with, ResolverSettings};

/// Handle of a body registered in a level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

pub enum BodyKind {
    Free,
    TileMap(TileMapBody),
}

pub struct Body {
    pub state: BodyState,
    kind: BodyKind,
    behavior: Box<dyn Behavior>,
}

impl Body {
    /// Character with the default 1x2 hitbox and gravity
    pub fn character(options: CharacterOptions) -> Self {
        Self::character_with(options, DefaultBehavior)
    }

    pub fn character_with(options: CharacterOptions, behavior: impl Behavior + 'static) -> Self {
        Self {
            state: BodyState::new(BodyClass::Free, &options),
            kind: BodyKind::Free,
            behavior: Box::new(behavior),
        }
    }

    /// Stationary tile map
    pub fn tile_map(map: TileMapBody, options: TileMapOptions) -> Self {
        Self::tile_map_with(map, options, DefaultBehavior)
    }

    /// Tile map driven by `behavior` (e.g. a moving platform)
    pub fn tile_map_with(
        mut map: TileMapBody,
        options: TileMapOptions,
        behavior: impl Behavior + 'static,
    ) -> Self {
        map.set_tiles_affect_moving_tile_maps(options.tiles_affect_moving_tile_maps);
        Self {
            state: BodyState::new(BodyClass::TileMap, &options.body_options()),
            kind: BodyKind::TileMap(map),
            behavior: Box::new(behavior),
        }
    }

    /// Reset position and every piece of derived state.
    /// Running it twice with the same options gives the same body.
    pub fn init(&mut self, options: &CharacterOptions) {
        self.state = BodyState::new(self.state.class(), options);
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    pub fn tile_map_body(&self) -> Option<&TileMapBody> {
        match &self.kind {
            BodyKind::TileMap(map) => Some(map),
            BodyKind::Free => None,
        }
    }

    pub fn tile_map_body_mut(&mut self) -> Option<&mut TileMapBody> {
        match &mut self.kind {
            BodyKind::TileMap(map) => Some(map),
            BodyKind::Free => None,
        }
    }

    #[inline]
    pub fn is_tile_map(&self) -> bool {
        matches!(self.kind, BodyKind::TileMap(_))
    }

    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        self.behavior.as_mut()
    }

    // === Hitboxes ===

    /// Collision rectangle if the body stood at `pos`
    pub fn hitbox_at(&self, pos: Vec2) -> Rect {
        match &self.kind {
            BodyKind::TileMap(map) => map.hitbox_at(pos),
            BodyKind::Free => self.behavior.hitbox_at(pos),
        }
    }

    pub fn current_hitbox(&self) -> Rect {
        self.hitbox_at(self.state.pos)
    }

    /// Hitbox at the start of the current frame
    pub fn previous_hitbox(&self) -> Rect {
        self.hitbox_at(self.state.last_pos)
    }

    // === Per-frame hooks ===

    pub fn decide_velocity_x(&mut self, dt: f64) {
        self.behavior.decide_velocity_x(&mut self.state, dt);
    }

    pub fn decide_velocity_y(&mut self, dt: f64) {
        self.behavior.decide_velocity_y(&mut self.state, dt);
    }

    /// Move along `axis` against `colliders` and update the frame bookkeeping.
    /// `dt` must be positive.
    pub fn resolve_axis(&mut self, dt: f64, axis: Axis, colliders: &[&Body]) {
        self.resolve_axis_with(&ResolverSettings::default(), dt, axis, colliders);
    }

    pub fn resolve_axis_with(
        &mut self,
        settings: &ResolverSettings,
        dt: f64,
        axis: Axis,
        colliders: &[&Body],
    ) {
        match axis {
            Axis::X => self.update_x(settings, dt, colliders),
            Axis::Y => self.update_y(settings, dt, colliders),
        }
    }

    fn update_x(&mut self, settings: &ResolverSettings, dt: f64, colliders: &[&Body]) {
        self.state.last_delta_time = dt;
        move_and_collide_with(settings, self, dt, Axis::X, colliders);

        let state = &mut self.state;
        let prev_frame_delta_x = state.frame_delta.x;
        state.frame_delta.x = state.pos.x - state.last_pos.x;
        state.frame_delta_delta.x = state.frame_delta.x - prev_frame_delta_x;
        if state.preserve_inertia {
            state.velocity.x = state.frame_delta.x / dt;
        }
        state.last_y_after_upward_slopes = state.pos.y;
    }

    fn update_y(&mut self, settings: &ResolverSettings, dt: f64, colliders: &[&Body]) {
        self.state.on_ground = false;
        self.state.on_ceiling = false;
        move_and_collide_with(settings, self, dt, Axis::Y, colliders);

        let state = &mut self.state;
        if state.on_ground {
            state.air_time = 0.0;
        } else {
            state.air_time += dt;
        }
        let prev_frame_delta_y = state.frame_delta.y;
        state.frame_delta.y = state.pos.y - state.last_pos.y;
        // Slope following during the X pass is not vertical momentum.
        state.frame_delta_y_without_upward_slopes = state.pos.y - state.last_y_after_upward_slopes;
        state.frame_delta_delta.y = state.frame_delta.y - prev_frame_delta_y;
        if state.preserve_inertia {
            state.velocity.y = state.frame_delta_y_without_upward_slopes / dt;
        }
    }

    // === Contact callbacks (fired by the resolver) ===

    pub(crate) fn touch_ground(&mut self) {
        self.state.on_ground = true;
        if !self.behavior.on_touch_ground(&mut self.state) {
            self.state.velocity.y = self.state.realized_velocity_y();
        }
    }

    pub(crate) fn touch_ceiling(&mut self) {
        self.state.on_ceiling = true;
        if !self.behavior.on_touch_ceiling(&mut self.state) {
            self.state.velocity.y = self.state.realized_velocity_y();
        }
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("class", &self.state.class())
            .field("pos", &self.state.pos)
            .field("velocity", &self.state.velocity)
            .field("on_ground", &self.state.on_ground)
            .finish()
    }
}
