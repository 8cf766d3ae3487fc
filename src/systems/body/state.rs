use crate::geometry::Vec2;
use crate::simulation::GroupId;

/// Default downward acceleration for characters (tiles / s^2)
pub const DEFAULT_GRAVITY: f64 = 5.0;

/// Default debug color, red in ABGR
pub const DEFAULT_COLOR: u32 = 0xFF0000FF;

/// Which of the two body variants a state belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyClass {
    Free,
    TileMap,
}

/// Kinematic state of one body.
///
/// The `last_*` and `frame_delta*` fields are the channel through which a
/// moving platform tells its riders how far it went this frame: `last_pos` is
/// written once at the top of each frame by the level, `frame_delta` right
/// after each axis of this body is resolved. Other bodies resolving the same
/// or a later axis read them.
#[derive(Clone, Debug)]
pub struct BodyState {
    // === Physics State ===
    pub pos: Vec2,
    /// Velocity (tiles per second)
    pub velocity: Vec2,
    /// Position at the start of the current frame
    pub last_pos: Vec2,
    /// Y right after the X axis resolved, before Y moved
    pub last_y_after_upward_slopes: f64,
    pub on_ground: bool,
    pub on_ceiling: bool,
    pub last_on_ground: bool,
    /// Time since the body last touched ground
    pub air_time: f64,
    pub last_delta_time: f64,

    // === Per-frame realized movement ===
    pub frame_delta: Vec2,
    pub frame_delta_delta: Vec2,
    pub frame_delta_y_without_upward_slopes: f64,

    // === Configuration ===
    /// Group whose members this body collides against
    pub collision_group: GroupId,
    /// Overwrite velocity with the realized displacement after each axis
    pub preserve_inertia: bool,
    /// Largest gap below a grounded body that it still snaps down across
    pub max_stick_to_ground: f64,
    pub gravity: f64,
    /// Debug render color (ABGR), ignored by physics
    pub color: u32,

    class: BodyClass,
}

impl BodyState {
    pub(crate) fn new(class: BodyClass, options: &CharacterOptions) -> Self {
        let pos = Vec2::new(options.x, options.y);
        Self {
            pos,
            velocity: Vec2::zero(),
            last_pos: pos,
            last_y_after_upward_slopes: pos.y,
            on_ground: false,
            on_ceiling: false,
            last_on_ground: false,
            air_time: 0.0,
            last_delta_time: 0.0,
            frame_delta: Vec2::zero(),
            frame_delta_delta: Vec2::zero(),
            frame_delta_y_without_upward_slopes: 0.0,
            collision_group: match class {
                BodyClass::Free => GroupId::ALL,
                BodyClass::TileMap => GroupId::NONE,
            },
            preserve_inertia: options.preserve_inertia,
            max_stick_to_ground: options.max_stick_to_ground,
            gravity: options.gravity,
            color: options.color,
            class,
        }
    }

    pub fn class(&self) -> BodyClass {
        self.class
    }

    /// Store the start-of-frame snapshot. Called by the level once per frame.
    pub fn begin_frame(&mut self) {
        self.last_pos = self.pos;
        self.last_on_ground = self.on_ground;
    }

    /// Default X velocity rule: characters keep theirs, tile maps stand still
    pub fn default_velocity_x(&mut self, _dt: f64) {
        if self.class == BodyClass::TileMap {
            self.velocity.x = 0.0;
        }
    }

    /// Default Y velocity rule: characters fall, tile maps stand still
    pub fn default_velocity_y(&mut self, dt: f64) {
        match self.class {
            BodyClass::Free => self.velocity.y += self.gravity * dt,
            BodyClass::TileMap => self.velocity.y = 0.0,
        }
    }

    /// Vertical speed implied by this frame's displacement so far
    pub(crate) fn realized_velocity_y(&self) -> f64 {
        if self.last_delta_time > 0.0 {
            (self.pos.y - self.last_pos.y) / self.last_delta_time
        } else {
            0.0
        }
    }
}

/// Options for creating or re-initializing a body
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterOptions {
    pub x: f64,
    pub y: f64,
    pub color: u32,
    pub preserve_inertia: bool,
    pub max_stick_to_ground: f64,
    pub gravity: f64,
}

impl Default for CharacterOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            color: DEFAULT_COLOR,
            preserve_inertia: true,
            max_stick_to_ground: 0.0,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl CharacterOptions {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }
}

/// Options for creating a tile-map body
#[derive(Clone, Debug, PartialEq)]
pub struct TileMapOptions {
    pub x: f64,
    pub y: f64,
    pub color: u32,
    pub preserve_inertia: bool,
    /// Other moving tile maps collide with this map's tiles instead of its
    /// bounding rect. Maps with this set never move.
    pub tiles_affect_moving_tile_maps: bool,
}

impl Default for TileMapOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            color: 0xFF808080,
            preserve_inertia: true,
            tiles_affect_moving_tile_maps: false,
        }
    }
}

impl TileMapOptions {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub(crate) fn body_options(&self) -> CharacterOptions {
        CharacterOptions {
            x: self.x,
            y: self.y,
            color: self.color,
            preserve_inertia: self.preserve_inertia,
            max_stick_to_ground: 0.0,
            gravity: 0.0,
        }
    }
}
