//! Geometry primitives: 2D vector, axis-aligned rectangle, movement axis.
//!
//! World units are tiles: one tile is 1.0 x 1.0, y grows downwards.
//! Everything is f64 so that epsilon-sized separations (1e-5) survive
//! positions in the hundreds of tiles.

/// 2D Vector for positions, velocities and per-frame deltas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component along one movement axis
    #[inline]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Movement axis resolved by one sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned rectangle, edges in world units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Rectangle of the given size centred on `center`
    pub fn centered(center: Vec2, width: f64, height: f64) -> Self {
        Self {
            left: center.x - width * 0.5,
            right: center.x + width * 0.5,
            top: center.y - height * 0.5,
            bottom: center.y + height * 0.5,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.left += offset.x;
        self.right += offset.x;
        self.top += offset.y;
        self.bottom += offset.y;
    }

    pub fn translated(mut self, offset: Vec2) -> Self {
        self.translate(offset);
        self
    }

    /// Open-interval overlap on the x axis (touching edges do not overlap)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left < other.right && other.left < self.right
    }

    /// Open-interval overlap on the y axis
    #[inline]
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }
}
