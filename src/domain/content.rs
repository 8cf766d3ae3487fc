//! Level descriptions loaded from JSON
//!
//! ```json
//! {
//!   "tileMaps": [{ "x": 0, "y": 0, "rows": ["    ", "xxxx"], "groups": ["level"] }],
//!   "characters": [{ "x": 2, "y": 0, "collisionGroup": "level" }]
//! }
//! ```
//!
//! Group names are interned by the level when the description is loaded.

use serde::{Deserialize, Serialize};

use crate::body::{DEFAULT_COLOR, DEFAULT_GRAVITY, DEFAULT_HITBOX_HEIGHT, DEFAULT_HITBOX_WIDTH};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescription {
    #[serde(default)]
    pub tile_maps: Vec<TileMapDescription>,
    #[serde(default)]
    pub characters: Vec<CharacterDescription>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VelocityDescription {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMapDescription {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub rows: Vec<String>,
    #[serde(default)]
    pub flipped_x: bool,
    #[serde(default)]
    pub tiles_affect_moving_tile_maps: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    /// Group this map collides against; a still map needs none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_group: Option<String>,
    /// Constant velocity for a moving platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<VelocityDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDescription {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_group: Option<String>,
    #[serde(default = "default_true")]
    pub preserve_inertia: bool,
    #[serde(default)]
    pub max_stick_to_ground: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_color")]
    pub color: u32,
}

fn default_width() -> f64 {
    DEFAULT_HITBOX_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HITBOX_HEIGHT
}

fn default_true() -> bool {
    true
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

fn default_color() -> u32 {
    DEFAULT_COLOR
}

impl LevelDescription {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let description: LevelDescription = serde_json::from_str(json).map_err(|e| e.to_string())?;
        description.validate()?;
        Ok(description)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        for (idx, map) in self.tile_maps.iter().enumerate() {
            if map.rows.is_empty() || map.rows.iter().all(|row| row.is_empty()) {
                return Err(format!("tile map {} has no tiles", idx));
            }
            if !map.x.is_finite() || !map.y.is_finite() {
                return Err(format!("tile map {} has a non-finite position", idx));
            }
            if let Some(v) = map.velocity {
                if !v.x.is_finite() || !v.y.is_finite() {
                    return Err(format!("tile map {} has a non-finite velocity", idx));
                }
            }
            check_group_names(&map.groups, &format!("tile map {}", idx))?;
        }

        for (idx, character) in self.characters.iter().enumerate() {
            if !character.x.is_finite() || !character.y.is_finite() {
                return Err(format!("character {} has a non-finite position", idx));
            }
            if !(character.width > 0.0 && character.height > 0.0) {
                return Err(format!(
                    "character {} needs a positive size, got {}x{}",
                    idx, character.width, character.height
                ));
            }
            if character.max_stick_to_ground < 0.0 {
                return Err(format!("character {} has a negative maxStickToGround", idx));
            }
            check_group_names(&character.groups, &format!("character {}", idx))?;
        }
        Ok(())
    }
}

fn check_group_names(groups: &[String], owner: &str) -> Result<(), String> {
    match groups.iter().find(|name| name.is_empty()) {
        Some(_) => Err(format!("{} lists an empty group name", owner)),
        None => Ok(()),
    }
}
