use crate::body::{
    Body, BodyId, BoxCharacter, CharacterOptions, ConstantVelocity, TileMapBody, TileMapOptions,
};
use crate::domain::content::{CharacterDescription, LevelDescription, TileMapDescription};
use crate::domain::map_data::tiles_from_rows;

use super::groups::GroupId;
use super::PlatformingLevel;

pub(super) fn push_object(level: &mut PlatformingLevel, body: Body, groups: &[GroupId]) -> BodyId {
    let id = BodyId(level.slots.len() as u32);
    if body.is_tile_map() {
        level.tile_map_objects.push(id);
    } else {
        level.objects.push(id);
    }
    level.groups.register(id, groups);
    level.slots.push(Some(body));
    id
}

pub(super) fn remove_object(level: &mut PlatformingLevel, id: BodyId) -> Option<Body> {
    let Some(body) = level.slots.get_mut(id.index()).and_then(Option::take) else {
        engine_warn!("remove_object: body {} is not in the level", id.raw());
        return None;
    };
    let list = if body.is_tile_map() {
        &mut level.tile_map_objects
    } else {
        &mut level.objects
    };
    list.retain(|&other| other != id);
    level.groups.unregister(id);
    Some(body)
}

pub(super) fn load_description(
    level: &mut PlatformingLevel,
    description: &LevelDescription,
) -> Result<Vec<BodyId>, String> {
    // Validate up front so a bad description adds nothing.
    description.validate()?;

    let mut ids = Vec::with_capacity(description.tile_maps.len() + description.characters.len());
    for map in description.tile_maps.iter() {
        let (body, groups) = tile_map_from_description(level, map);
        ids.push(push_object(level, body, &groups));
    }
    for character in description.characters.iter() {
        let (body, groups) = character_from_description(level, character);
        ids.push(push_object(level, body, &groups));
    }

    engine_log!(
        "level loaded: {} tile maps, {} characters, {} groups",
        description.tile_maps.len(),
        description.characters.len(),
        level.groups.len()
    );
    Ok(ids)
}

fn intern_all(level: &mut PlatformingLevel, names: &[String]) -> Vec<GroupId> {
    names.iter().map(|name| level.groups.intern(name)).collect()
}

fn tile_map_from_description(
    level: &mut PlatformingLevel,
    desc: &TileMapDescription,
) -> (Body, Vec<GroupId>) {
    let defaults = TileMapOptions::default();
    let options = TileMapOptions {
        x: desc.x,
        y: desc.y,
        color: desc.color.unwrap_or(defaults.color),
        tiles_affect_moving_tile_maps: desc.tiles_affect_moving_tile_maps,
        ..defaults
    };
    let map = TileMapBody::new(tiles_from_rows(desc.rows.as_slice(), desc.flipped_x));
    let mut body = match desc.velocity {
        Some(v) => Body::tile_map_with(map, options, ConstantVelocity::new(v.x, v.y)),
        None => Body::tile_map(map, options),
    };
    if let Some(name) = &desc.collision_group {
        body.state.collision_group = level.groups.intern(name);
    }
    (body, intern_all(level, &desc.groups))
}

fn character_from_description(
    level: &mut PlatformingLevel,
    desc: &CharacterDescription,
) -> (Body, Vec<GroupId>) {
    let options = CharacterOptions {
        x: desc.x,
        y: desc.y,
        color: desc.color,
        preserve_inertia: desc.preserve_inertia,
        max_stick_to_ground: desc.max_stick_to_ground,
        gravity: desc.gravity,
    };
    let mut body = Body::character_with(options, BoxCharacter::new(desc.width, desc.height));
    if let Some(name) = &desc.collision_group {
        body.state.collision_group = level.groups.intern(name);
    }
    (body, intern_all(level, &desc.groups))
}
