use super::*;
use crate::body::{BoxCharacter, CharacterOptions, ConstantVelocity, TileMapBody, TileMapOptions};
use crate::domain::map_data::tiles_from_rows;
use crate::geometry::Vec2;
use crate::grid::EPSILON;

const DT: f64 = 1.0 / 60.0;

fn floor_map() -> Body {
    Body::tile_map(
        TileMapBody::new(tiles_from_rows(&["    ", "    ", "    ", "xxxx"], false)),
        TileMapOptions::at(0.0, 0.0),
    )
}

#[test]
fn initializes_empty() {
    let level = PlatformingLevel::new();
    assert!(level.objects().is_empty());
    assert!(level.tile_map_objects().is_empty());
    assert!(level.group_members(GroupId::ALL).is_empty());
    assert!(level.group_members(GroupId::NONE).is_empty());
    assert_eq!(level.body_count(), 0);
    assert_eq!(level.frame(), 0);
}

#[test]
fn updates_when_empty() {
    let mut level = PlatformingLevel::new();
    level.update(DT);
    assert_eq!(level.frame(), 1);
    assert_eq!(level.stats().resolves(), 0);
}

#[test]
fn adds_objects_to_the_all_group() {
    let mut level = PlatformingLevel::new();
    let id = level.push_object(Body::character(CharacterOptions::at(12.0, 3.0)), &[]);
    assert_eq!(level.objects(), &[id]);
    assert_eq!(level.group_members(GroupId::ALL), &[id]);
    assert_eq!(level.body(id).map(|b| b.state.pos.x), Some(12.0));
}

#[test]
fn updates_with_one_object() {
    let mut level = PlatformingLevel::new();
    let id = level.push_object(Body::character(CharacterOptions::at(12.0, 3.0)), &[]);
    level.update(DT);
    let body = level.body(id).unwrap();
    assert!((body.state.pos.y - (3.0 + DEFAULT_FALL_STEP)).abs() < 1e-12);
    assert!(!body.state.on_ground);
}

// One frame of free fall from rest: vy = g * dt, dy = vy * dt.
const DEFAULT_FALL_STEP: f64 = crate::body::DEFAULT_GRAVITY * DT * DT;

#[test]
fn tile_maps_join_all_but_collide_with_nothing() {
    let mut level = PlatformingLevel::new();
    let map = level.push_object(floor_map(), &[]);
    assert_eq!(level.tile_map_objects(), &[map]);
    assert!(level.objects().is_empty());
    assert_eq!(level.group_members(GroupId::ALL), &[map]);
    assert_eq!(level.body(map).unwrap().state.collision_group, GroupId::NONE);
}

#[test]
fn named_groups_skip_reserved_names() {
    let mut level = PlatformingLevel::new();
    let id = level.push_object_in(floor_map(), &["_none", "solid", "_all"]);
    let solid = level.group_id("solid").unwrap();
    assert_eq!(level.group_members(solid), &[id]);
    assert_eq!(level.group_members(GroupId::ALL), &[id]);
    assert!(level.group_members(GroupId::NONE).is_empty());
    assert_eq!(level.group_name(solid), Some("solid"));
}

#[test]
fn removes_objects_everywhere() {
    let mut level = PlatformingLevel::new();
    let solid = level.intern_group("solid");
    let map = level.push_object(floor_map(), &[solid]);
    let character = level.push_object(Body::character(CharacterOptions::at(1.0, 0.0)), &[solid]);

    let removed = level.remove_object(map).unwrap();
    assert!(removed.is_tile_map());
    assert!(level.tile_map_objects().is_empty());
    assert_eq!(level.group_members(solid), &[character]);
    assert_eq!(level.group_members(GroupId::ALL), &[character]);
    assert!(level.body(map).is_none());

    assert!(level.remove_object(map).is_none());
    assert!(level.remove_object(BodyId(99)).is_none());
    level.update(DT);
}

#[test]
fn character_comes_to_rest_on_the_floor() {
    let mut level = PlatformingLevel::new();
    level.push_object(floor_map(), &[]);
    let id = level.push_object(Body::character(CharacterOptions::at(2.0, 2.0 - EPSILON)), &[]);

    for _ in 0..30 {
        level.update(DT);
        let body = level.body(id).unwrap();
        assert!(body.state.on_ground);
        assert!((body.state.pos.y - (2.0 - EPSILON)).abs() < 1e-9);
        assert!(body.state.velocity.y.abs() < 1e-6);
    }
    let stats = level.stats();
    assert_eq!(stats.ground_contacts(), 1);
    assert_eq!(stats.tile_map_resolves(), 2);
    assert_eq!(stats.resolves(), 4);
    assert_eq!(stats.frame(), 30);
}

#[test]
fn counts_ground_and_ceiling_contacts() {
    let mut level = PlatformingLevel::new();
    level.push_object(
        Body::tile_map(
            TileMapBody::new(tiles_from_rows(
                &["xxxxxx", "      ", "      ", "      ", "      ", "xxxxxx"],
                false,
            )),
            TileMapOptions::at(0.0, 0.0),
        ),
        &[],
    );
    let resting = level.push_object(Body::character(CharacterOptions::at(1.5, 4.0 - EPSILON)), &[]);
    let mut jumper = Body::character(CharacterOptions::at(4.5, 3.0));
    jumper.state.velocity.y = -120.0;
    let jumper = level.push_object(jumper, &[]);

    level.update(DT);
    assert!(level.body(resting).unwrap().state.on_ground);
    assert!(level.body(jumper).unwrap().state.on_ceiling);
    assert_eq!(level.stats().ground_contacts(), 1);
    assert_eq!(level.stats().ceiling_contacts(), 1);
    assert_eq!(level.stats().bodies(), 3);
}

/// Two 0.2-wide boxes moving right together, 0.1 apart
fn push_convoy(level: &mut PlatformingLevel, xs: &[f64]) -> Vec<BodyId> {
    xs.iter()
        .map(|&x| {
            let options = CharacterOptions {
                gravity: 0.0,
                ..CharacterOptions::at(x, 1.0)
            };
            let mut body = Body::character_with(options, BoxCharacter::square(0.2));
            body.state.velocity.x = 2.0;
            level.push_object(body, &[])
        })
        .collect()
}

#[test]
fn same_axis_resolution_follows_registration_order() {
    // Trailing box first: the leader has not moved yet and blocks it.
    let mut level = PlatformingLevel::new();
    let ids = push_convoy(&mut level, &[1.0, 1.3]);
    level.update(0.1);
    let trailing = level.body(ids[0]).unwrap().state.pos.x;
    let leading = level.body(ids[1]).unwrap().state.pos.x;
    assert!((trailing - (1.1 - EPSILON)).abs() < 1e-9, "trailing {}", trailing);
    assert!((leading - 1.5).abs() < 1e-9);

    // Leader first: it clears the way and the trailing box moves freely.
    let mut level = PlatformingLevel::new();
    let ids = push_convoy(&mut level, &[1.3, 1.0]);
    level.update(0.1);
    let leading = level.body(ids[0]).unwrap().state.pos.x;
    let trailing = level.body(ids[1]).unwrap().state.pos.x;
    assert!((leading - 1.5).abs() < 1e-9);
    assert!((trailing - 1.2).abs() < 1e-9, "trailing {}", trailing);
}

#[test]
fn falling_character_lands() {
    let mut level = PlatformingLevel::new();
    level.push_object(floor_map(), &[]);
    let id = level.push_object(Body::character(CharacterOptions::at(2.0, 0.0)), &[]);
    for _ in 0..120 {
        level.update(DT);
    }
    let body = level.body(id).unwrap();
    assert!(body.state.on_ground);
    assert!(body.current_hitbox().bottom < 3.0);
    assert!((body.state.pos.y - (2.0 - EPSILON)).abs() < 1e-9);
}

#[test]
fn collision_group_limits_colliders() {
    let mut level = PlatformingLevel::new();
    level.push_object(floor_map(), &[]);
    let mut ghost = Body::character(CharacterOptions::at(2.0, 2.0 - EPSILON));
    ghost.state.collision_group = GroupId::NONE;
    let id = level.push_object(ghost, &[]);
    level.update(DT);
    let body = level.body(id).unwrap();
    assert!(!body.state.on_ground);
    assert!(body.state.pos.y > 2.0 - EPSILON);
}

#[test]
fn rider_follows_a_rising_platform() {
    let mut level = PlatformingLevel::new();
    let platform = level.push_object(
        Body::tile_map_with(
            TileMapBody::new(tiles_from_rows(&["xxx"], false)),
            TileMapOptions::at(0.0, 5.0),
            ConstantVelocity::new(0.0, -1.0),
        ),
        &[],
    );
    let rider = level.push_object(Body::character(CharacterOptions::at(1.5, 4.0 - EPSILON)), &[]);

    for frame in 1..=10 {
        level.update(0.1);
        let platform_y = level.body(platform).unwrap().state.pos.y;
        assert!((platform_y - (5.0 - 0.1 * frame as f64)).abs() < 1e-9);

        let body = level.body(rider).unwrap();
        assert!(body.state.on_ground, "frame {}", frame);
        let gap = platform_y - body.current_hitbox().bottom;
        assert!((gap - EPSILON).abs() < 1e-9, "frame {} gap {}", frame, gap);
    }
}

#[test]
fn tile_map_that_affects_moving_maps_stays_put() {
    let mut level = PlatformingLevel::new();
    let options = TileMapOptions {
        tiles_affect_moving_tile_maps: true,
        ..TileMapOptions::at(3.0, 4.0)
    };
    let id = level.push_object(
        Body::tile_map_with(
            TileMapBody::new(tiles_from_rows(&["xx"], false)),
            options,
            ConstantVelocity::new(2.0, 2.0),
        ),
        &[],
    );
    level.update(DT);
    assert_eq!(level.body(id).unwrap().state.pos, Vec2::new(3.0, 4.0));
    assert_eq!(level.stats().tile_map_resolves(), 0);
}

#[test]
fn moving_platform_collides_with_tiles_of_maps_that_opt_in() {
    // The platform overlaps the still map's rect but not its tiles.
    let mut level = PlatformingLevel::new();
    let solid = level.intern_group("solid");
    let still_options = TileMapOptions {
        tiles_affect_moving_tile_maps: true,
        ..TileMapOptions::at(0.0, 0.0)
    };
    level.push_object(
        Body::tile_map(
            TileMapBody::new(tiles_from_rows(&["      ", "      ", "x     "], false)),
            still_options,
        ),
        &[solid],
    );
    let mut platform = Body::tile_map_with(
        TileMapBody::new(tiles_from_rows(&["xx"], false)),
        TileMapOptions::at(3.0, 1.0),
        ConstantVelocity::new(1.0, 0.0),
    );
    platform.state.collision_group = solid;
    let id = level.push_object(platform, &[]);

    level.update(0.5);
    assert!((level.body(id).unwrap().state.pos.x - 3.5).abs() < 1e-12);
}

#[test]
fn init_forgets_bodies_but_keeps_group_ids() {
    let mut level = PlatformingLevel::new();
    let solid = level.intern_group("solid");
    level.push_object(floor_map(), &[solid]);
    level.update(DT);
    level.init();
    assert_eq!(level.body_count(), 0);
    assert!(level.group_members(solid).is_empty());
    assert_eq!(level.group_id("solid"), Some(solid));
    assert_eq!(level.frame(), 0);
}

#[test]
fn loads_a_level_description() {
    let json = r#"{
        "tileMaps": [{ "rows": ["    ", "    ", "    ", "xxxx"], "groups": ["world"] }],
        "characters": [
            { "x": 2, "y": 0, "collisionGroup": "world" },
            { "x": 1, "y": 0, "width": 0.5, "height": 0.5, "collisionGroup": "nobody" }
        ]
    }"#;
    let mut level = PlatformingLevel::new();
    let ids = level.load_level_json(json).unwrap();
    assert_eq!(ids.len(), 3);
    let world = level.group_id("world").unwrap();
    assert_eq!(level.group_members(world), &[ids[0]]);
    assert_eq!(level.body(ids[1]).unwrap().state.collision_group, world);

    for _ in 0..120 {
        level.update(DT);
    }
    assert!(level.body(ids[1]).unwrap().state.on_ground);
    // The second character collides with an empty group and keeps falling.
    assert!(!level.body(ids[2]).unwrap().state.on_ground);
    assert!(level.body(ids[2]).unwrap().state.pos.y > 4.0);
}

#[test]
fn bad_description_adds_nothing() {
    let mut level = PlatformingLevel::new();
    let json = r#"{ "tileMaps": [{ "rows": ["x"] }], "characters": [{ "x": 0, "y": 0, "height": -1 }] }"#;
    assert!(level.load_level_json(json).is_err());
    assert_eq!(level.body_count(), 0);
}

#[test]
fn rejects_invalid_resolver_settings() {
    let mut level = PlatformingLevel::new();
    let before = level.resolver_settings();
    level.set_resolver_settings(ResolverSettings { epsilon: 0.0, max_step_up: 0.1 });
    assert_eq!(level.resolver_settings(), before);

    let custom = ResolverSettings { epsilon: 0.001, max_step_up: 0.25 };
    level.set_resolver_settings(custom);
    assert_eq!(level.resolver_settings(), custom);
}

#[test]
fn render_walks_every_body() {
    let mut level = PlatformingLevel::new();
    level.push_object(floor_map(), &[]);
    level.push_object(Body::character(CharacterOptions::at(2.0, 1.0)), &[]);
    let mut batch = RenderBatch::new();
    level.render(&mut batch);
    // four floor tiles, then the character
    assert_eq!(batch.rect_count(), 5);
    assert_eq!(&batch.rects[16..], &[1.5, 0.0, 1.0, 2.0]);
}

#[test]
fn perf_timing_is_opt_in() {
    let mut level = PlatformingLevel::new();
    level.update(DT);
    assert_eq!(level.stats().step_ms(), 0.0);
    level.enable_perf_metrics(true);
    level.update(DT);
    assert!(level.stats().step_ms() >= 0.0);
}
