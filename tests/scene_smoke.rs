use sandbox_physics::collision::test_pair;
use sandbox_physics::{EntityDesc, InputEvent, SceneConfig, SceneCore, ShapeTag, Vec2, World};

fn empty_config() -> SceneConfig {
    SceneConfig {
        initial_boxes: 0,
        initial_circles: 0,
        ..SceneConfig::default()
    }
}

/// Circle (mass 1, bounciness 0.85) dropped 200 units onto the default
/// kinematic box.
fn drop_scene() -> (SceneCore, u32, u32) {
    let mut scene = SceneCore::new(empty_config()).unwrap();
    let floor = scene.spawn_box(Vec2::new(400.0, 100.0)).unwrap();
    let ball = scene.spawn_circle(Vec2::new(400.0, 340.0), false).unwrap();
    (scene, floor, ball)
}

#[test]
fn dropped_circle_bounces_with_shrinking_height() {
    let (mut scene, floor, ball) = drop_scene();
    let floor_start = scene.entity(floor).unwrap().position;

    let mut prev_vy = 0.0f32;
    let mut rebounds = Vec::new();
    for _ in 0..600 {
        scene.tick();

        let a = scene.entity(floor).unwrap();
        let b = scene.entity(ball).unwrap();
        let contact = test_pair(a, b);
        if contact.overlaps {
            assert!(contact.penetration < 1e-2, "left overlapping by {}", contact.penetration);
        }

        let vy = b.velocity.y;
        if prev_vy < 0.0 && vy > 0.0 {
            rebounds.push(vy);
        }
        prev_vy = vy;

        if rebounds.len() == 4 {
            break;
        }
    }

    assert_eq!(rebounds.len(), 4, "expected four bounces, saw {:?}", rebounds);
    // Impact speed from a 200 unit fall at g = 600 is about 490.
    assert!(rebounds[0] > 300.0 && rebounds[0] < 490.0);
    for pair in rebounds.windows(2) {
        assert!(pair[1] < pair[0], "rebounds should shrink: {:?}", rebounds);
    }

    let floor_now = scene.entity(floor).unwrap();
    assert_eq!(floor_now.position, floor_start);
    assert_eq!(floor_now.velocity, Vec2::zero());
}

#[test]
fn ball_never_falls_through_the_box() {
    let (mut scene, floor, ball) = drop_scene();
    let top = {
        let f = scene.entity(floor).unwrap();
        f.position.y + f.shape.half_extents().y
    };
    for _ in 0..900 {
        scene.tick();
        let b = scene.entity(ball).unwrap();
        assert!(b.position.y > top, "ball center dipped below the box top");
    }
}

#[test]
fn resting_circle_hovers_with_steady_rebound_speed() {
    let (mut scene, floor, ball) = drop_scene();
    let top = {
        let f = scene.entity(floor).unwrap();
        f.position.y + f.shape.half_extents().y
    };
    for _ in 0..3000 {
        scene.tick();
    }

    // Gravity re-penetrates every tick and restitution answers it:
    // v = e * g * dt / (1 + e), never the rest snap.
    let e = 0.85;
    let expected = e * 600.0 * scene.tick_seconds() / (1.0 + e);
    for _ in 0..10 {
        scene.tick();
        let b = scene.entity(ball).unwrap();
        assert!((b.position.y - (top + 20.0)).abs() < 0.5);
        assert!((b.velocity.y - expected).abs() < 1e-2, "vy = {}", b.velocity.y);
    }
}

#[test]
fn elastic_circles_keep_their_energy() {
    let mut scene = SceneCore::new(empty_config()).unwrap();
    scene.set_gravity(0.0, 0.0);
    let bouncy = sandbox_physics::Material::new(1.0, 0.0, 0.0).unwrap();
    scene
        .spawn(
            EntityDesc::circle(Vec2::new(100.0, 300.0), 20.0, 1.0)
                .velocity(Vec2::new(120.0, 0.0))
                .material(bouncy),
        )
        .unwrap();
    scene
        .spawn(
            EntityDesc::circle(Vec2::new(200.0, 300.0), 20.0, 1.0)
                .velocity(Vec2::new(-60.0, 0.0))
                .material(bouncy),
        )
        .unwrap();

    let energy = |s: &SceneCore| -> f32 { s.entities().iter().map(|e| e.kinetic_energy()).sum() };
    let before = energy(&scene);
    let mut hit = false;
    for _ in 0..120 {
        scene.tick();
        hit |= scene.last_collisions().impulses > 0;
    }

    assert!(hit);
    assert!((energy(&scene) - before).abs() / before < 1e-3);
}

#[test]
fn scene_from_json_config() {
    let json = r#"{
        "width": 640,
        "height": 480,
        "gravity": { "x": 0.0, "y": -300.0 },
        "initial_circles": 3,
        "initial_boxes": 2
    }"#;
    let scene = {
        let mut s = SceneCore::from_config_json(json).unwrap();
        s.populate().unwrap();
        s
    };
    assert_eq!((scene.width(), scene.height()), (640, 480));
    assert_eq!(scene.config().gravity, Vec2::new(0.0, -300.0));

    let tags: Vec<ShapeTag> = scene.entities().iter().map(|e| e.shape_tag()).collect();
    assert_eq!(
        tags,
        vec![ShapeTag::Box, ShapeTag::Box, ShapeTag::Circle, ShapeTag::Circle, ShapeTag::Circle]
    );
}

#[test]
fn world_round_trip() {
    let mut world = World::new(800, 600).unwrap();
    assert_eq!(world.populate().unwrap(), 3);

    world.queue_spawn_circle(400.0, 500.0, false);
    world.push_move(1.0, 0.0);
    assert_eq!(world.advance(0.05), 3);
    assert_eq!(world.frame(), 3);
    assert_eq!(world.entity_count(), 4);

    let count = world.extract_instances();
    assert_eq!(count, 4);
    assert_eq!(world.instances_len(), count * world.instance_stride());
    assert_eq!(world.projection_matrix().len(), 16);

    let json = world.config_json().unwrap();
    let again = SceneConfig::from_json(&json).unwrap();
    assert_eq!(again.width, 800);
}

#[test]
fn despawn_event_removes_only_target() {
    let mut scene = SceneCore::with_default_population(SceneConfig::default()).unwrap();
    let victim = scene.entities()[1].id;
    scene.push_input(InputEvent::Despawn { id: victim });
    scene.tick();
    assert_eq!(scene.entity_count(), 2);
    assert!(scene.entity(victim).is_none());
}
