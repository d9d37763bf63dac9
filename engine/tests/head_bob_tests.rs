//! Head Bob Tests - Sway, Reset and Focus
//!
//! Tests the head-bob on its own and inside the first-person pipeline.

use fps_locomotion_engine::camera::CameraRig;
use fps_locomotion_engine::config::{ControllerConfig, FocusMode, HeadBobConfig};
use fps_locomotion_engine::input::{InputEvent, InputRelay};
use fps_locomotion_engine::physics::{CharacterBody, EmptyWorld, FlatGroundBody};
use fps_locomotion_engine::player::{FirstPersonCharacter, HeadBob};
use glam::{Vec2, Vec3};

const EPSILON: f32 = 0.0001;
const DT: f32 = 0.1;

/// Grounded body that just moved along -Z at `speed`.
fn grounded_body(speed: f32) -> FlatGroundBody {
    let mut body = FlatGroundBody::standing_at(Vec3::ZERO, 0.0);
    body.move_by(Vec3::new(0.0, -0.1, -speed * DT), DT);
    body
}

/// Airborne body that just moved along -Z at `speed`.
fn airborne_body(speed: f32) -> FlatGroundBody {
    let mut body = FlatGroundBody::with_position(Vec3::new(0.0, 5.0, 0.0), 0.0);
    body.move_by(Vec3::new(0.0, 0.0, -speed * DT), DT);
    body
}

fn character(config: ControllerConfig) -> FirstPersonCharacter<FlatGroundBody> {
    FirstPersonCharacter::new(
        FlatGroundBody::standing_at(Vec3::ZERO, 0.0),
        CameraRig::new(),
        config,
    )
}

fn send(player: &mut FirstPersonCharacter<FlatGroundBody>, event: InputEvent) {
    InputRelay::new().handle(event, player);
}

// ============================================================================
// Sway Gating Tests
// ============================================================================

#[test]
fn test_no_offset_below_toggle_speed() {
    let mut rig = CameraRig::new();
    let bob = HeadBob::new(HeadBobConfig::default(), &rig);

    for frame in 0..20 {
        let bobbing = bob.update(&grounded_body(2.9), &mut rig, frame as f32 * DT, DT);
        assert!(!bobbing);
        assert_eq!(rig.local_position, Vec3::ZERO);
    }
}

#[test]
fn test_no_offset_while_airborne() {
    let mut rig = CameraRig::new();
    let bob = HeadBob::new(HeadBobConfig::default(), &rig);

    for frame in 0..20 {
        let bobbing = bob.update(&airborne_body(6.0), &mut rig, frame as f32 * DT, DT);
        assert!(!bobbing);
        assert_eq!(rig.local_position, Vec3::ZERO);
    }
}

#[test]
fn test_offset_resumes_immediately() {
    let mut rig = CameraRig::new();
    let bob = HeadBob::new(HeadBobConfig::default(), &rig);

    // Idle for a while, then fast on the ground
    bob.update(&grounded_body(0.0), &mut rig, 0.5, DT);
    assert_eq!(rig.local_position, Vec3::ZERO);

    let t = 1.234;
    assert!(bob.update(&grounded_body(4.0), &mut rig, t, DT));

    // Full sway this frame, then one reset step of lerp(p, 0, 0.1)
    let expected = bob.motion(t) * 0.9;
    assert!((rig.local_position - expected).length() < EPSILON);
}

#[test]
fn test_crouch_walk_does_not_bob() {
    let mut player = character(ControllerConfig::default());
    send(&mut player, InputEvent::Move(Vec2::new(0.0, 1.0)));
    send(&mut player, InputEvent::Crouch(true));

    for _ in 0..30 {
        player.update(DT, &EmptyWorld);
    }
    // Crouch speed 2.0 is below the toggle speed
    assert!((player.state().current_speed - 2.0).abs() < EPSILON);
    assert_eq!(player.rig().local_position, Vec3::ZERO);
}

#[test]
fn test_walking_bobs_and_settles_after_stop() {
    let mut player = character(ControllerConfig::default());
    send(&mut player, InputEvent::Move(Vec2::new(0.0, 1.0)));

    for _ in 0..20 {
        player.update(DT, &EmptyWorld);
    }
    assert!(player.rig().local_position.length() > 0.0);

    send(&mut player, InputEvent::Move(Vec2::ZERO));
    let mut previous = player.rig().local_position.length();
    for _ in 0..50 {
        player.update(DT, &EmptyWorld);
        let distance = player.rig().local_position.length();
        assert!(distance <= previous + EPSILON);
        previous = distance;
    }
    assert!(previous < 0.01);
}

#[test]
fn test_disabled_head_bob_leaves_camera_alone() {
    let mut config = ControllerConfig::default();
    config.head_bob.enabled = false;
    let mut player = character(config);
    send(&mut player, InputEvent::Move(Vec2::new(0.0, 1.0)));

    for _ in 0..20 {
        send(&mut player, InputEvent::Look(Vec2::new(0.0, 20.0)));
        player.update(DT, &EmptyWorld);
        assert_eq!(player.rig().local_position, Vec3::ZERO);
        assert!((player.rig().local_pitch() - player.state().pitch).abs() < 0.001);
    }
}

// ============================================================================
// Focus Tests
// ============================================================================

#[test]
fn test_level_focus_target() {
    let mut config = HeadBobConfig::default();
    config.focus_mode = FocusMode::Level;
    let rig = CameraRig::new();
    let bob = HeadBob::new(config, &rig);

    let mut body = FlatGroundBody::standing_at(Vec3::new(2.0, 0.0, 3.0), 0.0);
    body.set_yaw(std::f32::consts::FRAC_PI_2);

    let target = bob.focus_target(&body, &rig);
    let expected = Vec3::new(2.0 + 15.0, 1.0 + rig.holder_offset.y, 3.0);
    assert!((target - expected).length() < 0.001);
}

#[test]
fn test_level_focus_flattens_pitch() {
    let mut config = ControllerConfig::default();
    config.head_bob.focus_mode = FocusMode::Level;
    let mut player = character(config);

    send(&mut player, InputEvent::Look(Vec2::new(0.0, 200.0)));
    player.update(DT, &EmptyWorld);

    // Movement pitched up 20 degrees, the level focus point overrides it
    assert!((player.state().pitch + 20.0).abs() < 0.001);
    assert!(player.rig().local_pitch().abs() < 0.01);
}

#[test]
fn test_pitched_focus_keeps_pitch() {
    let mut player = character(ControllerConfig::default());

    send(&mut player, InputEvent::Look(Vec2::new(0.0, 200.0)));
    player.update(DT, &EmptyWorld);
    assert!((player.rig().local_pitch() - player.state().pitch).abs() < 0.01);

    // Still close while walking and swaying
    send(&mut player, InputEvent::Move(Vec2::new(0.0, 1.0)));
    for _ in 0..30 {
        player.update(DT, &EmptyWorld);
        assert!((player.rig().local_pitch() - player.state().pitch).abs() < 0.5);
    }
}

#[test]
fn test_focus_keeps_camera_facing_body_forward() {
    let mut player = character(ControllerConfig::default());
    send(&mut player, InputEvent::Look(Vec2::new(450.0, 0.0)));
    player.update(DT, &EmptyWorld);

    // 45 degrees of yaw, level view
    let forward = player.camera_forward();
    let body_forward = player.body().forward();
    assert!((forward - body_forward).length() < 0.001);
}
