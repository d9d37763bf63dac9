//! Input Tests - Relay, Bindings and Look Accumulation
//!
//! Feeds host-style input through the relay into a first-person character.

use fps_locomotion_engine::camera::CameraRig;
use fps_locomotion_engine::config::ControllerConfig;
use fps_locomotion_engine::input::{
    CursorAction, InputAction, InputEvent, InputRelay, KeyBindings, KeyCode, LookAccumulator,
    MovementKeys,
};
use fps_locomotion_engine::physics::{CharacterBody, EmptyWorld, FlatGroundBody};
use fps_locomotion_engine::player::FirstPersonCharacter;
use glam::{Vec2, Vec3};

const DT: f32 = 0.1;

fn character() -> FirstPersonCharacter<FlatGroundBody> {
    FirstPersonCharacter::new(
        FlatGroundBody::standing_at(Vec3::ZERO, 0.0),
        CameraRig::new(),
        ControllerConfig::default(),
    )
}

/// Key press or release routed through bindings and held-key state.
fn press(
    relay: &mut InputRelay,
    bindings: &KeyBindings,
    keys: &mut MovementKeys,
    player: &mut FirstPersonCharacter<FlatGroundBody>,
    key: KeyCode,
    pressed: bool,
) -> bool {
    let Some(action) = bindings.action_for(key) else {
        return false;
    };
    match keys.handle_key(key, action, pressed) {
        Some(event) => relay.handle(event, player),
        None => false,
    }
}

// ============================================================================
// Relay Tests
// ============================================================================

#[test]
fn test_initialize_hides_and_locks_cursor() {
    let mut relay = InputRelay::new();
    assert!(relay.cursor().should_cursor_be_visible());

    assert_eq!(relay.initialize(), CursorAction::Apply);
    assert!(!relay.cursor().should_cursor_be_visible());
    assert!(relay.cursor().should_cursor_be_grabbed());
}

#[test]
fn test_events_overwrite_input() {
    let mut relay = InputRelay::new();
    let mut player = character();

    relay.handle(InputEvent::Move(Vec2::new(1.0, 0.0)), &mut player);
    relay.handle(InputEvent::Move(Vec2::new(0.0, 1.0)), &mut player);
    relay.handle(InputEvent::Sprint(true), &mut player);
    relay.handle(InputEvent::Crouch(true), &mut player);

    let input = player.input();
    assert_eq!(input.move_axis, Vec2::new(0.0, 1.0));
    assert!(input.sprint);
    assert!(input.crouch);

    relay.handle(InputEvent::Sprint(false), &mut player);
    assert!(!player.input().sprint);
}

#[test]
fn test_jump_press_jumps_when_grounded() {
    let mut relay = InputRelay::new();
    let mut player = character();

    // Not grounded until the first frame lands the body
    assert!(!relay.handle(InputEvent::Jump(true), &mut player));

    player.update(DT, &EmptyWorld);
    assert!(relay.handle(InputEvent::Jump(true), &mut player));
    assert!((player.state().vertical_velocity - 10.85).abs() < 0.01);

    // Release does nothing
    let before = *player.state();
    assert!(!relay.handle(InputEvent::Jump(false), &mut player));
    assert_eq!(*player.state(), before);

    player.update(DT, &EmptyWorld);
    assert!(!player.body().is_grounded());
    assert!(!relay.handle(InputEvent::Jump(true), &mut player));
}

#[test]
fn test_look_applies_for_one_frame() {
    let mut relay = InputRelay::new();
    let mut player = character();

    relay.handle(InputEvent::Look(Vec2::new(100.0, 50.0)), &mut player);
    player.update(DT, &EmptyWorld);

    let yaw = player.body().yaw();
    let pitch = player.state().pitch;
    assert!((yaw - 10.0_f32.to_radians()).abs() < 0.0001);
    assert!((pitch + 5.0).abs() < 0.0001);

    // No new look event: nothing turns
    player.update(DT, &EmptyWorld);
    assert_eq!(player.body().yaw(), yaw);
    assert_eq!(player.state().pitch, pitch);
}

#[test]
fn test_move_persists_between_frames() {
    let mut relay = InputRelay::new();
    let mut player = character();
    relay.handle(InputEvent::Move(Vec2::new(0.0, 1.0)), &mut player);

    for _ in 0..5 {
        player.update(DT, &EmptyWorld);
    }
    assert!((player.state().current_speed - 4.0).abs() < 0.001);
}

// ============================================================================
// Keyboard and Mouse Routing Tests
// ============================================================================

#[test]
fn test_wasd_routes_to_move_axis() {
    let mut relay = InputRelay::new();
    let bindings = KeyBindings::new();
    let mut keys = MovementKeys::new();
    let mut player = character();

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::W, true);
    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::D, true);
    let axis = player.input().move_axis;
    assert!((axis - Vec2::new(1.0, 1.0).normalize()).length() < 0.0001);

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::W, false);
    assert_eq!(player.input().move_axis, Vec2::new(1.0, 0.0));

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ShiftLeft, true);
    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::C, true);
    assert!(player.input().sprint);
    assert!(player.input().crouch);
}

#[test]
fn test_either_ctrl_crouches() {
    let mut relay = InputRelay::new();
    let bindings = KeyBindings::new();
    let mut keys = MovementKeys::new();
    let mut player = character();

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ControlRight, true);
    assert!(player.input().crouch);

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ControlLeft, true);
    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ControlRight, false);
    assert!(player.input().crouch);

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ControlLeft, false);
    assert!(!player.input().crouch);
}

#[test]
fn test_releasing_one_shift_keeps_sprint() {
    let mut relay = InputRelay::new();
    let bindings = KeyBindings::new();
    let mut keys = MovementKeys::new();
    let mut player = character();

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ShiftLeft, true);
    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ShiftRight, true);
    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ShiftLeft, false);
    assert!(player.input().sprint);

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ShiftRight, false);
    assert!(!player.input().sprint);
}

#[test]
fn test_space_jumps_through_bindings() {
    let mut relay = InputRelay::new();
    let bindings = KeyBindings::new();
    let mut keys = MovementKeys::new();
    let mut player = character();
    player.update(DT, &EmptyWorld);

    assert!(press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::Space, true));
    assert!(!press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::Space, false));
}

#[test]
fn test_rebound_key_moves() {
    let mut relay = InputRelay::new();
    let mut bindings = KeyBindings::new();
    bindings.rebind(InputAction::MoveForward, KeyCode::ArrowUp);
    let mut keys = MovementKeys::new();
    let mut player = character();

    assert!(!press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::W, true));
    assert_eq!(player.input().move_axis, Vec2::ZERO);

    press(&mut relay, &bindings, &mut keys, &mut player, KeyCode::ArrowUp, true);
    assert_eq!(player.input().move_axis, Vec2::new(0.0, 1.0));
}

#[test]
fn test_mouse_motion_becomes_one_look_event() {
    let mut relay = InputRelay::new();
    let mut look = LookAccumulator::new();
    let mut player = character();

    relay.initialize();
    look.set_captured(relay.cursor().is_looking());

    // Raw device motion: +y is down
    look.accumulate(30.0, 20.0);
    look.accumulate(20.0, 30.0);

    let event = look.take_event();
    assert_eq!(event, Some(InputEvent::Look(Vec2::new(50.0, -50.0))));
    if let Some(event) = event {
        relay.handle(event, &mut player);
    }
    player.update(DT, &EmptyWorld);

    // Mouse moved down: looking down means positive pitch
    assert!((player.state().pitch - 5.0).abs() < 0.0001);
    assert_eq!(look.take_event(), None);
}

#[test]
fn test_released_cursor_drops_mouse_motion() {
    let mut relay = InputRelay::new();
    let mut look = LookAccumulator::new();

    relay.initialize();
    relay.cursor_mut().handle_escape();
    look.set_captured(relay.cursor().is_looking());

    look.accumulate(40.0, 0.0);
    assert_eq!(look.take_event(), None);
}
