//! FPS Locomotion Sandbox
//!
//! Opens an empty window and drives a first-person character over a flat
//! ground plane with a low ceiling block ahead. Nothing is rendered; the
//! character state goes to the log and the window title.
//!
//! Controls: WASD/arrows move, mouse looks, Shift sprints, Ctrl/C crouches,
//! Space jumps. ESC releases the mouse, ESC again quits, click recaptures.
//!
//! Set `FPS_CONFIG` to a JSON file to override tuning values and
//! `RUST_LOG=debug` to see jumps, crouch changes and cursor events.

use std::sync::Arc;
use std::time::Instant;

use fps_locomotion_engine::camera::CameraRig;
use fps_locomotion_engine::config::ControllerConfig;
use fps_locomotion_engine::input::{
    CursorManager, InputAction, InputRelay, KeyBindings, KeyCode, LookAccumulator, MovementKeys,
};
use fps_locomotion_engine::physics::{
    Aabb, CharacterBody, CollisionWorld, FlatGroundBody, LayerMask,
};
use fps_locomotion_engine::player::FirstPersonCharacter;
use glam::Vec3;
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "FPS_CONFIG";

/// Seconds between state log lines
const LOG_INTERVAL: f32 = 1.0;

/// Longest frame time handed to the character (s)
const MAX_FRAME_TIME: f32 = 0.1;

struct SandboxApp {
    window: Option<Arc<Window>>,
    world: CollisionWorld,
    player: FirstPersonCharacter<FlatGroundBody>,
    relay: InputRelay,
    bindings: KeyBindings,
    keys: MovementKeys,
    look: LookAccumulator,
    last_frame: Instant,
    log_timer: f32,
}

impl SandboxApp {
    fn new(config: ControllerConfig) -> Self {
        let mut world = CollisionWorld::new();
        // Low ceiling 6 m ahead, 1.8 m above ground: standing up is blocked under it
        world.add(
            Aabb::new(Vec3::new(-2.0, 1.8, -10.0), Vec3::new(2.0, 2.5, -6.0)),
            LayerMask::CEILING,
        );

        let body = FlatGroundBody::standing_at(Vec3::ZERO, 0.0);
        let player = FirstPersonCharacter::new(body, CameraRig::new(), config);

        Self {
            window: None,
            world,
            player,
            relay: InputRelay::new(),
            bindings: KeyBindings::new(),
            keys: MovementKeys::new(),
            look: LookAccumulator::new(),
            last_frame: Instant::now(),
            log_timer: 0.0,
        }
    }

    fn apply_cursor(&mut self) {
        let cursor: &CursorManager = self.relay.cursor();
        if !cursor.is_dirty() {
            return;
        }
        if let Some(window) = &self.window {
            if cursor.should_cursor_be_grabbed() {
                if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                    let _ = window.set_cursor_grab(CursorGrabMode::Confined);
                }
            } else {
                let _ = window.set_cursor_grab(CursorGrabMode::None);
            }
            window.set_cursor_visible(cursor.should_cursor_be_visible());
            window.set_title(&format!("FPS Sandbox - {}", cursor.status_message()));
        }
        self.look.set_captured(cursor.is_looking());
        self.relay.cursor_mut().clear_dirty();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, pressed: bool) {
        if key == KeyCode::Escape && pressed && !self.relay.cursor().is_captured() {
            event_loop.exit();
            return;
        }

        let Some(action) = self.bindings.action_for(key) else {
            return;
        };
        if pressed && action == InputAction::ReleaseCursor {
            self.relay.cursor_mut().handle_escape();
            self.keys.reset();
            return;
        }
        if let Some(event) = self.keys.handle_key(key, action, pressed) {
            self.relay.handle(event, &mut self.player);
        }
    }

    fn update(&mut self, delta_time: f32) {
        if let Some(event) = self.look.take_event() {
            self.relay.handle(event, &mut self.player);
        }

        self.player.update(delta_time, &self.world);

        self.log_timer += delta_time;
        if self.log_timer >= LOG_INTERVAL {
            self.log_timer = 0.0;
            let state = self.player.state();
            let body = self.player.body();
            info!(
                "pos ({:.2}, {:.2}, {:.2}) speed {:.2} vy {:.2} pitch {:.1} crouched {} grounded {} fov {:.1}",
                body.position().x,
                body.position().y,
                body.position().z,
                state.current_speed,
                state.vertical_velocity,
                state.pitch,
                state.is_crouching,
                body.is_grounded(),
                self.player.rig().fov,
            );
        }
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("FPS Sandbox")
            .with_inner_size(PhysicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.player.rig_mut().set_viewport(size.width, size.height);
                self.window = Some(Arc::new(window));
                self.relay.initialize();
                self.apply_cursor();
                self.last_frame = Instant::now();
            }
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    self.handle_key(event_loop, convert_key(key), pressed);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.relay.cursor_mut().handle_left_click();
            }
            WindowEvent::Focused(focused) => {
                let cursor = self.relay.cursor_mut();
                if focused {
                    cursor.handle_focus_gained();
                } else {
                    cursor.handle_focus_lost();
                }
            }
            WindowEvent::Resized(size) => {
                self.player.rig_mut().set_viewport(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now
                    .duration_since(self.last_frame)
                    .as_secs_f32()
                    .min(MAX_FRAME_TIME);
                self.last_frame = now;
                self.update(delta_time);
            }
            _ => {}
        }
        self.apply_cursor();
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.look.accumulate(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn convert_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyC => KeyCode::C,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
        WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
        WinitKeyCode::ControlRight => KeyCode::ControlRight,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

fn load_config() -> ControllerConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return ControllerConfig::default();
    };
    match ControllerConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}; using default config");
            ControllerConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("FPS Sandbox");
    info!("WASD move, mouse look, Shift sprint, Ctrl/C crouch, Space jump");
    info!("ESC releases the mouse (ESC again quits), click to recapture");

    let mut app = SandboxApp::new(load_config());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    Ok(())
}
