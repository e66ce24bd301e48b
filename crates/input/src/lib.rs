#![warn(missing_docs)]
//! Translation of window events into per-tick input snapshots.
//!
//! Events arrive whenever the windowing layer delivers them; they only mutate
//! the held-key set and accumulators here. The simulation reads one
//! [`TickInput`] per frame via [`InputState::snapshot`].

use std::collections::HashSet;

use blockworld_core::{HeldKeys, LookDelta, PointerAction, TickInput};
use tracing::debug;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state accumulated between two ticks.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently pressed.
    keys_pressed: HashSet<KeyCode>,
    /// Pointer actions triggered since the last frame.
    actions: Vec<PointerAction>,
    /// Hotbar slot chosen since the last frame (0-based).
    select_slot: Option<usize>,
    /// Pointer motion since the last frame.
    look: LookDelta,
    /// Whether the cursor is locked (for first-person camera).
    pub cursor_locked: bool,
    /// Set when a click should ask the window to grab the cursor.
    lock_requested: bool,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event to update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.press_key(*keycode),
                ElementState::Released => self.release_key(*keycode),
            },
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.press_button(*button),
            WindowEvent::Focused(false) => self.keys_pressed.clear(),
            _ => {}
        }
    }

    /// Handle device event (for mouse movement).
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_motion(delta.0, delta.1);
        }
    }

    /// Record a key press.
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_pressed.insert(key);
        if let Some(digit) = digit_of(key) {
            // Number keys select slots 1..=9 (0-based 0..=8).
            self.select_slot = Some(digit as usize - 1);
        }
    }

    /// Record a key release.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    /// Record a mouse button press.
    pub fn press_button(&mut self, button: MouseButton) {
        if !self.cursor_locked {
            self.lock_requested = true;
        }
        let action = match button {
            MouseButton::Left => PointerAction::Primary,
            MouseButton::Right => PointerAction::Secondary,
            _ => return,
        };
        self.actions.push(action);
    }

    /// Accumulate raw pointer motion.
    pub fn add_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.look += LookDelta::new(dx as f32, dy as f32);
    }

    /// Check if a key is currently pressed.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Movement keys currently held.
    pub fn held_keys(&self) -> HeldKeys {
        let mut held = HeldKeys::empty();
        for key in &self.keys_pressed {
            held |= match key {
                KeyCode::KeyW => HeldKeys::FORWARD,
                KeyCode::KeyS => HeldKeys::BACKWARD,
                KeyCode::KeyA => HeldKeys::LEFT,
                KeyCode::KeyD => HeldKeys::RIGHT,
                KeyCode::Space => HeldKeys::JUMP,
                KeyCode::ShiftLeft | KeyCode::ShiftRight => HeldKeys::SPRINT,
                KeyCode::ControlLeft | KeyCode::ControlRight => HeldKeys::CROUCH,
                _ => HeldKeys::empty(),
            };
        }
        held
    }

    /// Take the cursor-lock request raised by a click while unlocked.
    pub fn take_lock_request(&mut self) -> bool {
        std::mem::take(&mut self.lock_requested)
    }

    /// Mark the cursor as locked or released by the window.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
    }

    /// Build the snapshot for this tick. Look motion is sanitized here.
    pub fn snapshot(&self) -> TickInput {
        let look = self.look.sanitized();
        if look != self.look {
            debug!(raw = ?self.look, "look delta sanitized");
        }
        TickInput {
            keys: self.held_keys(),
            look,
            actions: self.actions.clone(),
            select_slot: self.select_slot,
        }
    }

    /// Reset per-frame state (call after the tick consumed the snapshot).
    pub fn begin_frame(&mut self) {
        self.actions.clear();
        self.select_slot = None;
        self.look = LookDelta::ZERO;
    }
}

fn digit_of(key: KeyCode) -> Option<u32> {
    Some(match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        KeyCode::Digit6 | KeyCode::Numpad6 => 6,
        KeyCode::Digit7 | KeyCode::Numpad7 => 7,
        KeyCode::Digit8 | KeyCode::Numpad8 => 8,
        KeyCode::Digit9 | KeyCode::Numpad9 => 9,
        _ => return None,
    })
}
