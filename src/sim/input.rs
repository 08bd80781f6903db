//! Analog input tracking
//!
//! The host polls the physical device and hands the simulation a plain
//! [`PadFrame`] snapshot per tick. This module owns everything stateful
//! about input: cursor angles with deadzone hysteresis, and trigger
//! rising-edge detection. No device APIs are touched here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CURSOR_HALF_WIDTH, LEFT_STICK_AXES, LEFT_TRIGGER_BUTTON, RIGHT_STICK_AXES,
    RIGHT_TRIGGER_BUTTON,
};
use crate::settings::Settings;

/// One tick's snapshot of the analog device.
///
/// Axes 0-1 are the left stick vector, 2-3 the right stick vector, both in
/// [-1, 1]; buttons 4 and 5 are the left/right hit triggers. Shorter
/// arrays read as centered sticks and released buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PadFrame {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
}

impl PadFrame {
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    pub fn pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    fn stick(&self, axes: (usize, usize)) -> Vec2 {
        Vec2::new(self.axis(axes.0), self.axis(axes.1))
    }
}

/// One steerable cursor on the ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CursorState {
    /// Current angle (radians)
    pub angle: f32,
    /// Fixed angular half-width
    pub half_width: f32,
}

impl CursorState {
    pub fn new(half_width: f32) -> Self {
        Self {
            angle: 0.0,
            half_width,
        }
    }

    /// Point the cursor along `stick`. Below the deadzone the previous
    /// angle is retained unchanged - the cursor never snaps to zero.
    pub fn steer(&mut self, stick: Vec2, deadzone_sq: f32) {
        if stick.length_squared() < deadzone_sq {
            return;
        }
        self.angle = stick.y.atan2(stick.x);
    }

    /// Angular span covered by the cursor.
    pub fn span(&self) -> (f32, f32) {
        (self.angle - self.half_width, self.angle + self.half_width)
    }
}

/// Rising-edge detector over a button's pressed state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Trigger {
    held: bool,
}

impl Trigger {
    /// Feed this tick's pressed state; true only on the unpressed-to-
    /// pressed transition, so holding yields exactly one event.
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.held;
        self.held = pressed;
        rising
    }

    pub fn held(self) -> bool {
        self.held
    }
}

/// Discrete hit events produced from one pad snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitEvents {
    pub left_edge: bool,
    pub right_edge: bool,
    pub left_held: bool,
    pub right_held: bool,
}

impl HitEvents {
    /// Live trigger condition for Both-affinity notes: a fresh press on
    /// either side while the other side is down. An edge implies held, so
    /// a simultaneous double press also qualifies.
    pub fn both_trigger(self) -> bool {
        (self.left_held && self.right_edge) || (self.left_edge && self.right_held)
    }
}

/// Per-tick input state: two cursors and two trigger edge detectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputTracker {
    pub left: CursorState,
    pub right: CursorState,
    left_trigger: Trigger,
    right_trigger: Trigger,
    left_deadzone_sq: f32,
    right_deadzone_sq: f32,
}

impl InputTracker {
    pub fn new(settings: &Settings) -> Self {
        Self {
            left: CursorState::new(CURSOR_HALF_WIDTH),
            right: CursorState::new(CURSOR_HALF_WIDTH),
            left_trigger: Trigger::default(),
            right_trigger: Trigger::default(),
            left_deadzone_sq: settings.left_deadzone_sq,
            right_deadzone_sq: settings.right_deadzone_sq,
        }
    }

    /// Steer both cursors and detect trigger edges for one tick.
    ///
    /// `None` means no device is connected: cursors freeze at their last
    /// angle and no hit events fire, so unhit notes simply age into
    /// misses.
    pub fn sample(&mut self, pad: Option<&PadFrame>) -> HitEvents {
        let Some(pad) = pad else {
            return HitEvents::default();
        };

        self.left.steer(pad.stick(LEFT_STICK_AXES), self.left_deadzone_sq);
        self.right.steer(pad.stick(RIGHT_STICK_AXES), self.right_deadzone_sq);

        let left_edge = self.left_trigger.update(pad.pressed(LEFT_TRIGGER_BUTTON));
        let right_edge = self.right_trigger.update(pad.pressed(RIGHT_TRIGGER_BUTTON));
        HitEvents {
            left_edge,
            right_edge,
            left_held: self.left_trigger.held(),
            right_held: self.right_trigger.held(),
        }
    }
}
