//! Pulse Ring - a dual-stick circular rhythm game core
//!
//! Notes spawn at the center of a ring, thicken, and travel outward toward
//! the ring's radius. Each note must be hit while it crosses the ring, with
//! the cursor(s) its affinity demands steered over its angle. Two analog
//! sticks drive the two cursors; two triggers fire the hits.
//!
//! Core modules:
//! - `sim`: deterministic gameplay simulation (notes, arcs, hits, session)
//! - `clock`: per-loop timing and fixed-cadence scheduling
//! - `settings`: tunable input/scheduling configuration
//! - `view`: read-only render-facing projection of session state

pub mod clock;
pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Settings;
pub use sim::{GameSession, tick};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_8;

    /// Time (ms) a note takes to go from first appearance to its perfect radius
    pub const APPROACH_RATE_MS: f32 = 1000.0;

    /// Ring radius where notes must be hit
    pub const CIRCLE_RADIUS: f32 = 300.0;

    /// Angular half-width of each cursor (cursor spans angle ± this)
    pub const CURSOR_HALF_WIDTH: f32 = FRAC_PI_8;
    /// Angular span of spawned notes
    pub const NOTE_WIDTH: f32 = FRAC_PI_8;

    /// Fixed simulation cadence (best-effort wall-clock interval)
    pub const SIM_PERIOD_MS: f32 = 10.0;
    /// Render cadence for the native demo loop (hosts with a real display
    /// callback pace this themselves)
    pub const RENDER_PERIOD_MS: f32 = 1000.0 / 60.0;
    /// Maximum coalesced simulation ticks per poll to prevent spiral of death
    pub const MAX_CATCH_UP_TICKS: u32 = 8;
    /// Clamp on a single poll delta (tab-switch / debugger pauses)
    pub const MAX_POLL_DELTA_MS: f32 = 100.0;

    /// How far ahead of "now" a replacement note's perfect timestamp lands
    pub const SPAWN_LEAD_MS: f32 = 2000.0;
    /// Valid window of spawned notes
    pub const SPAWN_WINDOW_MS: f32 = 1000.0;

    /// Squared-magnitude stick deadzones. The left value is far stricter
    /// than the right; both are preserved as shipped pending tuning review.
    pub const LEFT_DEADZONE_SQ: f32 = 0.75;
    pub const RIGHT_DEADZONE_SQ: f32 = 0.2;

    /// Analog axis indices for the two stick vectors
    pub const LEFT_STICK_AXES: (usize, usize) = (0, 1);
    pub const RIGHT_STICK_AXES: (usize, usize) = (2, 3);
    /// Button indices for the two hit triggers
    pub const LEFT_TRIGGER_BUTTON: usize = 4;
    pub const RIGHT_TRIGGER_BUTTON: usize = 5;
}

use std::f32::consts::TAU;

/// Normalize an angle into [0, 2π).
///
/// `rem_euclid` keeps negative inputs correct, but can round up to exactly
/// 2π for tiny negative angles; that boundary is folded back to 0.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

/// Map `value` linearly from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping: values outside the input range extrapolate.
#[inline]
pub fn linear_map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
