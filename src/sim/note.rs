//! Note lifecycle
//!
//! A note is born in the center of the ring, thickens while it fades in,
//! then travels outward so that its band crosses the ring radius exactly
//! during its valid window. Position is a pure function of elapsed session
//! time, so replaying the same timestamps reproduces the same geometry.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::{APPROACH_RATE_MS, CIRCLE_RADIUS};
use crate::linear_map;

/// Which cursor(s) a note demands for a valid hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affinity {
    Left,
    Right,
    /// Either cursor satisfies the note
    Any,
    /// Both cursors must overlap the note in the same evaluation
    Both,
}

impl Affinity {
    pub fn wants_left(self) -> bool {
        matches!(self, Affinity::Left | Affinity::Any | Affinity::Both)
    }

    pub fn wants_right(self) -> bool {
        matches!(self, Affinity::Right | Affinity::Any | Affinity::Both)
    }

    /// Draw one of the four kinds uniformly.
    pub fn sample(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4u8) {
            0 => Affinity::Any,
            1 => Affinity::Left,
            2 => Affinity::Right,
            _ => Affinity::Both,
        }
    }
}

/// Rejected note configuration: the appearance-to-perfect travel time must
/// be positive for the outward interpolation to be defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidNote {
    pub travel_time: f32,
}

impl fmt::Display for InvalidNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "non-positive note travel time {:.3} ms (valid window too negative?)",
            self.travel_time
        )
    }
}

impl std::error::Error for InvalidNote {}

/// One hittable event and its current geometry.
///
/// Timestamps are milliseconds of session time. Derived fields are fixed
/// at construction; `radius`, `thickness`, and `elapsed` are rewritten by
/// [`Note::update`] every simulation tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Perfect-hit timestamp
    pub ts_valid: f32,
    /// How long the note counts as correctly timed
    pub valid_window: f32,
    /// Center angle (radians)
    pub angle: f32,
    /// Angular span
    pub width: f32,
    pub affinity: Affinity,

    pub valid_start: f32,
    pub valid_end: f32,
    pub appear_start: f32,
    pub appear_end: f32,
    /// Time from first appearance to the perfect radius
    pub travel_time: f32,
    /// Band thickness once fully faded in
    pub max_thickness: f32,

    pub radius: f32,
    pub thickness: f32,
    pub elapsed: f32,
}

impl Note {
    pub fn new(
        ts_valid: f32,
        valid_window: f32,
        angle: f32,
        width: f32,
        affinity: Affinity,
    ) -> Result<Self, InvalidNote> {
        let valid_start = ts_valid - valid_window / 2.0;
        let valid_end = ts_valid + valid_window / 2.0;
        let appear_start = valid_start - APPROACH_RATE_MS;
        let appear_end = valid_end - APPROACH_RATE_MS;
        let travel_time = ts_valid - appear_start;
        if !(travel_time > 0.0) {
            return Err(InvalidNote { travel_time });
        }
        let max_thickness = CIRCLE_RADIUS / travel_time * valid_window;

        let mut note = Self {
            ts_valid,
            valid_window,
            angle,
            width,
            affinity,
            valid_start,
            valid_end,
            appear_start,
            appear_end,
            travel_time,
            max_thickness,
            radius: 0.0,
            thickness: 0.0,
            elapsed: 0.0,
        };
        note.update(0.0);
        Ok(note)
    }

    /// Recompute geometry for the given session time. Pure in `elapsed`.
    ///
    /// Before `appear_start` the note is inactive. During appearance the
    /// band thickens linearly in place. From `appear_end` the band travels
    /// outward, reaching the ring radius exactly at `ts_valid` and
    /// overshooting past it - the overshoot is the symmetric miss margin.
    pub fn update(&mut self, elapsed: f32) {
        self.elapsed = elapsed;

        if elapsed < self.appear_start {
            self.radius = 0.0;
            self.thickness = 0.0;
            return;
        }
        if elapsed <= self.appear_end {
            let grown = linear_map(elapsed, self.appear_start, self.appear_end, 0.0, 1.0);
            self.thickness = grown * self.max_thickness;
            self.radius = (self.thickness / 2.0).ceil();
        }
        if elapsed >= self.appear_end {
            self.thickness = self.max_thickness;
            self.radius = linear_map(
                elapsed,
                self.appear_end,
                self.ts_valid,
                (self.max_thickness / 2.0).ceil(),
                CIRCLE_RADIUS,
            );
        }
    }

    pub fn angle_start(&self) -> f32 {
        self.angle - self.width / 2.0
    }

    pub fn angle_end(&self) -> f32 {
        self.angle + self.width / 2.0
    }

    /// The note's valid window has passed without a hit.
    pub fn missed(&self) -> bool {
        self.elapsed > self.valid_end
    }

    /// The note's band currently straddles the ring radius - the moments
    /// where temporal correctness and spatial position coincide.
    pub fn collide_circle(&self) -> bool {
        self.radius + self.thickness / 2.0 >= CIRCLE_RADIUS
            && self.radius - self.thickness / 2.0 <= CIRCLE_RADIUS
    }
}
