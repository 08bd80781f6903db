//! Session state
//!
//! All mutable game state lives in one [`GameSession`] value passed by
//! reference into the tick function - nothing is process-global. The
//! session is created at game start and reset only by an explicit
//! restart; the simulation tick is its sole writer, the render path only
//! ever reads it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::input::InputTracker;
use super::note::{Affinity, Note};
use crate::consts::{NOTE_WIDTH, SPAWN_LEAD_MS, SPAWN_WINDOW_MS};
use crate::settings::Settings;

/// Spawner RNG state kept as plain data; a generator is rebuilt per
/// spawn so sessions stay reproducible from `seed` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next spawn. `seed_from_u64` diffuses the
    /// correlated seed+stream values, so consecutive spawns are
    /// independent draws.
    fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream));
        self.stream += 1;
        rng
    }
}

/// One run of the game: active notes, counters, cursors, spawner RNG.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    /// Run seed, kept for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Active notes; membership matters, order does not
    pub notes: Vec<Note>,
    pub score: u64,
    pub missed: u64,
    /// Cursor angles and trigger edge state
    pub input: InputTracker,
    /// Session time of the latest simulation tick (ms)
    pub elapsed_ms: f32,
}

impl GameSession {
    /// Start a fresh session: zero counters and the fixed seed note a
    /// player sees first (perfect at 2 s, dead ahead at angle 0).
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut session = Self {
            seed,
            rng_state: RngState::new(seed),
            notes: Vec::new(),
            score: 0,
            missed: 0,
            input: InputTracker::new(settings),
            elapsed_ms: 0.0,
        };
        session.push_note(SPAWN_LEAD_MS, 0.0, Affinity::Any);
        log::info!("session started (seed {seed})");
        session
    }

    /// Explicit restart: everything resets, including cursor state.
    pub fn restart(&mut self, seed: u64, settings: &Settings) {
        log::info!(
            "session restart after score {} / missed {}",
            self.score,
            self.missed
        );
        *self = Self::new(seed, settings);
    }

    /// Spawn the replacement note once the field is empty: perfect two
    /// seconds from now, random angle, random affinity.
    pub(crate) fn spawn_replacement(&mut self, now_ms: f32) {
        let mut rng = self.rng_state.next_rng();
        let affinity = Affinity::sample(&mut rng);
        let angle = rng.random_range(0.0..TAU);
        self.push_note(now_ms + SPAWN_LEAD_MS, angle, affinity);
    }

    fn push_note(&mut self, ts_valid: f32, angle: f32, affinity: Affinity) {
        match Note::new(ts_valid, SPAWN_WINDOW_MS, angle, NOTE_WIDTH, affinity) {
            Ok(note) => {
                log::debug!("spawned {affinity:?} note at {angle:.2} rad, perfect at {ts_valid:.0} ms");
                self.notes.push(note);
            }
            // unreachable with the fixed approach rate, but never trusted
            Err(err) => log::error!("rejected spawned note: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::APPROACH_RATE_MS;

    fn session(seed: u64) -> GameSession {
        GameSession::new(seed, &Settings::default())
    }

    #[test]
    fn test_new_session_has_seed_note() {
        let session = session(1);
        assert_eq!(session.notes.len(), 1);
        assert_eq!(session.score, 0);
        assert_eq!(session.missed, 0);

        let note = &session.notes[0];
        assert_eq!(note.ts_valid, SPAWN_LEAD_MS);
        assert_eq!(note.valid_window, SPAWN_WINDOW_MS);
        assert_eq!(note.angle, 0.0);
        assert_eq!(note.width, NOTE_WIDTH);
        assert_eq!(note.affinity, Affinity::Any);
    }

    #[test]
    fn test_spawn_replacement_parameters() {
        let mut session = session(42);
        session.notes.clear();
        session.spawn_replacement(5000.0);

        assert_eq!(session.notes.len(), 1);
        let note = &session.notes[0];
        assert_eq!(note.ts_valid, 5000.0 + SPAWN_LEAD_MS);
        assert_eq!(note.valid_window, SPAWN_WINDOW_MS);
        assert_eq!(note.width, NOTE_WIDTH);
        assert!((0.0..TAU).contains(&note.angle));
        assert!(note.travel_time > APPROACH_RATE_MS);
    }

    #[test]
    fn test_same_seed_spawns_same_notes() {
        let mut a = session(7);
        let mut b = session(7);
        for now in [3000.0, 6000.0, 9000.0] {
            a.notes.clear();
            b.notes.clear();
            a.spawn_replacement(now);
            b.spawn_replacement(now);
            assert_eq!(a.notes[0].angle, b.notes[0].angle);
            assert_eq!(a.notes[0].affinity, b.notes[0].affinity);
        }
    }

    #[test]
    fn test_spawn_sequence_advances() {
        let mut session = session(11);
        let mut angles = std::collections::HashSet::new();
        for spawn in 0..16 {
            session.notes.clear();
            session.spawn_replacement(spawn as f32 * 3000.0);
            angles.insert(session.notes[0].angle.to_bits());
        }
        assert_eq!(session.rng_state.stream, 16);
        // a frozen generator would repeat one angle forever
        assert!(angles.len() > 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = session(3);
        session.score = 10;
        session.missed = 4;
        session.elapsed_ms = 60_000.0;
        session.notes.clear();

        session.restart(3, &Settings::default());
        assert_eq!(session.score, 0);
        assert_eq!(session.missed, 0);
        assert_eq!(session.elapsed_ms, 0.0);
        assert_eq!(session.notes.len(), 1);
        assert_eq!(session.rng_state.stream, 0);
    }
}
