//! Per-loop timing and fixed-cadence scheduling
//!
//! The game runs two interleaved callback chains on one thread: a
//! fixed-cadence simulation loop and a display-paced render loop. Each
//! chain owns a [`Clock`] for elapsed/delta bookkeeping; the simulation
//! chain additionally uses a [`Scheduler`] to turn irregular host polls
//! into a whole number of fixed-step ticks.

use crate::consts::MAX_POLL_DELTA_MS;
use serde::Serialize;

/// Timing readout for one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockSample {
    /// Milliseconds since the clock's first tick
    pub elapsed: f32,
    /// Milliseconds since the previous tick (0 on the first)
    pub delta: f32,
    /// Instantaneous rate in ticks per second (0 when delta is 0)
    pub rate: f32,
}

/// Wall-clock bookkeeping for one callback chain.
///
/// Holds the chain's start reference and previous-tick timestamp; `tick`
/// is fed the host's monotonic "now" in milliseconds.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Clock {
    start: Option<f32>,
    previous: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now` and report elapsed time, delta, and rate.
    pub fn tick(&mut self, now: f32) -> ClockSample {
        let start = match self.start {
            Some(start) => start,
            None => {
                self.start = Some(now);
                self.previous = now;
                now
            }
        };
        let delta = now - self.previous;
        self.previous = now;

        let rate = if delta > 0.0 { 1000.0 / delta } else { 0.0 };
        ClockSample {
            elapsed: now - start,
            delta,
            rate,
        }
    }

    /// Forget the start reference; the next tick re-anchors it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Accumulator turning irregular poll deltas into fixed-period ticks.
///
/// Best-effort cadence: late polls coalesce into several ticks, capped at
/// `max_catch_up` per poll so a long stall cannot snowball.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scheduler {
    period_ms: f32,
    max_catch_up: u32,
    accumulator: f32,
}

impl Scheduler {
    pub fn new(period_ms: f32, max_catch_up: u32) -> Self {
        Self {
            period_ms,
            max_catch_up,
            accumulator: 0.0,
        }
    }

    /// Feed one poll's delta; returns how many fixed ticks are due.
    pub fn advance(&mut self, delta_ms: f32) -> u32 {
        self.accumulator += delta_ms.clamp(0.0, MAX_POLL_DELTA_MS);

        let mut due = 0;
        while self.accumulator >= self.period_ms && due < self.max_catch_up {
            self.accumulator -= self.period_ms;
            due += 1;
        }
        if due == self.max_catch_up {
            // Drop the backlog instead of replaying it next poll.
            self.accumulator = self.accumulator.min(self.period_ms);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_first_tick_anchors_start() {
        let mut clock = Clock::new();
        let sample = clock.tick(500.0);
        assert_eq!(sample.elapsed, 0.0);
        assert_eq!(sample.delta, 0.0);
        assert_eq!(sample.rate, 0.0);
    }

    #[test]
    fn test_clock_delta_and_rate() {
        let mut clock = Clock::new();
        clock.tick(500.0);
        let sample = clock.tick(520.0);
        assert!((sample.elapsed - 20.0).abs() < 1e-4);
        assert!((sample.delta - 20.0).abs() < 1e-4);
        assert!((sample.rate - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_clock_reset_reanchors() {
        let mut clock = Clock::new();
        clock.tick(500.0);
        clock.tick(600.0);
        clock.reset();
        let sample = clock.tick(700.0);
        assert_eq!(sample.elapsed, 0.0);
        assert_eq!(sample.delta, 0.0);
    }

    #[test]
    fn test_scheduler_fixed_cadence() {
        let mut sched = Scheduler::new(10.0, 8);
        assert_eq!(sched.advance(25.0), 2);
        // 5 ms left over from the previous poll
        assert_eq!(sched.advance(5.0), 1);
        assert_eq!(sched.advance(3.0), 0);
    }

    #[test]
    fn test_scheduler_caps_catch_up() {
        let mut sched = Scheduler::new(10.0, 8);
        assert_eq!(sched.advance(95.0), 8);
        // backlog was dropped, not replayed
        assert!(sched.advance(0.0) <= 1);
    }

    #[test]
    fn test_scheduler_clamps_stall_delta() {
        let mut sched = Scheduler::new(10.0, 200);
        // a 10-second debugger pause is clamped, not replayed as 1000 ticks
        assert!(sched.advance(10_000.0) <= 10);
    }
}
