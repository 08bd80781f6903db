//! Pulse Ring native entry point
//!
//! Runs the game headless: the simulation loop on its fixed cadence and a
//! render-cadence loop that only reads state, both interleaved on one
//! thread. A scripted autopilot stands in for the gamepad so the demo
//! exercises real hits; a real host wires `PadFrame` to its device
//! polling and draws from `frame_view` instead of logging it.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use pulse_ring::clock::{Clock, Scheduler};
use pulse_ring::consts::{MAX_CATCH_UP_TICKS, SPAWN_LEAD_MS};
use pulse_ring::settings::Settings;
use pulse_ring::sim::{GameSession, PadFrame, tick};
use pulse_ring::view::frame_view;

/// How long the headless demo runs
const DEMO_MS: f32 = 3.0 * SPAWN_LEAD_MS + 2000.0;

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = seed_from_env_or_time();
    log::info!("pulse-ring demo starting (seed {seed})");

    let mut session = GameSession::new(seed, &settings);
    run_demo(&mut session, &settings);

    log::info!(
        "demo finished: score {}, missed {}",
        session.score,
        session.missed
    );
}

fn seed_from_env_or_time() -> u64 {
    if let Some(seed) = std::env::var("PULSE_RING_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
    {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Interleave the two callback chains until the demo window closes.
fn run_demo(session: &mut GameSession, settings: &Settings) {
    let origin = Instant::now();
    let mut sim_clock = Clock::new();
    let mut render_clock = Clock::new();
    let mut sim_scheduler = Scheduler::new(settings.sim_period_ms, MAX_CATCH_UP_TICKS);
    let mut render_scheduler = Scheduler::new(settings.render_period_ms, 1);

    let mut last_poll = 0.0;
    let mut sim_rate = 0.0;

    loop {
        let now = origin.elapsed().as_secs_f32() * 1000.0;
        if now >= DEMO_MS {
            break;
        }
        let delta = now - last_poll;
        last_poll = now;

        for _ in 0..sim_scheduler.advance(delta) {
            let sample = sim_clock.tick(now);
            sim_rate = sample.rate;
            let pad = autopilot(session);
            tick(session, Some(&pad), sample.elapsed);
        }

        if render_scheduler.advance(delta) > 0 {
            let sample = render_clock.tick(now);
            let frame = frame_view(session);
            if settings.show_rate {
                log::debug!(
                    "score {} missed {} | sim {:.0}/s render {:.0}/s | gamestamp {:.0} ms",
                    frame.score,
                    frame.missed,
                    sim_rate,
                    sample.rate,
                    frame.elapsed_ms,
                );
            }
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Stand-in pad: aim both sticks at the oldest note and squeeze both
/// triggers while its band crosses the ring, releasing in between so each
/// approach gets a fresh rising edge.
fn autopilot(session: &GameSession) -> PadFrame {
    let mut frame = PadFrame {
        axes: vec![0.0; 4],
        buttons: vec![false; 6],
    };
    if let Some(note) = session.notes.first() {
        let stick = Vec2::from_angle(note.angle);
        frame.axes.copy_from_slice(&[stick.x, stick.y, stick.x, stick.y]);
        let firing = note.collide_circle();
        frame.buttons[4] = firing;
        frame.buttons[5] = firing;
    }
    frame
}
