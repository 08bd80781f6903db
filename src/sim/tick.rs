//! Fixed timestep simulation tick
//!
//! One tick runs a fixed sweep order over the session. Each sweep only
//! sees the notes the previous one left behind, so a note can never be
//! scored twice, or scored and then missed, within the same tick.

use super::collide::{collide, cursor_overlap};
use super::input::PadFrame;
use super::note::Affinity;
use super::state::GameSession;

/// Advance the session to session time `now_ms` (milliseconds since the
/// simulation clock's start).
///
/// Sweep order: note lifecycle, cursor/trigger sampling, left-edge hits,
/// right-edge hits, Both hits, miss removal, respawn-when-empty. With no
/// pad connected the hit sweeps are inert and notes age into misses.
pub fn tick(session: &mut GameSession, pad: Option<&PadFrame>, now_ms: f32) {
    session.elapsed_ms = now_ms;

    // 1. lifecycle: geometry is a pure function of session time
    for note in &mut session.notes {
        note.update(now_ms);
    }

    // 2. cursors and trigger edges
    let events = session.input.sample(pad);
    let left = session.input.left;
    let right = session.input.right;

    // 3. left-cursor rising-edge hits (Left and Any notes)
    if events.left_edge {
        let before = session.notes.len();
        session.notes.retain(|note| {
            !(matches!(note.affinity, Affinity::Left | Affinity::Any)
                && note.collide_circle()
                && cursor_overlap(&left, note))
        });
        session.score += (before - session.notes.len()) as u64;
    }

    // 4. right-cursor rising-edge hits (Right and Any notes)
    if events.right_edge {
        let before = session.notes.len();
        session.notes.retain(|note| {
            !(matches!(note.affinity, Affinity::Right | Affinity::Any)
                && note.collide_circle()
                && cursor_overlap(&right, note))
        });
        session.score += (before - session.notes.len()) as u64;
    }

    // 5. Both notes: fresh press on one side while the other is down,
    //    plus the full two-cursor geometric overlap
    if events.both_trigger() {
        let before = session.notes.len();
        session.notes.retain(|note| {
            !(note.affinity == Affinity::Both && collide(note, &left, &right))
        });
        session.score += (before - session.notes.len()) as u64;
    }

    // 6. miss sweep
    let before = session.notes.len();
    session.notes.retain(|note| !note.missed());
    session.missed += (before - session.notes.len()) as u64;

    // 7. keep the field populated
    if session.notes.is_empty() {
        session.spawn_replacement(now_ms);
    }
}
