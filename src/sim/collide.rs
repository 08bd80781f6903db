//! Hit resolution
//!
//! A hit needs two things at once: the note's band straddling the ring
//! radius (timing) and the demanded cursor(s) overlapping the note's
//! angle (aim). Everything here is stateless over the current geometry.

use super::arc::arc_intersection;
use super::input::CursorState;
use super::note::{Affinity, Note};

/// Whether `cursor` currently covers the note's center angle.
///
/// The note side is a degenerate point span, matching how the note's
/// center - not its full width - is what must be under the cursor.
pub fn cursor_overlap(cursor: &CursorState, note: &Note) -> bool {
    let (start, end) = cursor.span();
    arc_intersection(start, end, note.angle, note.angle).is_some()
}

/// Full geometric hit check for a note against both cursors.
///
/// Resolves the note's affinity: Left/Right demand their cursor, Any takes
/// either, Both demands both overlaps in this same evaluation - one cursor
/// alone never satisfies Both.
pub fn collide(note: &Note, left: &CursorState, right: &CursorState) -> bool {
    if !note.collide_circle() {
        return false;
    }
    let left_hit = note.affinity.wants_left() && cursor_overlap(left, note);
    let right_hit = note.affinity.wants_right() && cursor_overlap(right, note);

    match note.affinity {
        Affinity::Left => left_hit,
        Affinity::Right => right_hit,
        Affinity::Any => left_hit || right_hit,
        Affinity::Both => left_hit && right_hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CURSOR_HALF_WIDTH;
    use std::f32::consts::{FRAC_PI_4, PI, TAU};

    /// A note of the given affinity frozen at its perfect moment (band on
    /// the ring), centered at `angle`.
    fn ring_note(angle: f32, affinity: Affinity) -> Note {
        let mut note = Note::new(2000.0, 1000.0, angle, FRAC_PI_4, affinity).unwrap();
        note.update(2000.0);
        assert!(note.collide_circle());
        note
    }

    fn cursor_at(angle: f32) -> CursorState {
        let mut cursor = CursorState::new(CURSOR_HALF_WIDTH);
        cursor.angle = angle;
        cursor
    }

    #[test]
    fn test_circle_band_gates_everything() {
        let mut note = ring_note(0.0, Affinity::Any);
        // rewind to before the band reaches the ring
        note.update(1600.0);
        assert!(!collide(&note, &cursor_at(0.0), &cursor_at(0.0)));
    }

    #[test]
    fn test_left_affinity_ignores_right_cursor() {
        let note = ring_note(0.0, Affinity::Left);
        assert!(collide(&note, &cursor_at(0.0), &cursor_at(PI)));
        assert!(!collide(&note, &cursor_at(PI), &cursor_at(0.0)));
    }

    #[test]
    fn test_right_affinity_ignores_left_cursor() {
        let note = ring_note(0.0, Affinity::Right);
        assert!(collide(&note, &cursor_at(PI), &cursor_at(0.0)));
        assert!(!collide(&note, &cursor_at(0.0), &cursor_at(PI)));
    }

    #[test]
    fn test_any_takes_either_cursor() {
        let note = ring_note(0.0, Affinity::Any);
        assert!(collide(&note, &cursor_at(0.0), &cursor_at(PI)));
        assert!(collide(&note, &cursor_at(PI), &cursor_at(0.0)));
        assert!(!collide(&note, &cursor_at(PI), &cursor_at(PI)));
    }

    #[test]
    fn test_both_demands_both_cursors() {
        let note = ring_note(0.0, Affinity::Both);
        assert!(collide(&note, &cursor_at(0.0), &cursor_at(0.0)));
        assert!(!collide(&note, &cursor_at(0.0), &cursor_at(PI)));
        assert!(!collide(&note, &cursor_at(PI), &cursor_at(0.0)));
    }

    #[test]
    fn test_overlap_across_seam() {
        // note parked just below 2π, cursor centered at 0
        let note = ring_note(TAU - 0.1, Affinity::Any);
        assert!(collide(&note, &cursor_at(0.0), &cursor_at(PI)));
    }

    #[test]
    fn test_cursor_edge_is_inclusive() {
        let note = ring_note(CURSOR_HALF_WIDTH, Affinity::Any);
        assert!(cursor_overlap(&cursor_at(0.0), &note));
    }
}
