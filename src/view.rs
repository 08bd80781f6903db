//! Read-only render projection
//!
//! The render loop runs on display cadence, interleaved with (never
//! concurrent to) simulation ticks, and must not mutate session state.
//! That discipline is enforced here by construction: the projection
//! borrows the session immutably and copies out everything a renderer
//! draws in one frame.

use serde::Serialize;

use crate::sim::arc::{ArcOverlap, arc_intersection};
use crate::sim::collide::collide;
use crate::sim::note::Affinity;
use crate::sim::state::GameSession;

/// One note as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteView {
    pub angle_start: f32,
    pub angle_end: f32,
    pub radius: f32,
    pub thickness: f32,
    /// Color category
    pub affinity: Affinity,
    /// Whether the note is currently hittable by the cursors as aimed
    pub colliding: bool,
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub notes: Vec<NoteView>,
    pub left_cursor_angle: f32,
    pub right_cursor_angle: f32,
    /// Highlighted arc where the two cursors overlap, if they do
    pub cursor_overlap: Option<ArcOverlap>,
    pub score: u64,
    pub missed: u64,
    pub elapsed_ms: f32,
}

/// Project the session into one frame's worth of drawable state.
pub fn frame_view(session: &GameSession) -> FrameView {
    let left = &session.input.left;
    let right = &session.input.right;

    let notes = session
        .notes
        .iter()
        .map(|note| NoteView {
            angle_start: note.angle_start(),
            angle_end: note.angle_end(),
            radius: note.radius,
            thickness: note.thickness,
            affinity: note.affinity,
            colliding: collide(note, left, right),
        })
        .collect();

    let (left_start, left_end) = left.span();
    let (right_start, right_end) = right.span();

    FrameView {
        notes,
        left_cursor_angle: left.angle,
        right_cursor_angle: right.angle,
        cursor_overlap: arc_intersection(left_start, left_end, right_start, right_end),
        score: session.score,
        missed: session.missed,
        elapsed_ms: session.elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick;
    use std::f32::consts::{FRAC_PI_8, PI};

    #[test]
    fn test_frame_reflects_note_geometry() {
        let mut session = GameSession::new(1, &Settings::default());
        tick(&mut session, None, 2000.0);

        let frame = frame_view(&session);
        assert_eq!(frame.notes.len(), 1);
        let note = &frame.notes[0];
        assert!((note.angle_start + FRAC_PI_8 / 2.0).abs() < 1e-6);
        assert!((note.angle_end - FRAC_PI_8 / 2.0).abs() < 1e-6);
        assert!((note.radius - 300.0).abs() < 1e-2);
        assert_eq!(frame.score, 0);
        assert_eq!(frame.elapsed_ms, 2000.0);
    }

    #[test]
    fn test_colliding_flag_tracks_cursor_aim() {
        let mut session = GameSession::new(1, &Settings::default());
        tick(&mut session, None, 2000.0);

        // cursors rest at angle 0, right on the seed note
        assert!(frame_view(&session).notes[0].colliding);

        session.input.left.angle = PI;
        session.input.right.angle = PI;
        assert!(!frame_view(&session).notes[0].colliding);
    }

    #[test]
    fn test_cursor_overlap_arc() {
        let mut session = GameSession::new(1, &Settings::default());
        // co-located cursors overlap; opposed cursors do not
        assert!(frame_view(&session).cursor_overlap.is_some());
        session.input.right.angle = PI;
        assert!(frame_view(&session).cursor_overlap.is_none());
    }

    #[test]
    fn test_frame_serializes_for_host_renderers() {
        let session = GameSession::new(1, &Settings::default());
        let json = serde_json::to_string(&frame_view(&session)).unwrap();
        assert!(json.contains("\"notes\""));
        assert!(json.contains("\"score\""));
    }
}
