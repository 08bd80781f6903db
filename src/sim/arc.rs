//! Angular span intersection on the ring
//!
//! Cursors and notes are angular spans on one circle. Overlap testing has
//! to survive the 0/2π seam: a cursor straddling angle 0 still has to
//! match a note parked at 6.2 rad. Bounds are normalized per-span and the
//! seam is handled by re-testing each span's end shifted down a full turn.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::normalize_angle;

/// The overlapping angular range of two spans.
///
/// `start` can be negative when the overlap straddles the 0/2π seam;
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcOverlap {
    pub start: f32,
    pub end: f32,
}

/// Normalize a span's bounds into [0, 2π), then restore ordering when the
/// span wraps: a wrapped span is represented as [start - 2π, end].
fn normalize_span(start: f32, end: f32) -> (f32, f32) {
    let start = normalize_angle(start);
    let end = normalize_angle(end);
    if start > end { (start - TAU, end) } else { (start, end) }
}

/// Intersect two angular spans on the circle.
///
/// Bounds may be any real radians: negative, beyond 2π, or degenerate
/// (`start == end` is a point). Boundaries are inclusive, so touching
/// spans intersect. Four cases are tried in priority order - each span's
/// end inside the other span directly, then each end shifted by -2π to
/// catch overlaps split by the seam. The first match defines the reported
/// range; overlap *existence* is symmetric in argument order.
pub fn arc_intersection(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> Option<ArcOverlap> {
    let (a_start, a_end) = normalize_span(a_start, a_end);
    let (b_start, b_end) = normalize_span(b_start, b_end);
    let a_end_slid = a_end - TAU;
    let b_end_slid = b_end - TAU;

    if b_start <= a_end && a_end <= b_end {
        Some(ArcOverlap { start: b_start, end: a_end })
    } else if a_start <= b_end && b_end <= a_end {
        Some(ArcOverlap { start: a_start, end: b_end })
    } else if b_start <= a_end_slid && a_end_slid <= b_end {
        Some(ArcOverlap { start: b_start, end: a_end_slid })
    } else if a_start <= b_end_slid && b_end_slid <= a_end {
        Some(ArcOverlap { start: a_start, end: b_end_slid })
    } else {
        None
    }
}
