//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Geometry as a pure function of session time
//! - No rendering or device dependencies

pub mod arc;
pub mod collide;
pub mod input;
pub mod note;
pub mod state;
pub mod tick;

pub use arc::{ArcOverlap, arc_intersection};
pub use collide::{collide, cursor_overlap};
pub use input::{CursorState, HitEvents, InputTracker, PadFrame};
pub use note::{Affinity, InvalidNote, Note};
pub use state::GameSession;
pub use tick::tick;
