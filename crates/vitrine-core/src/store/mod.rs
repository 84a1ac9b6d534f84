// ── Rotation state store ──
//
// A single immutable state record, a pure transition function, and the
// asynchronous synchronization routines that drive it.

mod rotation;
mod state;

pub use rotation::RotationStore;
pub use state::{apply, RotationEvent, RotationState};
