//! Pointer input dispatch.
//!
//! Split by event: `press`, `drag`, and `release` each match on the current
//! [`Mode`](state::Mode) and carry the gesture state forward.

pub mod state;

pub(crate) mod drag;
pub(crate) mod press;
pub(crate) mod release;

pub use state::{ConnectionGesture, Mode, SelectState, SelectionBox, Tool};
