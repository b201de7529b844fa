//! Vhost directory validation

mod gate;

pub use gate::{DirGate, GateOutcome};
