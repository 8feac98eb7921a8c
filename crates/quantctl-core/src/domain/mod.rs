//! Domain types produced by the supervisor.

mod lifecycle;

pub use lifecycle::{StartReport, StatusReport, StopReport, TrackedState};
