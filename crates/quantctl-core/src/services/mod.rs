//! Services composing ports into the supervisor's use cases.

mod supervisor;

pub use supervisor::{Supervisor, SupervisorPorts};
