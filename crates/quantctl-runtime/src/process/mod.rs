//! Process lifecycle adapters: launching, inspecting and stopping.

mod launch;
pub mod shutdown;
pub mod table;

pub use launch::DetachedLauncher;
pub use shutdown::kill_pid;
