//! Shared helpers: terminal styling, progress display, stdio suppression

pub mod progress;
pub mod silence;
pub mod styling;

pub use progress::*;
pub use silence::*;
pub use styling::*;
