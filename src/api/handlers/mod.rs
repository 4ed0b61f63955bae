//! Non-versioned handlers.

mod system;

pub use system::*;
