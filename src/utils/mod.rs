//! Small helpers shared by the config and engine layers

pub mod fs;
pub mod object;

pub use fs::*;
pub use object::*;
