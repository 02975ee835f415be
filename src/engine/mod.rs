//! Rendering engine - turns a template directory into an output directory
//!
//! The engine takes a resolved [`RenderConfig`](crate::config::RenderConfig)
//! and runs the pipeline: partial registration, template discovery, path
//! rendering, content rendering and output.

pub mod content;
pub mod orchestrator;
pub mod output;
pub mod partials;
pub mod path;
pub mod walker;

pub use content::*;
pub use orchestrator::*;
pub use output::*;
pub use partials::*;
pub use path::*;
pub use walker::*;
