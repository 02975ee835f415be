//! tmplkit renders a directory of Handlebars templates into an output
//! directory.
//!
//! Paths may carry `${dot.path}` placeholders that are resolved against the
//! same view as file contents, and partials are discovered from a partials
//! directory (`_name.hbs` at the root, `@group/name.hbs` for namespaced ones).
//!
//! ```no_run
//! use tmplkit::config::{ConfigLayer, resolve};
//! use tmplkit::engine::render_directory;
//!
//! # async fn run() -> tmplkit::Result<()> {
//! let cwd = std::env::current_dir().map_err(|e| tmplkit::Error::filesystem(".", e))?;
//! let overrides = ConfigLayer {
//!     values_file: Some("values.yaml".into()),
//!     ..Default::default()
//! };
//! let config = resolve(overrides, &cwd).await?;
//! let summary = render_directory(&config).await?;
//! println!("wrote {} files", summary.written.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod utils;

pub use config::{ConfigLayer, RenderConfig, resolve};
pub use engine::{RenderSummary, render_directory};
pub use error::{Error, Result};
