//! Configuration resolution.
//!
//! Three layers are merged shallowly, key by key, with later layers winning:
//!
//! 1. built-in [`defaults`](defaults::defaults)
//! 2. the project config file (`tmplkit.config.yaml` and friends)
//! 3. caller overrides, usually the CLI flags
//!
//! The merged layer then locates the values file, and [`resolve`] produces an
//! immutable [`RenderConfig`] whose paths are all absolute.

pub mod defaults;
pub mod env;
pub mod format;
pub mod layer;
pub mod loader;
pub mod resolver;
pub mod view;

pub use defaults::*;
pub use env::*;
pub use format::*;
pub use layer::*;
pub use loader::*;
pub use resolver::*;
pub use view::*;

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::engine::IgnoreRule;

/// Everything a render needs, resolved once and read-only afterwards
#[derive(Debug, Clone)]
pub struct RenderConfig {
    template_dir: PathBuf,
    partials_dir: PathBuf,
    out_dir: PathBuf,
    extname: String,
    view: JsonValue,
    ignore: Vec<IgnoreRule>,
}

impl RenderConfig {
    /// Build a config directly. Paths must already be absolute; nothing
    /// downstream resolves them again.
    pub fn new(
        template_dir: impl Into<PathBuf>,
        partials_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        extname: impl Into<String>,
        view: JsonValue,
    ) -> Self {
        Self {
            template_dir: template_dir.into(),
            partials_dir: partials_dir.into(),
            out_dir: out_dir.into(),
            extname: extname.into(),
            view,
            ignore: Vec::new(),
        }
    }

    /// Replace the walker ignore rules
    pub fn with_ignore(mut self, ignore: Vec<IgnoreRule>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn partials_dir(&self) -> &Path {
        &self.partials_dir
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn extname(&self) -> &str {
        &self.extname
    }

    pub fn view(&self) -> &JsonValue {
        &self.view
    }

    pub fn ignore(&self) -> &[IgnoreRule] {
        &self.ignore
    }
}
