//! Handlebars adapter for file contents

use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value as JsonValue;

use super::partials::PartialRegistry;
use crate::error::{Error, Result};
use crate::utils::read_to_string;

/// Renders template contents with one run's partials registered
pub struct ContentRenderer {
    handlebars: Handlebars<'static>,
}

impl ContentRenderer {
    /// Build a renderer with every partial in `partials` registered by name
    pub fn new(partials: &PartialRegistry) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        for entry in partials.iter() {
            handlebars
                .register_partial(entry.name, entry.content)
                .map_err(|e| Error::template(entry.name, e.to_string()))?;
        }
        Ok(Self { handlebars })
    }

    /// Render a template source string. `origin` only labels errors.
    pub fn render_str(&self, source: &str, view: &JsonValue, origin: &Path) -> Result<String> {
        self.handlebars
            .render_template(source, view)
            .map_err(|e| Error::render(origin, e.to_string()))
    }

    /// Read the template at `path` and render it
    pub async fn render_file(&self, path: &Path, view: &JsonValue) -> Result<String> {
        let source = read_to_string(path).await?;
        self.render_str(&source, view, path)
    }
}
