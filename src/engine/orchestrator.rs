//! Render orchestration - coordinates partials, walk, path and content rendering

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use super::content::ContentRenderer;
use super::output::{FileSystemOutput, OutputService};
use super::partials::PartialRegistry;
use super::path::render_path;
use super::walker::{TemplateFileRef, walk};
use crate::config::RenderConfig;
use crate::error::Result;

/// What a completed render did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Partial names available to templates, sorted
    pub partials: Vec<String>,
    /// Output files in the order they were written
    pub written: Vec<PathBuf>,
}

/// Drives one render of a template directory
pub struct RenderOrchestrator {
    output: Arc<dyn OutputService>,
}

impl RenderOrchestrator {
    pub fn new(output: Arc<dyn OutputService>) -> Self {
        Self { output }
    }

    /// Render every template under `cfg.template_dir()` into `cfg.out_dir()`.
    ///
    /// Steps run strictly in order: register partials, walk the template
    /// tree, then for each file render its path, render its contents and
    /// write it. Files are processed one at a time in walk order, so when two
    /// templates render to the same output path the later one wins. The first
    /// failure aborts the run and files already written stay on disk.
    pub async fn render(&self, cfg: &RenderConfig) -> Result<RenderSummary> {
        let mut partials = PartialRegistry::new();
        partials
            .register_dir(cfg.partials_dir(), cfg.extname())
            .await?;
        debug!(count = partials.len(), "Registered partials");

        let files = walk(cfg.template_dir(), cfg.extname(), cfg.ignore()).await?;
        debug!(count = files.len(), "Discovered templates");

        let renderer = ContentRenderer::new(&partials)?;
        let mut written = Vec::with_capacity(files.len());

        for file in &files {
            let target = output_path(cfg, file);
            let content = renderer.render_file(&file.abs_path, cfg.view()).await?;
            self.output.write_file(&target, &content).await?;

            debug!(
                template = %file.rel_path,
                output = %target.display(),
                "Rendered template"
            );
            written.push(target);
        }

        info!(
            templates = files.len(),
            partials = partials.len(),
            out_dir = %cfg.out_dir().display(),
            "Render complete"
        );

        Ok(RenderSummary {
            partials: partials.names(),
            written,
        })
    }
}

impl Default for RenderOrchestrator {
    fn default() -> Self {
        Self::new(Arc::new(FileSystemOutput::new()))
    }
}

/// Output location for `file`: the rendered relative path under the output
/// directory, minus one trailing template extension
pub fn output_path(cfg: &RenderConfig, file: &TemplateFileRef) -> PathBuf {
    let rendered = render_path(&file.rel_path, cfg.view());
    let stripped = rendered
        .strip_suffix(cfg.extname())
        .unwrap_or(&rendered);
    cfg.out_dir().join(stripped)
}

/// Render `cfg` to the filesystem
pub async fn render_directory(cfg: &RenderConfig) -> Result<RenderSummary> {
    RenderOrchestrator::default().render(cfg).await
}
