//! Resolution of the final render configuration

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::defaults::{DEFAULT_EXTNAME, DEFAULT_OUT_DIR, DEFAULT_PARTIALS_DIR, DEFAULT_TEMPLATE_DIR, defaults};
use super::env::{EnvSource, ProcessEnv};
use super::layer::ConfigLayer;
use super::loader::{load_project_config, load_values};
use super::view::build_view;
use super::RenderConfig;
use crate::engine::IgnoreRule;
use crate::error::{Error, Result};
use crate::utils::resolve_path;

/// Resolve `overrides` against defaults and the project config found from
/// `cwd`, using the process environment for the view
pub async fn resolve(overrides: ConfigLayer, cwd: &Path) -> Result<RenderConfig> {
    resolve_with_env(overrides, cwd, &ProcessEnv).await
}

/// [`resolve`] with an explicit environment source
pub async fn resolve_with_env(
    overrides: ConfigLayer,
    cwd: &Path,
    env: &dyn EnvSource,
) -> Result<RenderConfig> {
    let merged = merge_layers(overrides, cwd).await?;

    let values_path = determine_values_path(&merged, cwd).await?;
    debug!(path = %values_path.display(), "Loading values");
    let values = load_values(&values_path).await?;

    let ignore = merged
        .ignore
        .unwrap_or_default()
        .iter()
        .map(|rule| IgnoreRule::parse(rule))
        .collect::<Result<Vec<_>>>()?;

    let dir = |value: Option<PathBuf>, fallback: &str| {
        resolve_path(value.unwrap_or_else(|| PathBuf::from(fallback)), cwd)
    };

    let config = RenderConfig::new(
        dir(merged.template_dir, DEFAULT_TEMPLATE_DIR),
        dir(merged.partials_dir, DEFAULT_PARTIALS_DIR),
        dir(merged.out_dir, DEFAULT_OUT_DIR),
        merged.extname.unwrap_or_else(|| DEFAULT_EXTNAME.to_string()),
        build_view(values, env),
    )
    .with_ignore(ignore);

    info!(
        template_dir = %config.template_dir().display(),
        out_dir = %config.out_dir().display(),
        values = %values_path.display(),
        "Resolved configuration"
    );
    Ok(config)
}

/// Merge defaults, the project config and `overrides`, in that order
pub async fn merge_layers(overrides: ConfigLayer, cwd: &Path) -> Result<ConfigLayer> {
    let project = load_project_config(cwd, overrides.config_file.as_deref()).await?;
    let project_layer = project.map(|p| p.layer).unwrap_or_default();
    Ok(defaults().merge(project_layer).merge(overrides))
}

/// Decide which values file to load.
///
/// An absolute `valuesFile` is used as-is. A relative one is looked up under
/// the values directory first and falls back to `cwd` when it is not there.
/// Without any `valuesFile` the run fails before touching the filesystem.
pub async fn determine_values_path(merged: &ConfigLayer, cwd: &Path) -> Result<PathBuf> {
    let file = merged
        .values_file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(Error::missing_values_source)?;

    if file.is_absolute() {
        return Ok(file.to_path_buf());
    }

    if let Some(values_dir) = merged.values_dir.as_deref() {
        let candidate = resolve_path(values_dir, cwd).join(file);
        let exists = fs::try_exists(&candidate)
            .await
            .map_err(|e| Error::filesystem(&candidate, e))?;
        if exists {
            return Ok(candidate);
        }
    }

    Ok(cwd.join(file))
}
