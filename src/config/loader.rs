//! Loading of values files and project config files

use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use tokio::fs;
use tracing::{debug, warn};

use super::defaults::config_file_candidates;
use super::format::DataFormat;
use super::layer::ConfigLayer;
use crate::error::{Error, Result};
use crate::utils::resolve_path;

/// Load a YAML or JSON values file into a mapping.
///
/// An empty YAML document loads as an empty mapping. A document whose root
/// is not a mapping is rejected, since the view is built on top of it.
pub async fn load_values(path: &Path) -> Result<Map<String, JsonValue>> {
    let format = DataFormat::from_path(path);
    if !format.is_supported() {
        return Err(Error::unsupported_format(path));
    }

    let raw = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::values_load(path, "values file not found"),
        _ => Error::values_load(path, e.to_string()),
    })?;

    match format
        .parse::<JsonValue>(&raw)
        .map_err(|msg| Error::values_load(path, msg))?
    {
        None | Some(JsonValue::Null) => Ok(Map::new()),
        Some(JsonValue::Object(map)) => Ok(map),
        Some(other) => Err(Error::values_load(
            path,
            format!("expected a mapping at the document root, found {}", kind_of(&other)),
        )),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}

/// A project config file and the layer it defines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub path: PathBuf,
    pub layer: ConfigLayer,
}

/// Find and load the project config.
///
/// With `explicit`, only that file is considered (relative paths resolve
/// against `cwd`). Otherwise the fixed candidates are probed in order and the
/// first existing file wins. Returns `Ok(None)` when no file exists.
pub async fn load_project_config(
    cwd: &Path,
    explicit: Option<&Path>,
) -> Result<Option<ProjectConfig>> {
    let candidates = match explicit {
        Some(file) => vec![file.to_path_buf()],
        None => config_file_candidates(),
    };

    for candidate in candidates {
        let path = resolve_path(&candidate, cwd);
        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| Error::filesystem(&path, e))?;
        if !exists {
            if explicit.is_some() {
                warn!(path = %path.display(), "Config file not found, continuing without project config");
            }
            continue;
        }

        let format = DataFormat::from_path(&path);
        if !format.is_supported() {
            return Err(Error::unsupported_format(&path));
        }

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::project_config(&path, e.to_string()))?;
        let layer = format
            .parse::<ConfigLayer>(&raw)
            .map_err(|msg| Error::project_config(&path, msg))?
            .unwrap_or_default();

        debug!(path = %path.display(), "Loaded project config");
        return Ok(Some(ProjectConfig { path, layer }));
    }

    Ok(None)
}
