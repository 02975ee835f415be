//! Built-in configuration defaults, the lowest layer of the merge

use std::path::PathBuf;

use super::ConfigLayer;

/// Project name used to build the config-file candidates
pub const PROJECT_NAME: &str = "tmplkit";

pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_PARTIALS_DIR: &str = "templates.partials";
pub const DEFAULT_VALUES_DIR: &str = "templates.values";
pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_EXTNAME: &str = ".hbs";

/// Project config candidates, relative to the working directory, in probe order
pub fn config_file_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(format!("{PROJECT_NAME}.config.yaml")),
        PathBuf::from(format!("{PROJECT_NAME}.config.yml")),
        PathBuf::from(format!("{PROJECT_NAME}.config.json")),
        PathBuf::from("config").join(format!("{PROJECT_NAME}.yaml")),
        PathBuf::from("config").join(format!("{PROJECT_NAME}.json")),
    ]
}

/// The defaults layer. `valuesFile` has no default.
pub fn defaults() -> ConfigLayer {
    ConfigLayer {
        template_dir: Some(PathBuf::from(DEFAULT_TEMPLATE_DIR)),
        partials_dir: Some(PathBuf::from(DEFAULT_PARTIALS_DIR)),
        values_dir: Some(PathBuf::from(DEFAULT_VALUES_DIR)),
        values_file: None,
        out_dir: Some(PathBuf::from(DEFAULT_OUT_DIR)),
        extname: Some(DEFAULT_EXTNAME.to_string()),
        config_file: None,
        ignore: Some(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layer = defaults();
        assert_eq!(layer.template_dir, Some(PathBuf::from("templates")));
        assert_eq!(layer.partials_dir, Some(PathBuf::from("templates.partials")));
        assert_eq!(layer.values_dir, Some(PathBuf::from("templates.values")));
        assert_eq!(layer.out_dir, Some(PathBuf::from("dist")));
        assert_eq!(layer.extname.as_deref(), Some(".hbs"));
        assert!(layer.values_file.is_none());
        assert!(layer.config_file.is_none());
        assert_eq!(layer.ignore, Some(vec![]));
    }

    #[test]
    fn test_config_file_candidates_order() {
        let candidates = config_file_candidates();
        assert_eq!(candidates[0], PathBuf::from("tmplkit.config.yaml"));
        assert_eq!(candidates[1], PathBuf::from("tmplkit.config.yml"));
        assert_eq!(candidates[2], PathBuf::from("tmplkit.config.json"));
        assert_eq!(candidates[3], PathBuf::from("config").join("tmplkit.yaml"));
        assert_eq!(candidates[4], PathBuf::from("config").join("tmplkit.json"));
    }
}
