//! A single configuration layer and the shallow merge between layers

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One layer of configuration: defaults, project config or caller overrides.
///
/// Every field is optional; `None` means "this layer does not set the key".
/// Keys use camelCase on disk. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigLayer {
    pub template_dir: Option<PathBuf>,
    pub partials_dir: Option<PathBuf>,
    pub values_dir: Option<PathBuf>,
    pub values_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub extname: Option<String>,
    pub config_file: Option<PathBuf>,
    /// Walker ignore rules; `/pattern/` entries are regexes
    pub ignore: Option<Vec<String>>,
}

impl ConfigLayer {
    /// Overlay `higher` on top of `self`.
    ///
    /// Shallow and key-by-key: any key `higher` sets replaces this layer's
    /// value wholesale, lists included. An empty `valuesFile` counts as unset.
    pub fn merge(self, higher: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            template_dir: higher.template_dir.or(self.template_dir),
            partials_dir: higher.partials_dir.or(self.partials_dir),
            values_dir: higher.values_dir.or(self.values_dir),
            values_file: non_empty(higher.values_file).or(non_empty(self.values_file)),
            out_dir: higher.out_dir.or(self.out_dir),
            extname: higher.extname.or(self.extname),
            config_file: higher.config_file.or(self.config_file),
            ignore: higher.ignore.or(self.ignore),
        }
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_layer_wins_per_key() {
        let defaults = ConfigLayer {
            template_dir: Some("templates".into()),
            out_dir: Some("dist".into()),
            extname: Some(".hbs".into()),
            ..Default::default()
        };
        let project = ConfigLayer {
            template_dir: Some("project".into()),
            partials_dir: Some("project-partials".into()),
            extname: Some(".project".into()),
            ..Default::default()
        };
        let overrides = ConfigLayer {
            template_dir: Some("cli-override".into()),
            ..Default::default()
        };

        let merged = defaults.merge(project).merge(overrides);
        assert_eq!(merged.template_dir, Some("cli-override".into()));
        assert_eq!(merged.partials_dir, Some("project-partials".into()));
        assert_eq!(merged.out_dir, Some("dist".into()));
        assert_eq!(merged.extname.as_deref(), Some(".project"));
    }

    #[test]
    fn test_lists_are_replaced_not_merged() {
        let lower = ConfigLayer {
            ignore: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        };
        let higher = ConfigLayer {
            ignore: Some(vec!["c".into()]),
            ..Default::default()
        };
        assert_eq!(lower.merge(higher).ignore, Some(vec!["c".to_string()]));
    }

    #[test]
    fn test_empty_values_file_is_unset() {
        let lower = ConfigLayer {
            values_file: Some("config.yaml".into()),
            ..Default::default()
        };
        let higher = ConfigLayer {
            values_file: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(lower.merge(higher).values_file, Some("config.yaml".into()));
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let layer: ConfigLayer = serde_yaml::from_str(
            "templateDir: custom\noutDir: custom-out\nvaluesFile: prod.yaml\nignore: [\"/^_/\"]\nunknownKey: 1\n",
        )
        .unwrap();
        assert_eq!(layer.template_dir, Some("custom".into()));
        assert_eq!(layer.out_dir, Some("custom-out".into()));
        assert_eq!(layer.values_file, Some("prod.yaml".into()));
        assert_eq!(layer.ignore, Some(vec!["/^_/".to_string()]));
        assert!(layer.partials_dir.is_none());
    }
}
