//! Data file formats for values and project config

use std::path::Path;

use serde::de::DeserializeOwned;

/// Format of a data file, decided once from its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
    /// Carries the offending extension, dot included (empty when none)
    Unsupported(String),
}

impl DataFormat {
    /// Classify `path` by extension, case-insensitively
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            Some(other) => Self::Unsupported(format!(".{other}")),
            None => Self::Unsupported(String::new()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Parse `raw` into `T`.
    ///
    /// An empty or whitespace-only YAML document yields `None`. On failure the
    /// parser's own message is returned.
    pub fn parse<T: DeserializeOwned>(&self, raw: &str) -> Result<Option<T>, String> {
        match self {
            Self::Yaml => {
                if raw.trim().is_empty() {
                    return Ok(None);
                }
                serde_yaml::from_str::<Option<T>>(raw).map_err(|e| e.to_string())
            }
            Self::Json => serde_json::from_str::<T>(raw)
                .map(Some)
                .map_err(|e| e.to_string()),
            Self::Unsupported(ext) => Err(format!("unsupported format '{ext}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, json};

    #[test]
    fn test_from_path_is_case_insensitive() {
        assert_eq!(DataFormat::from_path(Path::new("v.yaml")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("v.YML")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("v.Json")), DataFormat::Json);
        assert_eq!(
            DataFormat::from_path(Path::new("v.txt")),
            DataFormat::Unsupported(".txt".into())
        );
        assert_eq!(
            DataFormat::from_path(Path::new("values")),
            DataFormat::Unsupported(String::new())
        );
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml: JsonValue = DataFormat::Yaml
            .parse("key: value\nnumber: 42")
            .unwrap()
            .unwrap();
        assert_eq!(yaml, json!({ "key": "value", "number": 42 }));

        let json: JsonValue = DataFormat::Json
            .parse(r#"{"name": "json-app", "enabled": true}"#)
            .unwrap()
            .unwrap();
        assert_eq!(json, json!({ "name": "json-app", "enabled": true }));
    }

    #[test]
    fn test_parse_empty_yaml_is_none() {
        let parsed: Option<JsonValue> = DataFormat::Yaml.parse("  \n").unwrap();
        assert!(parsed.is_none());

        let null_doc: Option<JsonValue> = DataFormat::Yaml.parse("~").unwrap();
        assert!(null_doc.is_none());
    }

    #[test]
    fn test_parse_errors_carry_parser_message() {
        let err = DataFormat::Yaml.parse::<JsonValue>("key: [unclosed").unwrap_err();
        assert!(!err.is_empty());

        let err = DataFormat::Json.parse::<JsonValue>("{invalid json}").unwrap_err();
        assert!(err.contains("key must be a string"));
    }
}
