//! Error handling for the tmplkit rendering library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant is fatal for the
//! run that produced it: nothing in the library retries or skips a file.
//!
//! # Examples
//!
//! ```
//! use tmplkit::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::missing_values_source())
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for tmplkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tmplkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// No values file could be determined from overrides or project config
    #[error(
        "Missing required configuration: valuesFile. Use --values <file> or set `valuesFile` in tmplkit.config.yaml"
    )]
    MissingValuesSource,

    /// Values or project-config file with an extension we cannot parse
    #[error("Unsupported values file format '{extension}': {}", path.display())]
    UnsupportedValuesFormat { path: PathBuf, extension: String },

    /// Values file missing, unreadable or malformed
    #[error("Failed to load values file {}: {message}", path.display())]
    ValuesLoad { path: PathBuf, message: String },

    /// Project config file unreadable or malformed
    #[error("Failed to load project config {}: {message}", path.display())]
    ProjectConfig { path: PathBuf, message: String },

    /// Ignore rule written as `/pattern/` that is not a valid regex
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Filesystem failure while walking, reading or writing
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template or partial that the content engine refused to compile
    #[error("Template error in '{name}': {message}")]
    Template { name: String, message: String },

    /// Content engine failure while rendering a template file
    #[error("Failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl Error {
    /// Create a new missing values source error
    pub fn missing_values_source() -> Self {
        Self::MissingValuesSource
    }

    /// Create a new unsupported format error for `path`
    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        Self::UnsupportedValuesFormat {
            path: path.to_path_buf(),
            extension,
        }
    }

    /// Create a new values load error
    pub fn values_load<S: Into<String>>(path: impl AsRef<Path>, msg: S) -> Self {
        Self::ValuesLoad {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Create a new project config error
    pub fn project_config<S: Into<String>>(path: impl AsRef<Path>, msg: S) -> Self {
        Self::ProjectConfig {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new template compile error
    pub fn template<N: Into<String>, S: Into<String>>(name: N, msg: S) -> Self {
        Self::Template {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(path: impl AsRef<Path>, msg: S) -> Self {
        Self::Render {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_values_source_names_flag_and_key() {
        let error = Error::missing_values_source();
        let msg = error.to_string();
        assert!(msg.contains("--values"));
        assert!(msg.contains("valuesFile"));
    }

    #[test]
    fn test_unsupported_format_names_extension() {
        let error = Error::unsupported_format("/tmp/values.txt");
        assert!(matches!(
            &error,
            Error::UnsupportedValuesFormat { extension, .. } if extension == ".txt"
        ));
        assert!(error.to_string().contains(".txt"));
    }

    #[test]
    fn test_unsupported_format_without_extension() {
        let error = Error::unsupported_format("/tmp/values");
        assert!(matches!(
            error,
            Error::UnsupportedValuesFormat { ref extension, .. } if extension.is_empty()
        ));
    }

    #[test]
    fn test_values_load_wraps_message() {
        let error = Error::values_load("/tmp/values.yaml", "did not find expected node content");
        assert!(matches!(error, Error::ValuesLoad { .. }));
        assert_eq!(
            error.to_string(),
            "Failed to load values file /tmp/values.yaml: did not find expected node content"
        );
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::filesystem("/tmp/missing", io_error);
        assert!(error.to_string().contains("/tmp/missing"));
        assert!(error.to_string().contains("File not found"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_debug_display() {
        let error = Error::template("ui.alert", "unclosed expression");
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Template"));
        assert!(debug_str.contains("ui.alert"));
    }
}
