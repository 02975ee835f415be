//! Breadth-first discovery of template files

use std::collections::VecDeque;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::utils::list_dir_sorted;

/// A template file found under the template root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFileRef {
    /// Absolute path of the file on disk
    pub abs_path: PathBuf,
    /// Path relative to the template root, joined with the platform separator.
    /// May still contain unrendered `${...}` placeholders.
    pub rel_path: String,
}

/// A rule that excludes a file or directory from the walk by its name
#[derive(Debug, Clone)]
pub enum IgnoreRule {
    /// Exact entry-name match
    Name(String),
    /// Unanchored regex search against the entry name
    Pattern(Regex),
}

impl IgnoreRule {
    /// Parse a rule from its configuration form.
    ///
    /// A rule wrapped in slashes (`/^_/`) is compiled as a regex; anything else
    /// is an exact name.
    pub fn parse(rule: &str) -> Result<Self> {
        match rule
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            Some(pattern) if !pattern.is_empty() => Regex::new(pattern)
                .map(Self::Pattern)
                .map_err(|source| Error::InvalidIgnorePattern {
                    pattern: pattern.to_string(),
                    source,
                }),
            _ => Ok(Self::Name(rule.to_string())),
        }
    }

    /// Whether this rule excludes an entry called `name`
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Name(exact) => exact == name,
            Self::Pattern(re) => re.is_match(name),
        }
    }
}

/// Whether `file_name` carries the template extension `ext`
pub(crate) fn has_template_ext(file_name: &str, ext: &str) -> bool {
    file_name.len() > ext.len() && file_name.ends_with(ext)
}

/// Walk `root` breadth-first and collect every file ending in `ext`.
///
/// Ignored entries are skipped before anything else happens to them, so an
/// ignored directory is never descended into. Entries within one directory
/// are visited in name order; files of one level are emitted before any file
/// of the next level. Any filesystem error aborts the walk.
pub async fn walk(root: &Path, ext: &str, ignore: &[IgnoreRule]) -> Result<Vec<TemplateFileRef>> {
    let mut results = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::from([String::new()]);

    while let Some(rel_dir) = queue.pop_front() {
        let abs_dir = if rel_dir.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&rel_dir)
        };

        for entry in list_dir_sorted(&abs_dir).await? {
            if ignore.iter().any(|rule| rule.matches(&entry.name)) {
                trace!(path = %entry.path.display(), "Ignoring entry");
                continue;
            }

            let rel_path = if rel_dir.is_empty() {
                entry.name.clone()
            } else {
                format!("{rel_dir}{MAIN_SEPARATOR}{}", entry.name)
            };

            if entry.is_dir {
                queue.push_back(rel_path);
            } else if has_template_ext(&entry.name, ext) {
                debug!(rel_path = %rel_path, "Discovered template");
                results.push(TemplateFileRef {
                    abs_path: entry.path,
                    rel_path,
                });
            }
        }
    }

    Ok(results)
}
