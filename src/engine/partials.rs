//! Partials registration from a two-level partials directory.
//!
//! The layout is flat by convention:
//!
//! ```text
//! partials/
//! ├── _header.hbs        -> "header"
//! ├── notes.txt          (ignored)
//! ├── @ui/
//! │   ├── alert.hbs      -> "ui.alert"
//! │   └── README.md      (ignored)
//! └── misc/              (ignored, no recursion)
//! ```
//!
//! The registry is owned by the caller and handed to the content engine, so
//! two renders in one process never see each other's partials.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::{list_dir_sorted, read_to_string};

/// Prefix marking a root-level partial file
pub const ROOT_PARTIAL_PREFIX: char = '_';

/// Prefix marking a namespace group directory
pub const GROUP_PREFIX: char = '@';

/// A named fragment as it will be registered with the content engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialEntry<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Symbol table of partials for one render
#[derive(Debug, Clone, Default)]
pub struct PartialRegistry {
    entries: BTreeMap<String, String>,
}

impl PartialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `name`; a later registration of the same name wins
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        if self.entries.insert(name.clone(), content.into()).is_some() {
            warn!(partial = %name, "Partial registered twice, keeping the later one");
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = PartialEntry<'_>> {
        self.entries.iter().map(|(name, content)| PartialEntry {
            name: name.as_str(),
            content: content.as_str(),
        })
    }

    /// Scan the immediate children of `dir` and register every partial found.
    ///
    /// Root files named `_<name><ext>` register as `<name>`. Directories named
    /// `@<group>` register each immediate child file `<name><ext>` as
    /// `<group>.<name>`. Everything else is skipped without error. Returns the
    /// number of partials registered by this call.
    pub async fn register_dir(&mut self, dir: &Path, ext: &str) -> Result<usize> {
        let mut registered = 0;

        for entry in list_dir_sorted(dir).await? {
            if entry.is_dir {
                let Some(group) = entry.name.strip_prefix(GROUP_PREFIX) else {
                    debug!(dir = %entry.path.display(), "Skipping non-group directory");
                    continue;
                };
                registered += self.register_group(group, &entry.path, ext).await?;
                continue;
            }

            let Some(name) = entry
                .name
                .strip_prefix(ROOT_PARTIAL_PREFIX)
                .and_then(|rest| rest.strip_suffix(ext))
                .filter(|name| !name.is_empty())
            else {
                continue;
            };

            let content = read_to_string(&entry.path).await?;
            debug!(partial = %name, "Registered root partial");
            self.insert(name, content);
            registered += 1;
        }

        Ok(registered)
    }

    async fn register_group(&mut self, group: &str, dir: &Path, ext: &str) -> Result<usize> {
        let mut registered = 0;

        for entry in list_dir_sorted(dir).await? {
            if entry.is_dir {
                continue;
            }
            let Some(key) = entry
                .name
                .strip_suffix(ext)
                .filter(|key| !key.is_empty())
            else {
                continue;
            };

            let name = format!("{group}.{key}");
            let content = read_to_string(&entry.path).await?;
            debug!(partial = %name, "Registered group partial");
            self.insert(name, content);
            registered += 1;
        }

        Ok(registered)
    }
}

/// Build a fresh registry from `dir`
pub async fn register_partials(dir: &Path, ext: &str) -> Result<PartialRegistry> {
    let mut registry = PartialRegistry::new();
    registry.register_dir(dir, ext).await?;
    Ok(registry)
}
