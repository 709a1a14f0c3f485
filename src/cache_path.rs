use std::{
    fmt::{Display, Formatter},
    path::{Component, Path},
};

use thiserror::Error;

pub const DEFAULT_ANCHOR: &str = "maven";

/// Prefix that turns a path below the anchor into one relative to the consuming test.
const RELATIVE_PREFIX: &str = "../../../";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CachePathError {
    #[error("Path {path} has no `{anchor}` component")]
    MissingAnchor { path: String, anchor: String },
    #[error("Path {path} does not end in <group>/<artifact>/<version>/<file> below `{anchor}`")]
    TooShort { path: String, anchor: String },
    #[error("Path {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// A `key=value` line mapping a versioned artifact to its jar inside the dependency cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePathEntry {
    pub group: String,
    pub artifact: String,
    pub version: String,
    /// Path from the anchor directory onwards, `/` separated.
    pub relative_path: String,
}

impl CachePathEntry {
    /// Parses `.../<anchor>/<group path>/<artifact>/<version>/<file>.jar`.
    ///
    /// The first component equal to `anchor` is used.
    pub fn from_jar_path(path: &Path, anchor: &str) -> Result<CachePathEntry, CachePathError> {
        let components = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .map(|name| {
                name.to_str()
                    .ok_or_else(|| CachePathError::NotUtf8(path.display().to_string()))
            })
            .collect::<Result<Vec<&str>, _>>()?;

        let start = components
            .iter()
            .position(|name| *name == anchor)
            .ok_or_else(|| CachePathError::MissingAnchor {
                path: path.display().to_string(),
                anchor: anchor.to_owned(),
            })?;

        // anchor, at least one group component, artifact, version, file
        let below = &components[start..];
        if below.len() < 5 {
            return Err(CachePathError::TooShort {
                path: path.display().to_string(),
                anchor: anchor.to_owned(),
            });
        }

        let version_index = below.len() - 2;
        Ok(CachePathEntry {
            group: below[1..version_index - 1].join("."),
            artifact: below[version_index - 1].to_owned(),
            version: below[version_index].to_owned(),
            relative_path: below.join("/"),
        })
    }

    pub fn key(&self) -> String {
        escape_colons(&format!(
            "{}:{}:{}",
            self.group, self.artifact, self.version
        ))
    }

    pub fn value(&self) -> String {
        format!("{RELATIVE_PREFIX}{}", self.relative_path)
    }
}

impl Display for CachePathEntry {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}

/// Java properties treat `:` as a key separator.
fn escape_colons(value: &str) -> String {
    value.replace(':', "\\:")
}
