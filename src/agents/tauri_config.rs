use crate::error::{BumpError, Result};
use crate::release::Version;
use crate::utils::fs::{read_document, write_document};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const VERSION_KEY: &str = "version";

/// In-memory copy of `tauri.conf.json`. Key order is kept so that a rewrite only
/// differs from the file on disk in the `version` value and in whitespace.
pub struct TauriConfig {
    path: PathBuf,
    doc: Value,
    trailing_newline: bool,
}

/// Minimal typed view used to read the version back after a write.
#[derive(Debug, Deserialize)]
struct TauriConfigVersion {
    version: String,
}

impl TauriConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read_document(&path)?;

        let doc: Value = serde_json::from_str(&content).map_err(|e| BumpError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if !doc.is_object() {
            return Err(BumpError::Parse {
                path,
                message: "expected a JSON object at the top level".to_string(),
            });
        }

        Ok(Self {
            path,
            doc,
            trailing_newline: content.ends_with('\n'),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw top-level `version` string.
    pub fn version(&self) -> Result<&str> {
        self.doc
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| BumpError::MissingField {
                path: self.path.clone(),
                field: VERSION_KEY,
            })
    }

    pub fn set_version(&mut self, version: &Version) -> Result<()> {
        let slot = self
            .doc
            .get_mut(VERSION_KEY)
            .filter(|v| v.is_string())
            .ok_or_else(|| BumpError::MissingField {
                path: self.path.clone(),
                field: VERSION_KEY,
            })?;

        *slot = Value::String(version.to_string());
        Ok(())
    }

    /// Pretty JSON with two-space indentation.
    pub fn render(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.doc)?;
        if self.trailing_newline {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    pub fn save(&self) -> Result<()> {
        write_document(&self.path, &self.render()?)
    }

    /// Reads only the `version` field of the file at `path`.
    pub fn read_version<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = read_document(path.as_ref())?;
        let view: TauriConfigVersion = serde_json::from_str(&content)?;
        Ok(view.version)
    }
}
