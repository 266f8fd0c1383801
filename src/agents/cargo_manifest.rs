use crate::error::{BumpError, Result};
use crate::release::Version;
use crate::utils::fs::{read_document, write_document};
use crate::utils::toml::TomlUtils;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;

const PACKAGE_TABLE: &str = "package";
const VERSION_KEY: &str = "version";
const VERSION_FIELD: &str = "package.version";

/// Format-preserving handle on the backend `Cargo.toml`.
pub struct CargoManifest {
    path: PathBuf,
    doc: DocumentMut,
}

#[derive(Debug, Deserialize)]
struct ManifestVersion {
    package: PackageVersion,
}

#[derive(Debug, Deserialize)]
struct PackageVersion {
    version: String,
}

impl CargoManifest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read_document(&path)?;

        let doc = content
            .parse::<DocumentMut>()
            .map_err(|e| BumpError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw `package.version` string.
    pub fn version(&self) -> Result<&str> {
        TomlUtils::nested_str(&self.doc, PACKAGE_TABLE, VERSION_KEY).ok_or_else(|| {
            BumpError::MissingField {
                path: self.path.clone(),
                field: VERSION_FIELD,
            }
        })
    }

    pub fn set_version(&mut self, version: &Version) -> Result<()> {
        let replaced = TomlUtils::nested_item_mut(&mut self.doc, PACKAGE_TABLE, VERSION_KEY)
            .is_some_and(|item| TomlUtils::replace_str(item, &version.to_string()));

        if !replaced {
            return Err(BumpError::MissingField {
                path: self.path.clone(),
                field: VERSION_FIELD,
            });
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    pub fn save(&self) -> Result<()> {
        write_document(&self.path, &self.render())
    }

    /// Reads only `package.version` of the manifest at `path`.
    pub fn read_version<P: AsRef<Path>>(path: P) -> Result<String> {
        let content = read_document(path.as_ref())?;
        let manifest: ManifestVersion = toml::from_str(&content)?;
        Ok(manifest.package.version)
    }
}
