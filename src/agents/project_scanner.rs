use crate::error::Result;
use crate::utils::path_validator::PathValidator;
use std::path::{Component, Path, PathBuf};

/// Tauri configuration holding the app version, relative to the project root.
pub const TAURI_CONF_PATH: &str = "tauri-app/src-tauri/tauri.conf.json";
/// Rust manifest of the Tauri backend, relative to the project root.
pub const CARGO_TOML_PATH: &str = "tauri-app/src-tauri/Cargo.toml";

/// ProjectScannerAgent locates the two version-bearing documents
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Validates the project layout before anything is read or written
    pub fn validate(&self) -> Result<ProjectInfo> {
        let root = PathValidator::validate_project_root(&self.project_path)?;

        let tauri_conf_path = PathValidator::require_file(locate(&root, TAURI_CONF_PATH))?;
        let cargo_toml_path = PathValidator::require_file(locate(&root, CARGO_TOML_PATH))?;

        Ok(ProjectInfo {
            tauri_conf_path,
            cargo_toml_path,
        })
    }
}

/// Joins `relative` onto `root`, leaving it bare when the root is the current directory
/// so reported paths read `tauri-app/...` rather than `./tauri-app/...`.
fn locate(root: &Path, relative: &str) -> PathBuf {
    if root.components().all(|c| c == Component::CurDir) {
        PathBuf::from(relative)
    } else {
        root.join(relative)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub tauri_conf_path: PathBuf,
    pub cargo_toml_path: PathBuf,
}
