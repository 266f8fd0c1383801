use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version type. Must be major, minor, or patch.")]
    InvalidVersionKind(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("'{}' has no string field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Invalid version '{0}'. Expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("Version mismatch after update: {tauri_conf} in tauri.conf.json, {cargo_toml} in Cargo.toml")]
    VersionMismatch {
        tauri_conf: String,
        cargo_toml: String,
    },

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BumpError {
    /// Errors reported to the user verbatim rather than as unexpected failures.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            BumpError::InvalidVersionKind(_) | BumpError::FileNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BumpError>;
