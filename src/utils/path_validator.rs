use crate::error::{BumpError, Result};
use std::path::{Path, PathBuf};

pub struct PathValidator;

impl PathValidator {
    /// Checks that the project root is an existing directory. The path is returned as
    /// given so that reported file paths stay relative to what the user typed.
    pub fn validate_project_root(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let metadata = path.metadata().map_err(|e| {
            BumpError::ProjectValidation(format!("Invalid path '{}': {e}", path.display()))
        })?;

        if !metadata.is_dir() {
            return Err(BumpError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                path.display()
            )));
        }

        Ok(path.to_path_buf())
    }

    /// Returns the file path if it exists as a regular file.
    pub fn require_file(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(BumpError::FileNotFound(path.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_directory() {
        let dir = tempdir().unwrap();
        let root = PathValidator::validate_project_root(dir.path()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "test").unwrap();
        let err = PathValidator::validate_project_root(&file_path).unwrap_err();
        assert!(matches!(err, BumpError::ProjectValidation(_)));
    }

    #[test]
    fn rejects_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(PathValidator::validate_project_root(missing).is_err());
    }

    #[test]
    fn require_file_reports_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("Cargo.toml");
        let err = PathValidator::require_file(&missing).unwrap_err();
        assert!(matches!(err, BumpError::FileNotFound(ref p) if p == &missing));

        // a directory does not satisfy a file requirement
        assert!(PathValidator::require_file(dir.path()).is_err());
    }
}
