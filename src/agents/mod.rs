pub mod cargo_manifest;
pub mod project_scanner;
pub mod tauri_config;
pub mod version_updater;

pub use project_scanner::ProjectScannerAgent;
pub use version_updater::{BumpOutcome, VersionUpdater};
