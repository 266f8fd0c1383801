use crate::agents::cargo_manifest::CargoManifest;
use crate::agents::project_scanner::ProjectInfo;
use crate::agents::tauri_config::TauriConfig;
use crate::error::{BumpError, Result};
use crate::release::{BumpKind, Version};
use colored::Colorize;

/// Result of a successful bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub current: Version,
}

/// VersionUpdater keeps the version in `tauri.conf.json` and `Cargo.toml` in sync.
///
/// `tauri.conf.json` is the source of truth: its version is bumped and the result is
/// written to both documents. Both documents are parsed and edited before either is
/// written, so a malformed manifest never leaves the config half-updated. A failure
/// while writing the second file can still leave them out of step.
pub struct VersionUpdater {
    project: ProjectInfo,
    verbose: bool,
}

impl VersionUpdater {
    pub fn new(project: ProjectInfo) -> Self {
        Self {
            project,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Bump the version by `kind` and write it to both documents
    pub fn update_version(&self, kind: BumpKind) -> Result<BumpOutcome> {
        let mut tauri_conf = TauriConfig::load(&self.project.tauri_conf_path)?;
        self.log(format!("Loaded {}", tauri_conf.path().display()));
        let mut manifest = CargoManifest::load(&self.project.cargo_toml_path)?;
        self.log(format!("Loaded {}", manifest.path().display()));

        let previous: Version = tauri_conf.version()?.parse()?;
        let manifest_version = manifest.version()?;
        if manifest_version != previous.to_string() {
            eprintln!(
                "{}",
                format!(
                    "Warning: Cargo.toml has version {} but tauri.conf.json has {}; using {}",
                    manifest_version, previous, previous
                )
                .yellow()
            );
        }

        let current = previous.bump(kind)?;
        self.log(format!("Bumping {kind}: {previous} -> {current}"));

        tauri_conf.set_version(&current)?;
        manifest.set_version(&current)?;

        tauri_conf.save()?;
        self.log(format!("Wrote {}", tauri_conf.path().display()));
        manifest.save()?;
        self.log(format!("Wrote {}", manifest.path().display()));

        self.verify(&current)?;

        Ok(BumpOutcome { previous, current })
    }

    /// Reads both documents back and checks they carry `expected`.
    pub fn verify(&self, expected: &Version) -> Result<()> {
        let tauri_conf = TauriConfig::read_version(&self.project.tauri_conf_path)?;
        let cargo_toml = CargoManifest::read_version(&self.project.cargo_toml_path)?;

        let expected = expected.to_string();
        if tauri_conf != expected || cargo_toml != expected {
            return Err(BumpError::VersionMismatch {
                tauri_conf,
                cargo_toml,
            });
        }

        self.log(format!("Verified both documents at {expected}"));
        Ok(())
    }

    fn log(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", message.as_ref().dimmed());
        }
    }
}
