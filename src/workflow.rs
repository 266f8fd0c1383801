use crate::agents::{BumpOutcome, ProjectScannerAgent, VersionUpdater};
use crate::error::Result;
use crate::release::BumpKind;
use colored::Colorize;
use std::path::Path;

/// Execute the bump workflow
pub fn execute_bump<P: AsRef<Path>>(
    project_path: P,
    kind: BumpKind,
    verbose: bool,
) -> Result<BumpOutcome> {
    let project_path = project_path.as_ref();
    let step = |message: &str| {
        if verbose {
            eprintln!("{}", message.yellow());
        }
    };

    step("1. Validating project structure...");
    let scanner = ProjectScannerAgent::new(project_path);
    let project_info = scanner.validate()?;

    step(&format!("2. Applying {kind} bump..."));
    let updater = VersionUpdater::new(project_info).verbose(verbose);
    let outcome = updater.update_version(kind)?;

    if verbose {
        eprintln!(
            "{} {} → {}",
            "✓".green(),
            outcome.previous.to_string().red(),
            outcome.current.to_string().green().bold()
        );
    }
    println!("{}", format!("Version updated to {}", outcome.current).green());

    Ok(outcome)
}
