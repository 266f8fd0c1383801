use crate::error::BumpError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKind {
    /// Increment major, reset minor and patch
    Major,
    /// Increment minor, reset patch
    Minor,
    /// Increment patch
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        f.write_str(label)
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::InvalidVersionKind(other.to_string())),
        }
    }
}
