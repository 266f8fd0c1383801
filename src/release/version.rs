use crate::error::{BumpError, Result};
use crate::release::BumpKind;
use std::fmt;
use std::str::FromStr;

/// A release version restricted to `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a strict SemVer core version. Pre-release and build metadata are rejected
    /// since the bump rules only cover the numeric triple.
    pub fn parse(version: &str) -> Result<Self> {
        let parsed = semver::Version::parse(version)
            .map_err(|_| BumpError::InvalidVersion(version.to_string()))?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(BumpError::InvalidVersion(version.to_string()));
        }

        Ok(Self::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Applies the increment rule for `kind`.
    pub fn bump(self, kind: BumpKind) -> Result<Self> {
        let overflow = || BumpError::InvalidVersion(format!("{self} cannot be bumped ({kind})"));

        let next = match kind {
            BumpKind::Major => Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpKind::Minor => Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpKind::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };

        Ok(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
